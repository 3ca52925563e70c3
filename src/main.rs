use clap::Parser;
use court_markdown::{AttachmentRule, ConvertOptions, EvidenceHeader};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "court-markdown", about = "Render court markdown as HTML")]
struct Args {
    /// Input markdown file, or an HTML page whose <pre> blocks hold markdown
    input: PathBuf,
    /// Output file (defaults to input with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Heading that marks the attachments section
    #[arg(long, default_value = "附属書類")]
    attachments_title: String,
    /// Evidence table column title for the exhibit number
    #[arg(long, default_value = "号証")]
    evidence_index_title: String,
    /// Evidence table column title for the item name
    #[arg(long, default_value = "標目")]
    evidence_item_title: String,
}

fn is_html(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("html" | "htm")
    )
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.input.is_file() {
        eprintln!("Error: not a file: {}", args.input.display());
        std::process::exit(1);
    }

    let options = ConvertOptions {
        attachments: AttachmentRule::Title(args.attachments_title),
        evidence_header: EvidenceHeader {
            index_title: args.evidence_index_title,
            item_title: args.evidence_item_title,
        },
        ..ConvertOptions::default()
    };

    let html_input = is_html(&args.input);
    let output = args.output.unwrap_or_else(|| {
        if html_input {
            args.input.with_extension("rendered.html")
        } else {
            args.input.with_extension("html")
        }
    });

    let result = if html_input {
        court_markdown::render_html_file(&args.input, &output, &options)
    } else {
        court_markdown::convert_markdown_file(&args.input, &output, &options)
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
