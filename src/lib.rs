mod convert;
mod error;
mod evidence;
mod host;
mod line;
mod marker;
mod model;
mod options;
mod outline;
mod scan;
mod table;
mod width;

pub use convert::convert_with;
pub use error::Error;
pub use evidence::{MergedCell, merge_rows, render_evidence_table};
pub use host::{DirLoader, SourceLoader, render_pre_blocks};
pub use marker::{Marked, detect as detect_marker};
pub use model::{TableClass, TableRow};
pub use options::{AttachmentRule, ConvertOptions, EvidenceHeader};
pub use scan::{ColumnWidths, scan_column_widths};
pub use table::render_table;
pub use width::visual_width;

use std::path::Path;

/// Blank input yields `None`.
pub fn convert(markdown: &str) -> Option<String> {
    convert_with(markdown, &ConvertOptions::default())
}

pub fn convert_markdown_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<(), Error> {
    let markdown = std::fs::read_to_string(input)?;
    let html = convert_with(&markdown, options)
        .ok_or_else(|| Error::EmptyInput(input.to_path_buf()))?;
    std::fs::write(output, html).map_err(Error::Io)
}

pub fn render_html_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<(), Error> {
    let page = std::fs::read_to_string(input)?;
    let base_dir = input.parent().unwrap_or_else(|| Path::new("."));
    let html = render_pre_blocks(&page, &DirLoader::new(base_dir), options);
    std::fs::write(output, html).map_err(Error::Io)
}
