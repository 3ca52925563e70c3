use std::path::PathBuf;
use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::{Captures, Regex};

use crate::convert::convert_with;
use crate::options::ConvertOptions;

static PRE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)(<pre(?:\s[^>]*)?>)(.*?)(</pre>)").expect("pre pattern"));

static DATA_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)data-src=["'](.*?)["']"#).expect("data-src pattern"));

static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\sclass=["'](.*?)["']"#).expect("class pattern"));

pub trait SourceLoader {
    fn load(&self, src: &str) -> Option<String>;
}

impl<F> SourceLoader for F
where
    F: Fn(&str) -> Option<String>,
{
    fn load(&self, src: &str) -> Option<String> {
        self(src)
    }
}

#[derive(Debug, Clone)]
pub struct DirLoader {
    base_dir: PathBuf,
}

impl DirLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl SourceLoader for DirLoader {
    fn load(&self, src: &str) -> Option<String> {
        let path = self.base_dir.join(src);
        match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!("data-src not readable: {}: {e}", path.display());
                None
            }
        }
    }
}

pub fn render_pre_blocks(html: &str, loader: &dyn SourceLoader, options: &ConvertOptions) -> String {
    PRE_BLOCK
        .replace_all(html, |caps: &Captures| {
            let open_tag = &caps[1];
            let whole = caps[0].to_string();

            let src = DATA_SRC.captures(open_tag).map(|c| c[1].to_string());
            let markdown = match src.as_deref().map(|s| (s, loader.load(s))) {
                Some((_, Some(text))) => text,
                Some((s, None)) => {
                    log::warn!("data-src {s:?} could not be loaded, using inline text");
                    decode_html_entities(&caps[2]).into_owned()
                }
                None => decode_html_entities(&caps[2]).into_owned(),
            };

            let Some(rendered) = convert_with(&markdown, options) else {
                return whole;
            };
            let class = match CLASS_ATTR.captures(open_tag) {
                Some(c) if !c[1].trim().is_empty() => format!("{} content-container", c[1].trim()),
                _ => "content-container".to_string(),
            };
            format!("<div class=\"{class}\">{rendered}</div>")
        })
        .into_owned()
}
