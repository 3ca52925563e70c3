use std::sync::LazyLock;

use regex::Regex;

pub const MAX_LEVEL: u8 = 7;

static MARKERS: LazyLock<Vec<(u8, Regex)>> = LazyLock::new(|| {
    [
        (1, r"^#*\s*(第[0-9]+)[　\s]"),
        (2, r"^#*\s*([0-9]+)[　\s]"),
        (3, r"^#*\s*(\([0-9]+\))[　\s]"),
        (4, r"^#*\s*([ア-ン])[　\s]"),
        (5, r"^#*\s*(\([ア-ン]\))[　\s]"),
        (6, r"^#*\s*([a-z])[　\s]"),
        (7, r"^#*\s*(\([a-z]\))[　\s]"),
    ]
    .into_iter()
    .map(|(level, pattern)| (level, Regex::new(pattern).expect("marker pattern")))
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marked<'a> {
    pub level: u8,
    pub marker: &'a str,
    pub text: &'a str,
}

pub fn detect(line: &str) -> Option<Marked<'_>> {
    MARKERS.iter().find_map(|(level, re)| {
        let caps = re.captures(line)?;
        let marker = caps.get(1)?;
        Some(Marked {
            level: *level,
            marker: marker.as_str(),
            text: line[marker.end()..].trim(),
        })
    })
}

pub fn strip_hashes(line: &str) -> &str {
    line.trim_start_matches('#').trim()
}

pub fn content(line: &str) -> &str {
    match detect(line) {
        Some(marked) => marked.text,
        None => strip_hashes(line),
    }
}
