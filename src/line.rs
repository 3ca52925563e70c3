use std::sync::LazyLock;

use regex::Regex;

use crate::model::TableRow;

static PAGE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^### --.*--$").expect("page break pattern"));

static LIST_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- (.*?)[：:](.*)$").expect("list row pattern"));

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s|:-]+$").expect("separator pattern"));

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?:令和|平成|昭和|大正|明治)\s*(?:[0-9０-９]{1,2}|[元〇○一二三四五六七八九十]{1,3})",
        r"|[0-9０-９]{1,4})",
        r"\s*年\s*(?:[0-9０-９]{1,2}|[〇○一二三四五六七八九十]{1,3})",
        r"\s*月\s*(?:[0-9０-９]{1,2}|[元〇○一二三四五六七八九十]{1,3})\s*日$",
    ))
    .expect("date pattern")
});

static DESTINATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[　\s](?:御中|様)$").expect("destination pattern"));

pub const TERMINAL_MARK: &str = "以上";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    OpenRight,
    OpenLeft,
    CloseBlock,
    PageBreak,
}

impl Directive {
    pub fn parse(line: &str) -> Option<Directive> {
        match line {
            "### --右" => Some(Directive::OpenRight),
            "### --左" => Some(Directive::OpenLeft),
            "### --" => Some(Directive::CloseBlock),
            _ if PAGE_BREAK.is_match(line) => Some(Directive::PageBreak),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLine<'a> {
    Pipe { inner: &'a str },
    // - label：value
    Pair { label: &'a str, value: &'a str },
}

impl<'a> TableLine<'a> {
    pub fn parse(line: &'a str) -> Option<TableLine<'a>> {
        if let Some(inner) = line.strip_prefix('|').and_then(|s| s.strip_suffix('|')) {
            return Some(TableLine::Pipe { inner });
        }
        let caps = LIST_ROW.captures(line)?;
        Some(TableLine::Pair {
            label: caps.get(1)?.as_str(),
            value: caps.get(2)?.as_str(),
        })
    }

    pub fn is_pipe(&self) -> bool {
        matches!(self, TableLine::Pipe { .. })
    }

    pub fn is_separator(&self) -> bool {
        match self {
            TableLine::Pipe { inner } => is_separator_text(inner),
            TableLine::Pair { .. } => false,
        }
    }

    pub fn cells(&self) -> TableRow {
        match self {
            TableLine::Pipe { inner } => inner.split('|').map(|c| c.trim().to_string()).collect(),
            TableLine::Pair { label, value } => {
                vec![label.trim().to_string(), value.trim().to_string()]
            }
        }
    }
}

pub fn is_separator_row(row: &TableRow) -> bool {
    is_separator_text(&row.join("|"))
}

// A row of blank cells is a continuation row, not a separator.
fn is_separator_text(inner: &str) -> bool {
    inner.contains('-') && SEPARATOR.is_match(inner)
}

pub fn is_date(text: &str) -> bool {
    DATE.is_match(text)
}

pub fn is_destination(text: &str) -> bool {
    DESTINATION.is_match(text)
}
