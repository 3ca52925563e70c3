use html_escape::encode_text;

use crate::line::is_separator_row;
use crate::model::TableRow;
use crate::outline::indent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedCell<'a> {
    Cell { text: &'a str, rowspan: usize },
    Covered,
}

fn cell(rows: &[TableRow], row: usize, column: usize) -> Option<&str> {
    rows.get(row)?.get(column).map(|c| c.trim())
}

/// A blank cell continues the nearest non-blank cell above it in the same column.
pub fn merge_rows(body: &[TableRow]) -> Vec<Vec<MergedCell<'_>>> {
    let columns = body.iter().map(Vec::len).max().unwrap_or(0);
    // First row index each column is free again.
    let mut covered_until = vec![0usize; columns];

    body.iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, text)| {
                    if r < covered_until[c] {
                        return MergedCell::Covered;
                    }
                    let text = text.trim();
                    if text.is_empty() {
                        covered_until[c] = r + 1;
                        return MergedCell::Cell { text, rowspan: 1 };
                    }
                    let rowspan = 1 + (r + 1..body.len())
                        .take_while(|&next| cell(body, next, c) == Some(""))
                        .count();
                    covered_until[c] = r + rowspan;
                    MergedCell::Cell { text, rowspan }
                })
                .collect()
        })
        .collect()
}

pub fn render_evidence_table(rows: Vec<TableRow>, level: u8) -> String {
    let Some((header, rest)) = rows.split_first() else {
        return String::new();
    };
    let body = match rest.split_first() {
        Some((first, data)) if is_separator_row(first) => data,
        _ => rest,
    };
    log::debug!("flushing evidence table with {} data rows", body.len());

    let mut html = format!("{}<table class=\"evidence\">\n", indent(level));
    html.push_str(&format!("{}<thead>\n", indent(level + 1)));
    html.push_str(&format!("{}<tr>\n", indent(level + 2)));
    for (i, text) in header.iter().enumerate() {
        html.push_str(&format!(
            "{}<th class=\"col-{}\">{}</th>\n",
            indent(level + 3),
            i + 1,
            encode_text(text.trim())
        ));
    }
    html.push_str(&format!("{}</tr>\n", indent(level + 2)));
    html.push_str(&format!("{}</thead>\n", indent(level + 1)));

    html.push_str(&format!("{}<tbody>\n", indent(level + 1)));
    for row in merge_rows(body) {
        html.push_str(&format!("{}<tr>\n", indent(level + 2)));
        for (i, merged) in row.iter().enumerate() {
            let MergedCell::Cell { text, rowspan } = merged else {
                continue;
            };
            let rowspan_attr = if *rowspan > 1 {
                format!(" rowspan=\"{rowspan}\"")
            } else {
                String::new()
            };
            html.push_str(&format!(
                "{}<td class=\"col-{}\"{rowspan_attr}>{}</td>\n",
                indent(level + 3),
                i + 1,
                encode_text(text)
            ));
        }
        html.push_str(&format!("{}</tr>\n", indent(level + 2)));
    }
    html.push_str(&format!("{}</tbody>\n", indent(level + 1)));
    html.push_str(&format!("{}</table>\n", indent(level)));
    html
}
