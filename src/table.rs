use std::sync::LazyLock;

use html_escape::encode_text;
use regex::Regex;

use crate::model::{TableClass, TableRow};
use crate::outline::indent;

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9０-９,，．.]+円?$").expect("amount pattern"));

pub fn is_amount(text: &str) -> bool {
    AMOUNT.is_match(text)
}

pub fn render_table(rows: Vec<TableRow>, class: TableClass, level: u8) -> String {
    if rows.is_empty() {
        return String::new();
    }
    log::debug!("flushing {} table with {} rows", class.css_class(), rows.len());

    let mut html = format!("{}<table class=\"{}\">\n", indent(level), class.css_class());
    for row in &rows {
        html.push_str(&format!("{}<tr>\n", indent(level + 1)));
        for (i, cell) in row.iter().enumerate() {
            let text = cell.trim();
            let mut classes = Vec::new();
            if class == TableClass::Info {
                classes.push(format!("col-{}", i + 1));
            }
            if i > 0 && is_amount(text) {
                classes.push("val".to_string());
            }
            let class_attr = if classes.is_empty() {
                String::new()
            } else {
                format!(" class=\"{}\"", classes.join(" "))
            };
            html.push_str(&format!(
                "{}<td{class_attr}>{}</td>\n",
                indent(level + 2),
                encode_text(text)
            ));
        }
        html.push_str(&format!("{}</tr>\n", indent(level + 1)));
    }
    html.push_str(&format!("{}</table>\n", indent(level)));
    html
}
