use std::fmt::Write;

use crate::line::{Directive, TableLine};
use crate::marker;
use crate::options::ConvertOptions;
use crate::width::visual_width;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnWidths {
    widths: Vec<f64>,
}

impl ColumnWidths {
    pub fn get(&self, column: usize) -> Option<f64> {
        self.widths.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    fn observe(&mut self, column: usize, width: f64) {
        if self.widths.len() <= column {
            self.widths.resize(column + 1, 0.0);
        }
        if width > self.widths[column] {
            self.widths[column] = width;
        }
    }

    fn floored(&self, column: usize, options: &ConvertOptions) -> f64 {
        self.get(column)
            .unwrap_or(0.0)
            .max(options.min_column_width)
    }

    pub fn signature_width(&self, options: &ConvertOptions) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.floored(0, options) + options.first_column_padding + self.floored(1, options))
    }

    pub fn stylesheet(&self, options: &ConvertOptions) -> String {
        if self.is_empty() {
            return String::new();
        }
        let mut css = String::from("<style>\n");
        for column in 0..self.len() {
            let _ = writeln!(
                css,
                "table.info td.col-{} {{ width: {}em; }}",
                column + 1,
                self.floored(column, options)
            );
        }
        css.push_str("</style>\n");
        css
    }
}

pub fn scan_column_widths<'a, I>(lines: I, options: &ConvertOptions) -> ColumnWidths
where
    I: IntoIterator<Item = &'a str>,
{
    let mut widths = ColumnWidths::default();
    let mut last_heading = "";
    let mut in_evidence = false;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if Directive::parse(line).is_some() {
            in_evidence = false;
            continue;
        }
        if line.starts_with('#') {
            last_heading = marker::content(line);
        }
        let Some(row) = TableLine::parse(line) else {
            in_evidence = false;
            continue;
        };
        match row {
            TableLine::Pipe { inner } if options.evidence_header.matches(inner) => {
                in_evidence = true;
            }
            // A list-form row ends an evidence table and opens an info table.
            TableLine::Pair { .. } => in_evidence = false,
            TableLine::Pipe { .. } => {}
        }
        if in_evidence || options.attachments.matches(last_heading) || row.is_separator() {
            continue;
        }
        for (column, cell) in row.cells().iter().enumerate() {
            widths.observe(column, visual_width(cell));
        }
    }

    log::debug!("info column widths: {:?}", widths.widths);
    widths
}
