use html_escape::encode_text;

use crate::evidence::render_evidence_table;
use crate::line::{Directive, TERMINAL_MARK, TableLine, is_date, is_destination};
use crate::marker;
use crate::model::{BlockAlignment, OpenTable, TableClass};
use crate::options::ConvertOptions;
use crate::outline::Outline;
use crate::scan::{ColumnWidths, scan_column_widths};
use crate::table::render_table;
use crate::width::visual_width;

pub fn convert_with(markdown: &str, options: &ConvertOptions) -> Option<String> {
    if markdown.trim().is_empty() {
        return None;
    }
    let lines: Vec<&str> = markdown.lines().collect();
    let widths = scan_column_widths(lines.iter().copied(), options);

    let mut converter = Converter::new(options, &widths);
    for line in &lines {
        converter.line(line);
    }
    let body = converter.finish();

    Some(widths.stylesheet(options) + &body)
}

struct Converter<'a> {
    options: &'a ConvertOptions,
    signature_width: Option<f64>,
    html: String,
    outline: Outline,
    table: Option<OpenTable>,
    block: BlockAlignment,
    last_heading: String,
}

impl<'a> Converter<'a> {
    fn new(options: &'a ConvertOptions, widths: &ColumnWidths) -> Self {
        Self {
            options,
            signature_width: widths.signature_width(options),
            html: String::new(),
            outline: Outline::default(),
            table: None,
            block: BlockAlignment::None,
            last_heading: String::new(),
        }
    }

    fn line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        if let Some(directive) = Directive::parse(line) {
            self.directive(directive);
        } else if let Some(row) = TableLine::parse(line) {
            self.table_row(row);
        } else {
            self.flush_table();
            self.text(line);
        }
    }

    fn finish(mut self) -> String {
        self.flush_table();
        self.outline.close_all(&mut self.html);
        self.close_block();
        self.html
    }

    fn directive(&mut self, directive: Directive) {
        log::debug!("directive {directive:?}");
        self.flush_table();
        self.outline.close_all(&mut self.html);
        match directive {
            Directive::OpenRight => {
                self.close_block();
                self.html.push_str("<div class=\"right\">\n");
                self.block = BlockAlignment::Right {
                    min_width: self.signature_width,
                };
            }
            Directive::OpenLeft => {
                self.close_block();
                self.html.push_str("<div class=\"left\">\n");
                self.block = BlockAlignment::Left;
            }
            Directive::CloseBlock => self.close_block(),
            Directive::PageBreak => self.html.push_str("<div class=\"break\"></div>\n"),
        }
    }

    fn close_block(&mut self) {
        if self.block.is_open() {
            self.html.push_str("</div>\n");
            self.block = BlockAlignment::None;
        }
    }

    fn table_row(&mut self, row: TableLine<'_>) {
        let in_evidence = matches!(self.table, Some(OpenTable::Evidence { .. }));
        let evidence_header = match row {
            TableLine::Pipe { inner } => self.options.evidence_header.matches(inner),
            TableLine::Pair { .. } => false,
        };

        if row.is_pipe() && (in_evidence || evidence_header) {
            if !in_evidence {
                self.flush_table();
                self.outline.close_all(&mut self.html);
                self.table = Some(OpenTable::Evidence { rows: Vec::new() });
            }
            if let Some(OpenTable::Evidence { rows }) = &mut self.table {
                rows.push(row.cells());
            }
            return;
        }

        if !matches!(self.table, Some(OpenTable::Simple { .. })) {
            self.flush_table();
            self.outline.close_all(&mut self.html);
            let class = if self.options.attachments.matches(&self.last_heading) {
                TableClass::Attachment
            } else {
                TableClass::Info
            };
            self.table = Some(OpenTable::Simple {
                class,
                rows: Vec::new(),
            });
        }
        if row.is_separator() {
            return;
        }
        if let Some(OpenTable::Simple { rows, .. }) = &mut self.table {
            rows.push(row.cells());
        }
    }

    fn flush_table(&mut self) {
        let level = self.outline.level();
        let rendered = match self.table.take() {
            Some(OpenTable::Simple { class, rows }) => render_table(rows, class, level),
            Some(OpenTable::Evidence { rows }) => render_evidence_table(rows, level),
            None => return,
        };
        self.html.push_str(&rendered);
    }

    fn text(&mut self, line: &str) {
        let is_heading = line.starts_with('#');
        let marked = marker::detect(line);
        let (level, text) = match marked {
            Some(m) => (m.level, m.text),
            None => (self.outline.level(), marker::strip_hashes(line)),
        };

        self.outline.adjust(level, marked.is_some(), &mut self.html);
        let pad = self.outline.content_indent();
        let escaped = encode_text(text);

        if is_heading {
            self.last_heading = text.to_string();
            if marked.is_some() {
                self.html.push_str(&format!("{pad}<h2>{escaped}</h2>\n"));
            } else {
                self.outline.close_all(&mut self.html);
                self.html.push_str(&format!("<h1>{escaped}</h1>\n"));
            }
        } else if text == TERMINAL_MARK {
            self.outline.close_all(&mut self.html);
            self.html
                .push_str(&format!("<div class=\"end-mark\">{escaped}</div>\n"));
        } else if is_date(text) {
            self.html
                .push_str(&format!("{pad}<div class=\"date\">{escaped}</div>\n"));
        } else if is_destination(text) {
            self.html
                .push_str(&format!("{pad}<div class=\"dest\">{escaped}</div>\n"));
        } else {
            let style = self.paragraph_style(text);
            self.html.push_str(&format!("{pad}<p{style}>{escaped}</p>\n"));
        }
    }

    fn paragraph_style(&self, text: &str) -> String {
        let BlockAlignment::Right { min_width } = self.block else {
            return String::new();
        };
        let width = visual_width(text).max(min_width.unwrap_or(0.0));
        if width > 0.0 {
            format!(" style=\"width: {width}em\"")
        } else {
            String::new()
        }
    }
}
