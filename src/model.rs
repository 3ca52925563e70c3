pub type TableRow = Vec<String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableClass {
    Info,
    Attachment,
}

impl TableClass {
    pub fn css_class(self) -> &'static str {
        match self {
            TableClass::Info => "info",
            TableClass::Attachment => "att",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockAlignment {
    None,
    Left,
    Right { min_width: Option<f64> },
}

impl BlockAlignment {
    pub fn is_open(self) -> bool {
        !matches!(self, BlockAlignment::None)
    }
}

#[derive(Debug)]
pub enum OpenTable {
    Simple { class: TableClass, rows: Vec<TableRow> },
    Evidence { rows: Vec<TableRow> },
}
