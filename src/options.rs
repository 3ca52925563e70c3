#[derive(Clone, Debug)]
pub enum AttachmentRule {
    Title(String),
    Predicate(fn(&str) -> bool),
}

impl AttachmentRule {
    pub fn matches(&self, heading: &str) -> bool {
        match self {
            AttachmentRule::Title(title) => heading == title,
            AttachmentRule::Predicate(f) => f(heading),
        }
    }
}

impl Default for AttachmentRule {
    fn default() -> Self {
        AttachmentRule::Title("附属書類".to_string())
    }
}

#[derive(Clone, Debug)]
pub struct EvidenceHeader {
    pub index_title: String,
    pub item_title: String,
}

impl EvidenceHeader {
    pub fn matches(&self, inner: &str) -> bool {
        inner.contains(&self.index_title) && inner.contains(&self.item_title)
    }
}

impl Default for EvidenceHeader {
    fn default() -> Self {
        Self {
            index_title: "号証".to_string(),
            item_title: "標目".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub attachments: AttachmentRule,
    pub evidence_header: EvidenceHeader,
    pub min_column_width: f64,
    pub first_column_padding: f64, // em, added to the signature width
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            attachments: AttachmentRule::default(),
            evidence_header: EvidenceHeader::default(),
            min_column_width: 4.0,
            first_column_padding: 1.5,
        }
    }
}
