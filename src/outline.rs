use crate::marker::MAX_LEVEL;

pub(crate) fn indent(level: u8) -> String {
    "    ".repeat(usize::from(level))
}

#[derive(Debug, Default)]
pub struct Outline {
    open: Vec<u8>,
}

impl Outline {
    pub fn level(&self) -> u8 {
        self.open.last().copied().unwrap_or(0)
    }

    pub fn content_indent(&self) -> String {
        let level = self.level();
        indent(if level > 0 { level + 1 } else { 0 })
    }

    // From level 0 the first list opens directly at `target`.
    pub fn adjust(&mut self, target: u8, new_item: bool, out: &mut String) {
        let target = target.min(MAX_LEVEL);
        while self.level() > target {
            self.close(out);
        }
        let mut opened = false;
        while self.level() < target {
            let next = if self.open.is_empty() {
                target
            } else {
                self.level() + 1
            };
            self.open(next, out);
            opened = true;
        }
        if new_item && !opened && target > 0 {
            let pad = indent(target);
            out.push_str(&format!("{pad}</li>\n{pad}<li>\n"));
        }
    }

    pub fn close_all(&mut self, out: &mut String) {
        while !self.open.is_empty() {
            self.close(out);
        }
    }

    fn open(&mut self, level: u8, out: &mut String) {
        out.push_str(&format!(
            "{}<ol class=\"lvl{level}\">\n{}<li>\n",
            indent(level - 1),
            indent(level)
        ));
        self.open.push(level);
    }

    fn close(&mut self, out: &mut String) {
        if let Some(level) = self.open.pop() {
            let pad = indent(level - 1);
            out.push_str(&format!("{pad}</li>\n{pad}</ol>\n"));
        }
    }
}
