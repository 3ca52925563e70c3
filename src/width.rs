// Measured per UTF-16 code unit, not per grapheme.
pub fn visual_width(text: &str) -> f64 {
    text.chars().map(char_width).sum()
}

fn char_width(c: char) -> f64 {
    match c as u32 {
        0x0020..=0x007E | 0xFF61..=0xFF9F => 0.5,
        _ => c.len_utf16() as f64,
    }
}
