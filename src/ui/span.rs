use crate::ui::style::Style;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn width(&self) -> usize {
        self.text.width()
    }
}

pub type SpanLine = Vec<Span>;

/// Pad `text` with trailing spaces up to `width` display columns.
/// Amharic month names and Latin ones line up this way.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        return text.to_string();
    }
    let mut out = String::from(text);
    out.extend(std::iter::repeat_n(' ', width - current));
    out
}

#[cfg(test)]
mod tests {
    use super::pad_to_width;

    #[test]
    fn padding_counts_display_columns() {
        assert_eq!(pad_to_width("Su", 4), "Su  ");
        assert_eq!(pad_to_width("September", 4), "September");
        // Ethiopic glyphs are single-column.
        assert_eq!(pad_to_width("ሰኔ", 4), "ሰኔ  ");
    }
}
