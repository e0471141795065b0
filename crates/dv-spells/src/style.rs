//! Styled text spans
//!
//! Description output is a list of styled lines rather than strings with
//! inline colour markup. A span carries text plus one colour; the
//! renderer decides what a colour means on its surface.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Terminal palette colours.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum Colour {
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Magenta,
    Cyan,
    #[default]
    LightGrey,
    DarkGrey,
    LightRed,
    LightGreen,
    Yellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

/// A run of text in a single colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub colour: Colour,
}

impl Span {
    pub fn new(text: impl Into<String>, colour: Colour) -> Self {
        Self {
            text: text.into(),
            colour,
        }
    }

    /// A span in the default body colour.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Colour::LightGrey)
    }
}

/// One display line built from coloured spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Append text, merging into the previous span when the colour matches.
    pub fn push_str(&mut self, text: &str, colour: Colour) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.colour == colour {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(Span::new(text, colour));
    }

    pub fn push(&mut self, span: Span) {
        self.push_str(&span.text, span.colour);
    }

    /// The line's text with styling stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            out.push_str(&span.text);
        }
        out
    }
}

impl From<Span> for StyledLine {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

/// Truncate to `width` characters, or right-pad with spaces to exactly
/// `width`. Counts chars, not bytes.
pub fn chop_pad(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    let len = out.chars().count();
    for _ in len..width {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chop_pad() {
        assert_eq!(chop_pad("Freeze", 10), "Freeze    ");
        assert_eq!(chop_pad("Conjure Ball Lightning", 10), "Conjure Ba");
        assert_eq!(chop_pad("", 3), "   ");
        assert_eq!(chop_pad("abc", 0), "");
    }

    #[test]
    fn test_push_str_merges_same_colour() {
        let mut line = StyledLine::new();
        line.push_str("a - ", Colour::White);
        line.push_str("Freeze", Colour::White);
        line.push_str("(1d5)", Colour::LightBlue);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].text, "a - Freeze");
        assert_eq!(line.plain_text(), "a - Freeze(1d5)");
    }

    #[test]
    fn test_push_str_ignores_empty() {
        let mut line = StyledLine::new();
        line.push_str("", Colour::White);
        assert!(line.is_empty());
    }

    #[test]
    fn test_colour_names() {
        assert_eq!(Colour::LightGrey.to_string(), "lightgrey");
        assert_eq!(Colour::DarkGrey.to_string(), "darkgrey");
        assert_eq!(Colour::LightRed.to_string(), "lightred");
        assert_eq!("white".parse::<Colour>().unwrap(), Colour::White);
    }
}
