//! Styled text cells and their ANSI rendering.

use std::fmt;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Foreground and background colours for a [`Segment`].
///
/// The default style is null and renders no escape codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    foreground: Option<Rgb>,
    background: Option<Rgb>,
}

impl Style {
    /// Style with only a background colour (`on rgb(r,g,b)`).
    #[must_use]
    pub fn on(background: Rgb) -> Self {
        Self {
            foreground: None,
            background: Some(background),
        }
    }

    #[must_use]
    pub fn with_foreground(mut self, foreground: Rgb) -> Self {
        self.foreground = Some(foreground);
        self
    }

    #[must_use]
    pub fn foreground(&self) -> Option<Rgb> {
        self.foreground
    }

    #[must_use]
    pub fn background(&self) -> Option<Rgb> {
        self.background
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.foreground.is_none() && self.background.is_none()
    }
}

const RESET: &str = "\x1b[0m";

impl fmt::Display for Style {
    /// Writes the SGR escape sequence selecting this style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(Rgb(r, g, b)) = self.foreground {
            write!(f, "\x1b[38;2;{r};{g};{b}m")?;
        }
        if let Some(Rgb(r, g, b)) = self.background {
            write!(f, "\x1b[48;2;{r};{g};{b}m")?;
        }
        Ok(())
    }
}

/// A piece of text with a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    style: Style,
}

impl Segment {
    #[must_use]
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Unstyled segment
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.is_null() {
            f.write_str(&self.text)
        } else {
            write!(f, "{}{}{RESET}", self.style, self.text)
        }
    }
}
