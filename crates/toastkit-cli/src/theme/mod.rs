//! Theme system for the terminal renderer
//!
//! Maps toast variants to accent colors and icon glyphs.

mod colors;

pub use colors::*;

use toastkit_core::Variant;

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ToastColors,
    /// Emit ANSI 24-bit color escapes
    pub ansi: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the default dark theme
    pub fn dark() -> Self {
        Self {
            colors: ToastColors::dark(),
            ansi: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Same palette without escape sequences
    pub fn plain() -> Self {
        Self {
            ansi: false,
            ..Self::dark()
        }
    }

    /// Default icon glyph for a variant
    pub fn icon(&self, variant: Variant) -> &'static str {
        match variant {
            Variant::Default => "•",
            Variant::Success => "✔",
            Variant::Info => "ℹ",
            Variant::Warning => "⚠",
            Variant::Danger => "✖",
        }
    }

    /// Wrap `text` in the variant's accent color
    pub fn paint(&self, variant: Variant, text: &str) -> String {
        self.paint_rgba(self.colors.accent(variant), text)
    }

    pub fn paint_muted(&self, text: &str) -> String {
        self.paint_rgba(self.colors.muted, text)
    }

    fn paint_rgba(&self, color: Rgba, text: &str) -> String {
        if !self.ansi {
            return text.to_string();
        }
        let (r, g, b) = color.to_rgb8();
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
    }
}
