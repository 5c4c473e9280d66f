//! Color definitions for toast variants

use toastkit_core::Variant;

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color from 0-255 values
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// 8-bit channels, alpha dropped
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// CSS-style `#rrggbb`
    pub fn to_hex_string(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Per-variant toast palette
#[derive(Debug, Clone)]
pub struct ToastColors {
    pub default: Rgba,
    pub success: Rgba,
    pub info: Rgba,
    pub warning: Rgba,
    pub danger: Rgba,
    /// Secondary text (description, hints)
    pub muted: Rgba,
}

impl ToastColors {
    pub fn dark() -> Self {
        Self {
            default: Rgba::rgb(0xeceff4),
            success: Rgba::rgb(0x3fb950),
            info: Rgba::rgb(0x58a6ff),
            warning: Rgba::rgb(0xd29922),
            danger: Rgba::rgb(0xf85149),
            muted: Rgba::rgb(0x8b949e),
        }
    }

    pub fn accent(&self, variant: Variant) -> Rgba {
        match variant {
            Variant::Default => self.default,
            Variant::Success => self.success,
            Variant::Info => self.info,
            Variant::Warning => self.warning,
            Variant::Danger => self.danger,
        }
    }
}
