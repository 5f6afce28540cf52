// Icon Component
// Glyph-based icons so the library stays asset-free.

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconName {
    Sun,
    Moon,
    Monitor,
    Menu,
    Close,
    ChevronRight,
    Check,
}

impl IconName {
    pub fn glyph(self) -> &'static str {
        match self {
            IconName::Sun => "\u{2600}\u{FE0E}",     // ☀
            IconName::Moon => "\u{263E}\u{FE0E}",    // ☾
            IconName::Monitor => "\u{2750}",         // ❐
            IconName::Menu => "\u{2630}",            // ☰
            IconName::Close => "\u{2715}",           // ✕
            IconName::ChevronRight => "\u{203A}",    // ›
            IconName::Check => "\u{2713}",           // ✓
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconSize {
    Small,
    Medium,
    Large,
}

impl IconSize {
    pub fn font_size(self) -> u32 {
        match self {
            IconSize::Small => FONT_SIZE_14,
            IconSize::Medium => FONT_SIZE_16,
            IconSize::Large => FONT_SIZE_20,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconColor {
    // Inherit the surrounding text color
    Current,
    Muted,
    Primary,
    Error,
}

pub struct IconBuilder {
    name: IconName,
    size: IconSize,
    color: IconColor,
    aria_label: Option<String>,
}

impl IconBuilder {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: IconSize::Medium,
            color: IconColor::Current,
            aria_label: None,
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: IconColor) -> Self {
        self.color = color;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn build(self) -> impl Element {
        let mut icon = El::new()
            .s(Font::new().size(self.size.font_size()))
            .child(Text::new(self.name.glyph()));

        icon = match self.color {
            IconColor::Current => icon,
            IconColor::Muted => icon.s(Font::new().color_signal(neutral_8())),
            IconColor::Primary => icon.s(Font::new().color_signal(primary_7())),
            IconColor::Error => icon.s(Font::new().color_signal(error_7())),
        };

        let aria_label = self.aria_label;
        icon.update_raw_el(move |raw_el| match aria_label {
            Some(label) => raw_el.attr("aria-label", &label),
            None => raw_el.attr("aria-hidden", "true"),
        })
    }
}

pub fn icon(name: IconName) -> IconBuilder {
    IconBuilder::new(name)
}
