// Badge Component
// Small status pill rendered from the semantic color scales.

use crate::tokens::*;
use futures_signals::signal::SignalExt;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeVariant {
    Neutral,
    Primary,
    Success,
    Warning,
    Error,
}

pub struct BadgeBuilder {
    label: String,
    variant: BadgeVariant,
}

impl BadgeBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::Neutral,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn build(self) -> impl Element {
        let (bg_signal, text_signal) = match self.variant {
            BadgeVariant::Neutral => (neutral_3().boxed_local(), neutral_11().boxed_local()),
            BadgeVariant::Primary => (primary_2().boxed_local(), primary_8().boxed_local()),
            BadgeVariant::Success => (success_2().boxed_local(), success_8().boxed_local()),
            BadgeVariant::Warning => (warning_2().boxed_local(), warning_8().boxed_local()),
            BadgeVariant::Error => (error_2().boxed_local(), error_8().boxed_local()),
        };

        El::new()
            .s(Padding::new().x(SPACING_8).y(SPACING_2))
            .s(RoundedCorners::all(CORNER_RADIUS_MAX))
            .s(Background::new().color_signal(bg_signal))
            .s(Font::new()
                .size(FONT_SIZE_12)
                .weight(FontWeight::Medium)
                .color_signal(text_signal))
            .s(transition_colors())
            .child(Text::new(self.label))
    }
}

pub fn badge(label: impl Into<String>) -> BadgeBuilder {
    BadgeBuilder::new(label)
}
