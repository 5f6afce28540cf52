// Card Component
// Container for grouping related content.

use crate::tokens::*;
use futures_signals::signal::{SignalExt, always};
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardVariant {
    Default,  // Standard card with border
    Elevated, // Card with shadow
    Outlined, // Card with prominent border
    Filled,   // Card with background fill
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardSize {
    Small,
    Medium,
    Large,
}

pub struct CardBuilder {
    variant: CardVariant,
    size: CardSize,
    child: Option<RawElOrText>,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self {
            variant: CardVariant::Default,
            size: CardSize::Medium,
            child: None,
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn child(mut self, child: impl Element) -> Self {
        self.child = Some(child.unify());
        self
    }

    pub fn build(self) -> impl Element {
        let padding = match self.size {
            CardSize::Small => SPACING_12,
            CardSize::Medium => SPACING_16,
            CardSize::Large => SPACING_24,
        };

        let bg_color_signal = match self.variant {
            CardVariant::Filled => neutral_2().boxed_local(),
            _ => always(transparent()).boxed_local(),
        };

        let border_signal = match self.variant {
            CardVariant::Default | CardVariant::Filled => neutral_4()
                .map(|color| Border::new().width(BORDER_WIDTH_1).color(color))
                .boxed_local(),
            CardVariant::Outlined => neutral_6()
                .map(|color| Border::new().width(BORDER_WIDTH_2).color(color))
                .boxed_local(),
            CardVariant::Elevated => neutral_3()
                .map(|color| Border::new().width(BORDER_WIDTH_1).color(color))
                .boxed_local(),
        };

        let shadows_signal = match self.variant {
            CardVariant::Elevated => theme()
                .map(|theme| match theme {
                    Theme::Light => vec![
                        Shadow::new().y(4).x(0).blur(16).color(SHADOW_COLOR_BLACK_LIGHT),
                        Shadow::new().y(1).x(0).blur(3).color(SHADOW_COLOR_BLACK_SUBTLE),
                    ],
                    Theme::Dark => vec![
                        Shadow::new().y(4).x(0).blur(16).color(SHADOW_COLOR_BLACK_STRONG),
                    ],
                })
                .boxed_local(),
            _ => always(vec![]).boxed_local(),
        };

        let mut card = El::new()
            .s(Padding::all(padding))
            .s(RoundedCorners::all(CORNER_RADIUS_8))
            .s(Background::new().color_signal(bg_color_signal))
            .s(Borders::all_signal(border_signal))
            .s(Shadows::with_signal(shadows_signal))
            .s(transition_colors());

        if let Some(child) = self.child {
            card = card.child(child);
        }
        card
    }
}

impl Default for CardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn card() -> CardBuilder {
    CardBuilder::new()
}
