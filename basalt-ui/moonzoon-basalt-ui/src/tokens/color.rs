// Color Token System
// Reactive signals keyed off the effective theme. Scales follow the Basalt
// palette: a cool volcanic neutral ramp and a blue primary ramp.

use super::theme::{Theme, theme};
use zoon::*;

// Primary Color Scale
pub fn primary_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(98% 0.01 245)",
        Theme::Dark => "oklch(20% 0.01 245)",
    })
}

pub fn primary_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(95% 0.03 245)",
        Theme::Dark => "oklch(25% 0.03 245)",
    })
}

pub fn primary_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.05 245)",
        Theme::Dark => "oklch(30% 0.05 245)",
    })
}

pub fn primary_4() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(84% 0.08 245)",
        Theme::Dark => "oklch(36% 0.08 245)",
    })
}

pub fn primary_5() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(74% 0.11 245)",
        Theme::Dark => "oklch(46% 0.11 245)",
    })
}

pub fn primary_6() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(64% 0.14 245)",
        Theme::Dark => "oklch(56% 0.14 245)",
    })
}

pub fn primary_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(54% 0.17 245)",
        Theme::Dark => "oklch(66% 0.17 245)",
    })
}

pub fn primary_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(44% 0.16 245)",
        Theme::Dark => "oklch(76% 0.16 245)",
    })
}

pub fn primary_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(34% 0.14 245)",
        Theme::Dark => "oklch(86% 0.14 245)",
    })
}

// Neutral Color Scale
pub fn neutral_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(99% 0.02 250)",
        Theme::Dark => "oklch(12% 0.02 250)",
    })
}

pub fn neutral_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.02 250)",
        Theme::Dark => "oklch(15% 0.02 250)",
    })
}

pub fn neutral_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(93% 0.03 250)",
        Theme::Dark => "oklch(20% 0.03 250)",
    })
}

pub fn neutral_4() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.03 250)",
        Theme::Dark => "oklch(24% 0.03 250)",
    })
}

pub fn neutral_5() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(85% 0.03 250)",
        Theme::Dark => "oklch(30% 0.03 250)",
    })
}

pub fn neutral_6() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(78% 0.04 250)",
        Theme::Dark => "oklch(38% 0.04 250)",
    })
}

pub fn neutral_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(68% 0.04 250)",
        Theme::Dark => "oklch(48% 0.04 250)",
    })
}

pub fn neutral_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(58% 0.05 250)",
        Theme::Dark => "oklch(58% 0.05 250)",
    })
}

pub fn neutral_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(48% 0.05 250)",
        Theme::Dark => "oklch(68% 0.05 250)",
    })
}

pub fn neutral_10() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(38% 0.04 250)",
        Theme::Dark => "oklch(78% 0.04 250)",
    })
}

pub fn neutral_11() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(28% 0.03 250)",
        Theme::Dark => "oklch(88% 0.03 250)",
    })
}

pub fn neutral_12() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(18% 0.02 250)",
        Theme::Dark => "oklch(96% 0.02 250)",
    })
}

// Success Color Scale
pub fn success_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(95% 0.04 145)",
        Theme::Dark => "oklch(24% 0.04 145)",
    })
}

pub fn success_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(55% 0.14 145)",
        Theme::Dark => "oklch(65% 0.14 145)",
    })
}

pub fn success_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(45% 0.13 145)",
        Theme::Dark => "oklch(75% 0.13 145)",
    })
}

// Warning Color Scale
pub fn warning_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(95% 0.05 85)",
        Theme::Dark => "oklch(25% 0.05 85)",
    })
}

pub fn warning_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(60% 0.15 85)",
        Theme::Dark => "oklch(70% 0.15 85)",
    })
}

pub fn warning_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(50% 0.14 85)",
        Theme::Dark => "oklch(80% 0.14 85)",
    })
}

// Error Color Scale
pub fn error_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(95% 0.04 30)",
        Theme::Dark => "oklch(24% 0.04 30)",
    })
}

pub fn error_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(55% 0.17 30)",
        Theme::Dark => "oklch(65% 0.17 30)",
    })
}

pub fn error_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(45% 0.16 30)",
        Theme::Dark => "oklch(75% 0.16 30)",
    })
}

pub fn transparent() -> &'static str {
    "transparent"
}
