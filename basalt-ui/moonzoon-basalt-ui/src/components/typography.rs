// Typography Components
// Semantic heading/body helpers on the typography scale.

use crate::tokens::*;
use zoon::*;

pub fn h1(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_40).weight(FontWeight::Bold))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h2(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_32).weight(FontWeight::Bold))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h3(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_24).weight(FontWeight::SemiBold))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h4(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_20).weight(FontWeight::SemiBold))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h5(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_18).weight(FontWeight::Medium))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h6(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_16).weight(FontWeight::Medium))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn paragraph(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_16))
        .s(Font::new().color_signal(neutral_11()))
        .child(Text::new(text.into()))
}

pub fn lead(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_18))
        .s(Font::new().color_signal(neutral_10()))
        .child(Text::new(text.into()))
}

pub fn small(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_14))
        .s(Font::new().color_signal(neutral_9()))
        .child(Text::new(text.into()))
}

pub fn code(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_14)
            .family([FontFamily::new(FONT_FAMILY_MONO)]))
        .s(Padding::new().x(SPACING_4).y(SPACING_2))
        .s(RoundedCorners::all(CORNER_RADIUS_4))
        .s(Background::new().color_signal(neutral_2()))
        .s(Font::new().color_signal(neutral_11()))
        .child(Text::new(text.into()))
}
