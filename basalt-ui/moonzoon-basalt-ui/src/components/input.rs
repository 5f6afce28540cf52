// Input Component
// Labeled text input with error messaging.

use crate::tokens::*;
use futures_signals::signal::SignalExt;
use zoon::*;

pub struct InputBuilder {
    id: String,
    label: Option<String>,
    placeholder: Option<String>,
    error: Option<String>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(String) + 'static>>,
}

impl InputBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            placeholder: None,
            error: None,
            disabled: false,
            on_change: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let (focused, focused_signal) = Mutable::new_and_signal(false);
        let has_error = self.error.is_some();

        let border_signal = map_ref! {
            let focused = focused_signal,
            let neutral = neutral_5(),
            let error = error_7() =>
            if has_error {
                Border::new().width(BORDER_WIDTH_2).color(*error)
            } else if *focused {
                Border::new().width(BORDER_WIDTH_1).color(FOCUS_RING_COLOR_DEFAULT)
            } else {
                Border::new().width(BORDER_WIDTH_1).color(*neutral)
            }
        }
        .boxed_local();

        let mut input = TextInput::new()
            .id(self.id.clone())
            .s(Padding::new().x(SPACING_12).y(SPACING_8))
            .s(RoundedCorners::all(CORNER_RADIUS_6))
            .s(Background::new().color_signal(neutral_1()))
            .s(Font::new().size(FONT_SIZE_16).color_signal(neutral_12()))
            .s(Borders::all_signal(border_signal))
            .s(transition_colors())
            .on_focused_change(clone!((focused) move |is_focused| {
                focused.set_neq(is_focused);
            }));

        if let Some(placeholder) = self.placeholder {
            input = input.placeholder(Placeholder::new(placeholder));
        }
        if self.disabled {
            input = input.read_only(true);
        }
        if let Some(handler) = self.on_change {
            input = input.on_change(move |text| handler(text));
        }

        let mut column = Column::new().s(Gap::new().y(SPACING_4));
        if let Some(label) = self.label {
            column = column.item(
                Label::new()
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .weight(FontWeight::Medium)
                        .color_signal(neutral_11()))
                    .label(label)
                    .for_input(self.id.clone()),
            );
        }
        column = column.item(input);
        if let Some(error) = self.error {
            column = column.item(
                El::new()
                    .s(Font::new().size(FONT_SIZE_12).color_signal(error_7()))
                    .child(Text::new(error)),
            );
        }
        column
    }
}

pub fn input(id: impl Into<String>) -> InputBuilder {
    InputBuilder::new(id)
}
