// Button Component
// Signal-driven styling over the theme tokens.

use crate::components::icon::*;
use crate::tokens::*;
use futures_signals::signal::{SignalExt, always};
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
    Destructive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

pub struct ButtonBuilder {
    label: Option<String>,
    label_signal: Option<Box<dyn Signal<Item = String> + Unpin>>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    disabled_signal: Option<Box<dyn Signal<Item = bool> + Unpin>>,
    left_icon: Option<IconName>,
    right_icon: Option<IconName>,
    aria_label: Option<String>,
    on_press: Option<Box<dyn Fn()>>,
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            label_signal: None,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            disabled_signal: None,
            left_icon: None,
            right_icon: None,
            aria_label: None,
            on_press: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self.label_signal = None;
        self
    }

    pub fn label_signal<S>(mut self, label_signal: S) -> Self
    where
        S: Signal<Item = String> + Unpin + 'static,
    {
        self.label_signal = Some(Box::new(label_signal));
        self.label = None;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self.disabled_signal = None;
        self
    }

    pub fn disabled_signal<S>(mut self, disabled_signal: S) -> Self
    where
        S: Signal<Item = bool> + Unpin + 'static,
    {
        self.disabled_signal = Some(Box::new(disabled_signal));
        self.disabled = false;
        self
    }

    pub fn left_icon(mut self, icon: IconName) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn right_icon(mut self, icon: IconName) -> Self {
        self.right_icon = Some(icon);
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn build(mut self) -> impl Element {
        let (hovered, hovered_signal) = Mutable::new_and_signal(false);
        let (focused, focused_signal) = Mutable::new_and_signal(false);

        let (padding_x, padding_y, font_size, icon_size) = match self.size {
            ButtonSize::Small => (SPACING_12, SPACING_6, FONT_SIZE_14, IconSize::Small),
            ButtonSize::Medium => (SPACING_16, SPACING_8, FONT_SIZE_16, IconSize::Medium),
            ButtonSize::Large => (SPACING_20, SPACING_12, FONT_SIZE_18, IconSize::Large),
        };

        let variant = self.variant;
        let disabled = self.disabled;
        let disabled_signal = self.disabled_signal.take();

        let (is_disabled_mutable, is_disabled_signal) = Mutable::new_and_signal(disabled);
        if let Some(signal) = disabled_signal {
            Task::start(signal.for_each(clone!((is_disabled_mutable) move |signal_disabled| {
                is_disabled_mutable.set_neq(disabled || signal_disabled);
                async {}
            })));
        }
        let is_disabled_broadcast = is_disabled_signal.broadcast();

        let bg_color_signal = match variant {
            ButtonVariant::Primary => primary_7().boxed_local(),
            ButtonVariant::Secondary => neutral_4().boxed_local(),
            ButtonVariant::Destructive => error_7().boxed_local(),
            ButtonVariant::Outline | ButtonVariant::Ghost | ButtonVariant::Link => {
                always(transparent()).boxed_local()
            }
        };

        let hover_bg_color_signal = match variant {
            ButtonVariant::Primary => primary_8().boxed_local(),
            ButtonVariant::Secondary => neutral_5().boxed_local(),
            ButtonVariant::Destructive => error_8().boxed_local(),
            ButtonVariant::Outline | ButtonVariant::Ghost | ButtonVariant::Link => {
                primary_2().boxed_local()
            }
        };

        let text_color_signal = match variant {
            ButtonVariant::Primary | ButtonVariant::Destructive => neutral_1().boxed_local(),
            ButtonVariant::Secondary
            | ButtonVariant::Outline
            | ButtonVariant::Ghost
            | ButtonVariant::Link => primary_7().boxed_local(),
        };

        let border_color_signal = match variant {
            ButtonVariant::Outline | ButtonVariant::Secondary => neutral_5().boxed_local(),
            _ => always(transparent()).boxed_local(),
        };

        let shadows_signal = map_ref! {
            let is_disabled = is_disabled_broadcast.signal(),
            let theme = theme() =>
            if *is_disabled {
                vec![]
            } else {
                match (variant, theme) {
                    (ButtonVariant::Primary, Theme::Light) => vec![
                        Shadow::new().y(2).x(0).blur(4).spread(-1).color(SHADOW_COLOR_PRIMARY_LIGHT),
                    ],
                    (ButtonVariant::Primary, Theme::Dark) => vec![
                        Shadow::new().y(2).x(0).blur(4).spread(-1).color(SHADOW_COLOR_PRIMARY_DARK),
                    ],
                    (ButtonVariant::Destructive, Theme::Light) => vec![
                        Shadow::new().y(2).x(0).blur(4).spread(-1).color(SHADOW_COLOR_ERROR_LIGHT),
                    ],
                    (ButtonVariant::Destructive, Theme::Dark) => vec![
                        Shadow::new().y(2).x(0).blur(4).spread(-1).color(SHADOW_COLOR_ERROR_DARK),
                    ],
                    (ButtonVariant::Secondary | ButtonVariant::Outline, Theme::Light) => vec![
                        Shadow::new().y(1).x(0).blur(2).spread(-1).color(SHADOW_COLOR_BLACK_LIGHT),
                    ],
                    (ButtonVariant::Secondary | ButtonVariant::Outline, Theme::Dark) => vec![
                        Shadow::new().y(1).x(0).blur(2).spread(-1).color(SHADOW_COLOR_BLACK_DARK),
                    ],
                    (ButtonVariant::Ghost | ButtonVariant::Link, _) => vec![],
                }
            }
        }
        .boxed_local();

        let on_press = self.on_press.take();
        let aria_label = self.aria_label.take();
        let button_content = self.button_content(icon_size);

        Button::new()
            .s(Padding::new().x(padding_x).y(padding_y))
            .s(RoundedCorners::all(CORNER_RADIUS_6))
            .s(Font::new().size(font_size).weight(FontWeight::Medium))
            .s(transition_colors())
            .s(Background::new().color_signal(
                map_ref! {
                    let is_disabled = is_disabled_broadcast.signal(),
                    let hovered = hovered_signal,
                    let bg_color = bg_color_signal,
                    let hover_bg_color = hover_bg_color_signal,
                    let disabled_bg = neutral_5() =>
                    if *is_disabled {
                        *disabled_bg
                    } else if *hovered {
                        *hover_bg_color
                    } else {
                        *bg_color
                    }
                }
                .boxed_local(),
            ))
            .s(Borders::all_signal(
                map_ref! {
                    let is_disabled = is_disabled_broadcast.signal(),
                    let border_color = border_color_signal,
                    let disabled_border = neutral_5() =>
                    // Constant 1px border so toggling disabled never resizes
                    if *is_disabled {
                        Border::new().width(BORDER_WIDTH_1).color(*disabled_border)
                    } else {
                        Border::new().width(BORDER_WIDTH_1).color(*border_color)
                    }
                }
                .boxed_local(),
            ))
            .s(Outline::with_signal_self(
                map_ref! {
                    let is_disabled = is_disabled_broadcast.signal(),
                    let focused = focused_signal =>
                    if !*is_disabled && *focused {
                        Some(Outline::inner().width(FOCUS_RING_WIDTH).color(FOCUS_RING_COLOR_DEFAULT))
                    } else {
                        None
                    }
                }
                .boxed_local(),
            ))
            .s(Font::new().color_signal(
                map_ref! {
                    let is_disabled = is_disabled_broadcast.signal(),
                    let text_color = text_color_signal,
                    let disabled_text = neutral_7() =>
                    if *is_disabled { *disabled_text } else { *text_color }
                }
                .boxed_local(),
            ))
            .s(Cursor::with_signal(is_disabled_broadcast.signal().map(
                |is_disabled| {
                    if is_disabled {
                        CursorIcon::NotAllowed
                    } else {
                        CursorIcon::Pointer
                    }
                },
            )))
            .s(Shadows::with_signal(shadows_signal))
            .update_raw_el(move |raw_el| {
                let raw_el = if variant == ButtonVariant::Link {
                    raw_el.style("text-decoration", "underline")
                } else {
                    raw_el
                };
                match aria_label {
                    Some(label) => raw_el.attr("aria-label", &label),
                    None => raw_el,
                }
            })
            .update_raw_el({
                let is_disabled_broadcast = is_disabled_broadcast.clone();
                move |raw_el| {
                    raw_el.style_signal(
                        "opacity",
                        is_disabled_broadcast.signal().map(|is_disabled| {
                            if is_disabled {
                                OPACITY_DISABLED
                            } else {
                                OPACITY_ENABLED
                            }
                        }),
                    )
                }
            })
            .on_hovered_change(clone!((is_disabled_mutable, hovered) move |is_hovered| {
                if !is_disabled_mutable.get() {
                    hovered.set_neq(is_hovered);
                }
            }))
            .on_focused_change(clone!((is_disabled_mutable, focused) move |is_focused| {
                if !is_disabled_mutable.get() {
                    focused.set_neq(is_focused);
                }
            }))
            .label(button_content)
            .on_press(clone!((is_disabled_mutable) move || {
                if !is_disabled_mutable.get() {
                    if let Some(handler) = &on_press {
                        handler();
                    }
                }
            }))
    }

    fn button_content(mut self, icon_size: IconSize) -> RawElOrText {
        let left_icon = self.left_icon.take();
        let right_icon = self.right_icon.take();
        let label_signal = self.label_signal.take();
        let label = self.label.take();

        let label_element = if let Some(signal) = label_signal {
            Some(
                El::new()
                    .s(Font::new().no_wrap())
                    .child_signal(signal.map(Text::new))
                    .unify(),
            )
        } else {
            label.map(|label| {
                El::new()
                    .s(Font::new().no_wrap())
                    .child(Text::new(label))
                    .unify()
            })
        };

        let mut content = Row::new()
            .s(Align::new().center_y())
            .s(Gap::new().x(SPACING_8));
        if let Some(name) = left_icon {
            content = content.item(icon(name).size(icon_size).color(IconColor::Current).build());
        }
        if let Some(label_element) = label_element {
            content = content.item(label_element);
        }
        if let Some(name) = right_icon {
            content = content.item(icon(name).size(icon_size).color(IconColor::Current).build());
        }
        content.unify()
    }
}

impl Default for ButtonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn button() -> ButtonBuilder {
    ButtonBuilder::new()
}
