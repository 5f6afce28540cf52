//! Site header: brand, desktop navigation, theme toggle, menu button.

use crate::mobile_menu::{MobileMenu, menu_button};
use crate::sidebar;
use crate::theme_toggle::theme_toggle_button;
use moonzoon_basalt_ui::*;
use zoon::*;

pub fn header(menu: &MobileMenu) -> impl Element + use<> {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_12))
        .s(Gap::new().x(SPACING_16))
        .s(Align::new().center_y())
        .s(Background::new().color_signal(neutral_1()))
        .s(Borders::new().bottom_signal(
            neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .item(sidebar_toggle())
        .item(brand())
        .item(El::new().s(Width::fill()))
        .item(desktop_nav())
        .item(theme_toggle_button())
        .item(menu_button(menu))
}

fn brand() -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_8))
        .s(Align::new().center_y())
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_20)
                    .weight(FontWeight::Bold)
                    .color_signal(primary_7()))
                .child(Text::new("Basalt")),
        )
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_20).color_signal(neutral_11()))
                .child(Text::new("UI")),
        )
}

fn desktop_nav() -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_16))
        .item(nav_link("Components", "#components"))
        .item(nav_link("Tokens", "#tokens"))
        .item(nav_link("Typography", "#typography"))
        .item(nav_link("Charts", "#charts"))
}

fn nav_link(label: &str, to: &str) -> impl Element + use<> {
    Link::new()
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::Medium)
            .color_signal(neutral_10()))
        .label(label.to_owned())
        .to(to.to_owned())
}

fn sidebar_toggle() -> impl Element {
    El::new().child_signal(sidebar::sidebar_open().map(|open| {
        button()
            .left_icon(IconName::ChevronRight)
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Small)
            .aria_label(if open {
                "Collapse section list"
            } else {
                "Expand section list"
            })
            .on_press(|| sidebar::toggle_sidebar())
            .build()
            .into_element()
    }))
}
