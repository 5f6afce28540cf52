//! Collapsible section list with persisted open state.
//!
//! The open flag survives reloads under the `sidebar:state` storage key.
//! A missing or unreadable stored value falls back to open.

use moonzoon_basalt_ui::*;
use zoon::*;

pub const SIDEBAR_STORAGE_KEY: &str = "sidebar:state";

static SIDEBAR_OPEN: Lazy<Mutable<bool>> = Lazy::new(|| Mutable::new(true));

/// Read the persisted open state. Call once at startup.
pub fn init_sidebar() {
    if let Some(Ok(open)) = local_storage().get(SIDEBAR_STORAGE_KEY) {
        SIDEBAR_OPEN.set_neq(open);
    }
}

pub fn sidebar_open() -> impl Signal<Item = bool> {
    SIDEBAR_OPEN.signal()
}

pub fn toggle_sidebar() {
    let open = !SIDEBAR_OPEN.get();
    SIDEBAR_OPEN.set(open);
    if let Err(error) = local_storage().insert(SIDEBAR_STORAGE_KEY, &open) {
        zoon::println!("Failed to persist sidebar state: {:?}", error);
    }
}

pub fn sidebar() -> impl Element {
    El::new().child_signal(sidebar_open().map(|open| {
        open.then(|| {
            Column::new()
                .s(Width::exact(220))
                .s(Padding::all(SPACING_16))
                .s(Gap::new().y(SPACING_8))
                .s(Background::new().color_signal(neutral_2()))
                .s(Borders::new().right_signal(
                    neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
                ))
                .item(section_link("Components", "#components"))
                .item(section_link("Tokens", "#tokens"))
                .item(section_link("Typography", "#typography"))
                .item(section_link("Charts", "#charts"))
        })
    }))
}

fn section_link(label: &str, to: &str) -> impl Element + use<> {
    Link::new()
        .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_10()))
        .s(Padding::new().y(SPACING_4))
        .label(label.to_owned())
        .to(to.to_owned())
}
