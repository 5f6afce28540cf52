//! Application assembly: connection, domains, and the root layout.

use crate::connection::{ConnectionAdapter, create_connection_message_handler};
use crate::mobile_menu::{MobileMenu, menu_panel};
use crate::{header, showcase, sidebar};
use moonzoon_basalt_ui::*;
use shared::{AnalyticsEvent, UpMsg};
use std::sync::Arc;
use zoon::*;

pub struct BasaltApp {
    pub mobile_menu: MobileMenu,
    pub connection: Arc<ConnectionAdapter>,
}

impl BasaltApp {
    pub fn new() -> Self {
        sidebar::init_sidebar();

        let connection = Arc::new(create_connection_message_handler());
        let app = Self {
            mobile_menu: MobileMenu::new(),
            connection,
        };
        app.track_pageview();
        app
    }

    /// Record one pageview per full page load.
    fn track_pageview(&self) {
        let connection = self.connection.clone();
        Task::start(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let url = window.location().href().unwrap_or_default();
            let referrer = window
                .document()
                .map(|document| document.referrer())
                .filter(|referrer| !referrer.is_empty());

            connection
                .send_up_msg(UpMsg::TrackEvent(AnalyticsEvent::pageview(url, referrer)))
                .await;
        });
    }

    pub fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Background::new().color_signal(neutral_1()))
            .s(Font::new()
                .family([FontFamily::new(FONT_FAMILY_BODY)])
                .color_signal(neutral_12()))
            .item(header::header(&self.mobile_menu))
            .item(menu_panel(&self.mobile_menu))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .item(sidebar::sidebar())
                    .item(
                        El::new()
                            .s(Width::fill())
                            .s(Height::fill())
                            .s(Scrollbars::both())
                            .child(showcase::showcase()),
                    ),
            )
    }
}
