//! Basalt UI showcase entry point.

use std::sync::OnceLock;
use zoon::*;

/// Stores the main application task handle to prevent it from being dropped.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

thread_local! {
    /// Keeps the app (and its server connection) alive for the page lifetime.
    static APP: std::cell::RefCell<Option<app::BasaltApp>> = const { std::cell::RefCell::new(None) };
}

mod app;
mod connection;
mod dataflow;
mod dom;
mod header;
mod mobile_menu;
mod showcase;
mod sidebar;
mod theme_toggle;

pub fn main() {
    // Theme must hydrate before the first render so the stored
    // preference paints immediately.
    moonzoon_basalt_ui::init_theme();

    let main_task = Task::start_droppable(async {
        let app = app::BasaltApp::new();
        let root_element = app.root();
        APP.with(|slot| slot.borrow_mut().replace(app));
        start_app("main", move || root_element);
    });

    if MAIN_TASK.set(main_task).is_err() {
        zoon::println!("Main task already initialized");
    }
}
