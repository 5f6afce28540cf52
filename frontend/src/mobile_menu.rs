//! Mobile navigation menu domain.
//!
//! The open/closed lifecycle is a pure state machine; side effects
//! (scroll lock, focus moves) come out as `MenuEffect` values that the
//! DOM layer applies. UI components talk to the menu through relays.

use crate::dataflow::{Actor, Relay, relay};
use crate::dom;
use futures::{StreamExt, select};
use moonzoon_basalt_ui::*;
use zoon::events::{Click, KeyDown};
use zoon::*;

/// Whether the navigation panel is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

/// Direction of a Tab-key focus wrap at the panel boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapDirection {
    /// Tab from the last focusable element.
    Forward,
    /// Shift+Tab from the first focusable element.
    Backward,
}

/// Input to the menu state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleRequested,
    CloseRequested,
    FocusWrapRequested(WrapDirection),
}

/// Side effect the DOM layer must apply after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEffect {
    LockScroll,
    UnlockScroll,
    FocusFirstDescendant,
    WrapFocus(WrapDirection),
}

/// Pure transition function for the menu state machine.
///
/// Closing an already-closed menu and wrapping focus while closed are
/// both no-ops that produce no effects.
pub fn transition(state: MenuState, event: MenuEvent) -> (MenuState, Vec<MenuEffect>) {
    use MenuEffect::*;
    use MenuEvent::*;
    use MenuState::*;

    match (state, event) {
        (Closed, ToggleRequested) => (Open, vec![LockScroll, FocusFirstDescendant]),
        (Open, ToggleRequested) => (Closed, vec![UnlockScroll]),
        (Open, CloseRequested) => (Closed, vec![UnlockScroll]),
        (Closed, CloseRequested) => (Closed, vec![]),
        (Open, FocusWrapRequested(direction)) => (Open, vec![WrapFocus(direction)]),
        (Closed, FocusWrapRequested(_)) => (Closed, vec![]),
    }
}

/// Where focus should move when Tab is pressed inside the panel.
///
/// `active_index` is the position of the currently focused element among
/// the panel's focusable descendants, or `None` if focus is elsewhere.
/// Returns `Some(target)` only when focus must wrap at a boundary;
/// `None` means the browser's default tab order is correct.
pub fn wrap_target(
    active_index: Option<usize>,
    focusable_count: usize,
    direction: WrapDirection,
) -> Option<usize> {
    if focusable_count == 0 {
        return None;
    }
    match (direction, active_index?) {
        (WrapDirection::Forward, index) if index == focusable_count - 1 => Some(0),
        (WrapDirection::Backward, 0) => Some(focusable_count - 1),
        _ => None,
    }
}

/// Cloneable handle to the mobile menu Actor and its relays.
#[derive(Clone)]
pub struct MobileMenu {
    open: Actor<bool>,
    pub toggle_button_clicked_relay: Relay,
    pub escape_pressed_relay: Relay,
    pub nav_link_activated_relay: Relay,
    pub focus_wrap_requested_relay: Relay<WrapDirection>,
}

impl MobileMenu {
    pub fn new() -> Self {
        let (toggle_button_clicked_relay, mut toggle_button_clicked_stream) = relay();
        let (escape_pressed_relay, mut escape_pressed_stream) = relay();
        let (nav_link_activated_relay, mut nav_link_activated_stream) = relay();
        let (focus_wrap_requested_relay, mut focus_wrap_requested_stream) = relay();

        let open = Actor::new(false, async move |state| {
            let mut menu_state = MenuState::Closed;
            loop {
                let event = select! {
                    event = toggle_button_clicked_stream.next() => {
                        event.map(|()| MenuEvent::ToggleRequested)
                    }
                    event = escape_pressed_stream.next() => {
                        event.map(|()| MenuEvent::CloseRequested)
                    }
                    event = nav_link_activated_stream.next() => {
                        event.map(|()| MenuEvent::CloseRequested)
                    }
                    event = focus_wrap_requested_stream.next() => {
                        event.map(MenuEvent::FocusWrapRequested)
                    }
                    complete => break,
                };
                let Some(event) = event else { break };

                let (next_state, effects) = transition(menu_state, event);
                menu_state = next_state;
                state.set_neq(menu_state == MenuState::Open);
                for effect in effects {
                    dom::apply_menu_effect(effect);
                }
            }
        });

        Self {
            open,
            toggle_button_clicked_relay,
            escape_pressed_relay,
            nav_link_activated_relay,
            focus_wrap_requested_relay,
        }
    }

    pub fn open_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.open.signal()
    }

    /// Synchronous read for key handlers that must decide `preventDefault`.
    pub fn is_open(&self) -> bool {
        self.open.get_cloned()
    }
}

/// Hamburger toggle button shown in the header.
pub fn menu_button(menu: &MobileMenu) -> impl Element + use<> {
    let menu = menu.clone();
    El::new()
        .update_raw_el({
            let open_signal = menu.open_signal();
            move |raw_el| {
                raw_el.attr_signal(
                    "aria-expanded",
                    open_signal.map(|open| if open { "true" } else { "false" }),
                )
            }
        })
        .child_signal(menu.open_signal().map(move |open| {
            button()
                .left_icon(if open { IconName::Close } else { IconName::Menu })
                .variant(ButtonVariant::Outline)
                .size(ButtonSize::Medium)
                .aria_label(if open {
                    "Close navigation menu"
                } else {
                    "Open navigation menu"
                })
                .on_press({
                    let relay = menu.toggle_button_clicked_relay.clone();
                    move || relay.send(())
                })
                .build()
                .into_element()
        }))
}

/// Sliding navigation panel.
///
/// The panel stays mounted; visibility is animated through `max-height`
/// and `opacity` so the open and close transitions both play.
pub fn menu_panel(menu: &MobileMenu) -> impl Element + use<> {
    let menu = menu.clone();
    Column::new()
        .s(Width::fill())
        .s(Background::new().color_signal(neutral_1()))
        .s(transition_panel())
        .update_raw_el({
            let menu = menu.clone();
            move |raw_el| {
                raw_el
                    .attr("id", dom::MOBILE_MENU_PANEL_ID)
                    .attr("role", "dialog")
                    .attr("aria-label", "Site navigation")
                    .style("overflow", "hidden")
                    .style_signal(
                        "max-height",
                        menu.open_signal()
                            .map(|open| if open { "500px" } else { "0px" }),
                    )
                    .style_signal(
                        "opacity",
                        menu.open_signal().map(|open| {
                            if open {
                                OPACITY_ENABLED
                            } else {
                                OPACITY_HIDDEN
                            }
                        }),
                    )
                    .global_event_handler({
                        let menu = menu.clone();
                        move |event: KeyDown| {
                            handle_panel_key(&menu, &event);
                        }
                    })
                    // An unmounted panel must not leave the page unscrollable.
                    .after_remove(|_| dom::release_scroll_lock())
            }
        })
        .item(
            Column::new()
                .s(Padding::new().x(SPACING_24).y(SPACING_16))
                .s(Gap::new().y(SPACING_12))
                .item(menu_nav_link(&menu, "Components", "#components"))
                .item(menu_nav_link(&menu, "Tokens", "#tokens"))
                .item(menu_nav_link(&menu, "Typography", "#typography"))
                .item(menu_nav_link(&menu, "Charts", "#charts"))
                .item(crate::theme_toggle::theme_toggle_button()),
        )
}

fn handle_panel_key(menu: &MobileMenu, event: &KeyDown) {
    match event.key().as_str() {
        "Escape" => menu.escape_pressed_relay.send(()),
        "Tab" if menu.is_open() => {
            let direction = if event.shift_key() {
                WrapDirection::Backward
            } else {
                WrapDirection::Forward
            };
            // preventDefault must be decided before the browser moves
            // focus; the wrap itself is the actor's WrapFocus effect.
            if dom::focus_is_at_boundary(direction) {
                event.prevent_default();
                menu.focus_wrap_requested_relay.send(direction);
            }
        }
        _ => {}
    }
}

fn menu_nav_link(menu: &MobileMenu, label: &str, to: &str) -> impl Element + use<> {
    let relay = menu.nav_link_activated_relay.clone();
    Link::new()
        .s(Font::new()
            .size(FONT_SIZE_18)
            .weight(FontWeight::Medium)
            .color_signal(neutral_11()))
        .s(Padding::new().y(SPACING_8))
        .label(label.to_owned())
        .to(to.to_owned())
        .update_raw_el(move |raw_el| {
            raw_el.event_handler(move |_: Click| {
                relay.send(());
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use MenuEffect::*;
    use MenuEvent::*;
    use MenuState::*;

    #[test]
    fn toggle_opens_closed_menu_with_scroll_lock_and_focus() {
        let (state, effects) = transition(Closed, ToggleRequested);
        assert_eq!(state, Open);
        assert_eq!(effects, vec![LockScroll, FocusFirstDescendant]);
    }

    #[test]
    fn toggle_closes_open_menu_and_releases_scroll() {
        let (state, effects) = transition(Open, ToggleRequested);
        assert_eq!(state, Closed);
        assert_eq!(effects, vec![UnlockScroll]);
    }

    #[test]
    fn close_while_closed_is_a_silent_no_op() {
        let (state, effects) = transition(Closed, CloseRequested);
        assert_eq!(state, Closed);
        assert!(effects.is_empty());
    }

    #[test]
    fn escape_and_nav_link_both_close_the_open_menu() {
        let (state, effects) = transition(Open, CloseRequested);
        assert_eq!(state, Closed);
        assert_eq!(effects, vec![UnlockScroll]);
    }

    #[test]
    fn focus_wrap_only_applies_while_open() {
        let (state, effects) = transition(Open, FocusWrapRequested(WrapDirection::Forward));
        assert_eq!(state, Open);
        assert_eq!(effects, vec![WrapFocus(WrapDirection::Forward)]);

        let (state, effects) = transition(Closed, FocusWrapRequested(WrapDirection::Forward));
        assert_eq!(state, Closed);
        assert!(effects.is_empty());
    }

    #[test]
    fn tab_from_last_element_wraps_to_first() {
        assert_eq!(wrap_target(Some(4), 5, WrapDirection::Forward), Some(0));
    }

    #[test]
    fn shift_tab_from_first_element_wraps_to_last() {
        assert_eq!(wrap_target(Some(0), 5, WrapDirection::Backward), Some(4));
    }

    #[test]
    fn interior_elements_keep_default_tab_order() {
        assert_eq!(wrap_target(Some(2), 5, WrapDirection::Forward), None);
        assert_eq!(wrap_target(Some(2), 5, WrapDirection::Backward), None);
    }

    #[test]
    fn wrap_is_inert_without_focusable_elements() {
        assert_eq!(wrap_target(Some(0), 0, WrapDirection::Forward), None);
        assert_eq!(wrap_target(None, 5, WrapDirection::Forward), None);
    }

    #[test]
    fn single_focusable_element_wraps_to_itself() {
        assert_eq!(wrap_target(Some(0), 1, WrapDirection::Forward), Some(0));
        assert_eq!(wrap_target(Some(0), 1, WrapDirection::Backward), Some(0));
    }

    #[tokio::test]
    async fn escape_while_closed_emits_no_state_change() {
        let menu = MobileMenu::new();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        menu.escape_pressed_relay.send(());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert!(!menu.is_open());
    }

    #[tokio::test]
    async fn focus_wrap_flows_through_the_actor_without_closing() {
        let menu = MobileMenu::new();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        menu.toggle_button_clicked_relay.send(());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(menu.is_open());

        for direction in [WrapDirection::Forward, WrapDirection::Backward] {
            menu.focus_wrap_requested_relay.send(direction);
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(menu.is_open());
    }

    #[tokio::test]
    async fn toggle_then_escape_round_trips_open_state() {
        let menu = MobileMenu::new();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        menu.toggle_button_clicked_relay.send(());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(menu.is_open());

        menu.escape_pressed_relay.send(());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(!menu.is_open());
    }
}
