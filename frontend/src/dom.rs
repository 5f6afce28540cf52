//! DOM effect layer for the mobile menu.
//!
//! The menu state machine emits `MenuEffect` values; this module applies
//! them to the real document. Outside a browsing context (host-side
//! tests) every effect is a no-op.

use crate::mobile_menu::{MenuEffect, WrapDirection};

/// Element id of the sliding navigation panel.
pub const MOBILE_MENU_PANEL_ID: &str = "mobile-menu";

#[cfg(target_arch = "wasm32")]
const FOCUSABLE_SELECTOR: &str =
    "button, a[href], input, select, textarea, [tabindex]:not([tabindex='-1'])";

pub fn apply_menu_effect(effect: MenuEffect) {
    #[cfg(target_arch = "wasm32")]
    match effect {
        MenuEffect::LockScroll => lock_body_scroll(),
        MenuEffect::UnlockScroll => unlock_body_scroll(),
        MenuEffect::FocusFirstDescendant => focus_first_descendant(),
        MenuEffect::WrapFocus(direction) => {
            wrap_focus(direction);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = effect;
}

/// Unconditionally release the body scroll lock.
///
/// Called when the panel is removed from the DOM, so a menu that
/// unmounts while open cannot leave the page unscrollable.
pub fn release_scroll_lock() {
    #[cfg(target_arch = "wasm32")]
    unlock_body_scroll();
}

/// Whether the active element sits on the panel boundary for `direction`,
/// so the default tab move must be suppressed and a focus wrap requested.
#[cfg(target_arch = "wasm32")]
pub fn focus_is_at_boundary(direction: WrapDirection) -> bool {
    boundary_wrap_target(direction).is_some()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn focus_is_at_boundary(_direction: WrapDirection) -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
fn boundary_wrap_target(direction: WrapDirection) -> Option<usize> {
    let focusables = focusable_descendants();
    let active_index = active_descendant_index(&focusables);
    crate::mobile_menu::wrap_target(active_index, focusables.len(), direction)
}

// Focusables are re-queried here instead of reusing the boundary check's
// list; the wrap arrives through the actor, and the panel may have
// changed in between.
#[cfg(target_arch = "wasm32")]
fn wrap_focus(direction: WrapDirection) {
    let focusables = focusable_descendants();
    let active_index = active_descendant_index(&focusables);
    if let Some(target) =
        crate::mobile_menu::wrap_target(active_index, focusables.len(), direction)
    {
        let _ = focusables[target].focus();
    }
}

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

#[cfg(target_arch = "wasm32")]
fn lock_body_scroll() {
    if let Some(body) = document().and_then(|document| document.body()) {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

#[cfg(target_arch = "wasm32")]
fn unlock_body_scroll() {
    if let Some(body) = document().and_then(|document| document.body()) {
        let _ = body.style().remove_property("overflow");
    }
}

/// Focusable elements inside the panel, in document order.
#[cfg(target_arch = "wasm32")]
fn focusable_descendants() -> Vec<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let Some(panel) = document().and_then(|document| {
        document.get_element_by_id(MOBILE_MENU_PANEL_ID)
    }) else {
        return Vec::new();
    };
    let Ok(nodes) = panel.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };

    let mut focusables = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(node) = nodes.get(index) {
            if let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() {
                focusables.push(element);
            }
        }
    }
    focusables
}

#[cfg(target_arch = "wasm32")]
fn active_descendant_index(focusables: &[web_sys::HtmlElement]) -> Option<usize> {
    let active = document()?.active_element()?;
    focusables
        .iter()
        .position(|element| element.is_same_node(Some(active.as_ref())))
}

#[cfg(target_arch = "wasm32")]
fn focus_first_descendant() {
    if let Some(first) = focusable_descendants().first() {
        let _ = first.focus();
    }
}
