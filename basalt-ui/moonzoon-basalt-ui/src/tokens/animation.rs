// Animation Token System
// Durations and transition helpers built on MoonZoon's Transitions styles.

use zoon::*;

// Animation Durations (ms)
pub const DURATION_FAST: u32 = 150;
pub const DURATION_NORMAL: u32 = 300;
pub const DURATION_SLOW: u32 = 500;

// Overlay panels (mobile menu) animate height over DURATION_NORMAL and
// opacity slightly faster.
pub const DURATION_PANEL_HEIGHT: u32 = DURATION_NORMAL;
pub const DURATION_PANEL_OPACITY: u32 = 200;

pub fn transition_fast() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_FAST)])
}

pub fn transition_normal() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_NORMAL)])
}

pub fn transition_slow() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_SLOW)])
}

pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_NORMAL),
        Transition::property("border-color").duration(DURATION_NORMAL),
        Transition::property("color").duration(DURATION_NORMAL),
    ])
}

pub fn transition_opacity() -> impl Style<'static> {
    Transitions::new([Transition::property("opacity").duration(DURATION_PANEL_OPACITY)])
}

pub fn transition_panel() -> impl Style<'static> {
    Transitions::new([
        Transition::property("max-height").duration(DURATION_PANEL_HEIGHT),
        Transition::property("opacity").duration(DURATION_PANEL_OPACITY),
    ])
}
