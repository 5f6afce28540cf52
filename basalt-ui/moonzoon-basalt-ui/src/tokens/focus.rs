// Focus Token System
// Focus ring styling shared by every interactive component.

pub const FOCUS_RING_WIDTH: u32 = 2;
pub const FOCUS_RING_COLOR_DEFAULT: &str = "oklch(54% 0.17 245 / 0.8)";
pub const FOCUS_RING_COLOR_ERROR: &str = "oklch(55% 0.17 30 / 0.8)";
