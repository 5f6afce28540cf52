// Corner Radius Token System
// sm/base/md/lg from the Basalt tailwind preset (rem values in px).

pub const CORNER_RADIUS_4: u32 = 4;
pub const CORNER_RADIUS_6: u32 = 6; // sm
pub const CORNER_RADIUS_8: u32 = 8; // base
pub const CORNER_RADIUS_12: u32 = 12; // md
pub const CORNER_RADIUS_16: u32 = 16; // lg
pub const CORNER_RADIUS_MAX: u32 = 9999; // pills and avatars
