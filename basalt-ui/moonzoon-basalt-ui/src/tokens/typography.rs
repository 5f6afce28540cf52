// Typography Token System
// Semantic scale ported from the Basalt tailwind preset (caption..display).

// Font Sizes (px)
pub const FONT_SIZE_12: u32 = 12; // caption
pub const FONT_SIZE_14: u32 = 14; // small
pub const FONT_SIZE_16: u32 = 16; // body / h6
pub const FONT_SIZE_18: u32 = 18; // h5
pub const FONT_SIZE_20: u32 = 20; // h4
pub const FONT_SIZE_24: u32 = 24; // h3
pub const FONT_SIZE_32: u32 = 32; // h2
pub const FONT_SIZE_40: u32 = 40; // h1
pub const FONT_SIZE_48: u32 = 48; // hero
pub const FONT_SIZE_64: u32 = 64; // display

// Font Families
pub const FONT_FAMILY_HEADING: &str = "Inter, system-ui, sans-serif";
pub const FONT_FAMILY_BODY: &str = "Inter, system-ui, sans-serif";
pub const FONT_FAMILY_MONO: &str = "'JetBrains Mono', ui-monospace, monospace";

// Letter Spacing
pub const TRACKING_TIGHT: &str = "-0.02em";
pub const TRACKING_NORMAL: &str = "0";
pub const TRACKING_WIDE: &str = "0.04em";

// Line Heights (unitless, multiplied by font size in CSS)
pub const LINE_HEIGHT_TIGHT: &str = "1.2";
pub const LINE_HEIGHT_SNUG: &str = "1.4";
pub const LINE_HEIGHT_NORMAL: &str = "1.5";
