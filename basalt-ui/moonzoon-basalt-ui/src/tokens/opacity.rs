// Opacity Token System
// String values because they feed raw style properties.

pub const OPACITY_ENABLED: &str = "1";
pub const OPACITY_DISABLED: &str = "0.5";
pub const OPACITY_HIDDEN: &str = "0";
