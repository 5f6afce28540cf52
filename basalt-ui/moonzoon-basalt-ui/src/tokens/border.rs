// Border Token System

// Border Widths
pub const BORDER_WIDTH_0: u32 = 0; // No border
pub const BORDER_WIDTH_1: u32 = 1; // Default border
pub const BORDER_WIDTH_2: u32 = 2; // Emphasized border
pub const BORDER_WIDTH_4: u32 = 4; // Strong border/divider

// Border Styles
pub const BORDER_STYLE_SOLID: &str = "solid";
pub const BORDER_STYLE_DASHED: &str = "dashed";
pub const BORDER_STYLE_DOTTED: &str = "dotted";
