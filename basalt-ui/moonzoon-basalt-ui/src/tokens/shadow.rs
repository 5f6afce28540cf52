// Shadow Token System

// Shadow Sizes
pub const SHADOW_SIZE_1: &str = "0 1px 2px"; // Subtle elevation
pub const SHADOW_SIZE_2: &str = "0 2px 8px"; // Medium elevation
pub const SHADOW_SIZE_3: &str = "0 4px 16px"; // High elevation

// Tinted shadow colors per theme intensity
pub const SHADOW_COLOR_PRIMARY_LIGHT: &str = "oklch(54% 0.17 245 / 0.25)";
pub const SHADOW_COLOR_PRIMARY_DARK: &str = "oklch(54% 0.17 245 / 0.4)";
pub const SHADOW_COLOR_NEUTRAL_LIGHT: &str = "oklch(68% 0.04 250 / 0.15)";
pub const SHADOW_COLOR_ERROR_LIGHT: &str = "oklch(55% 0.17 30 / 0.25)";
pub const SHADOW_COLOR_ERROR_DARK: &str = "oklch(55% 0.17 30 / 0.4)";

// Black shadows for plain elevation
pub const SHADOW_COLOR_BLACK_SUBTLE: &str = "rgba(0, 0, 0, 0.04)";
pub const SHADOW_COLOR_BLACK_LIGHT: &str = "rgba(0, 0, 0, 0.08)";
pub const SHADOW_COLOR_BLACK_MEDIUM: &str = "rgba(0, 0, 0, 0.15)";
pub const SHADOW_COLOR_BLACK_DARK: &str = "rgba(0, 0, 0, 0.25)";
pub const SHADOW_COLOR_BLACK_STRONG: &str = "rgba(0, 0, 0, 0.4)";
