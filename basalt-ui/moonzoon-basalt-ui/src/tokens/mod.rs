// Design Token System for Basalt UI
// Color tokens are reactive signals over the effective theme; everything
// else is plain constants and style helpers.

pub mod animation;
pub mod border;
pub mod color;
pub mod corner_radius;
pub mod focus;
pub mod opacity;
pub mod shadow;
pub mod spacing;
pub mod theme;
pub mod typography;

pub use animation::*;
pub use border::*;
pub use color::*;
pub use corner_radius::*;
pub use focus::*;
pub use opacity::*;
pub use shadow::*;
pub use spacing::*;
pub use theme::*;
pub use typography::*;
