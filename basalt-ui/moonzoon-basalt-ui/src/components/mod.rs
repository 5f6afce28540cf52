// Component Library for Basalt UI
// Builder-pattern primitives styled exclusively from the token system.

pub mod badge;
pub mod button;
pub mod card;
pub mod icon;
pub mod input;
pub mod typography;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use icon::*;
pub use input::*;
pub use typography::*;
