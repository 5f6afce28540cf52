// Basalt UI Component Library
// Design tokens and type-safe component builders for MoonZoon applications

pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;
