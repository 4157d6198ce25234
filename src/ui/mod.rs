//! Frame composition helpers layered on top of the core snapshot.

pub mod hud;
pub mod menu;
