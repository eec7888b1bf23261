//! Splices a player sprite sheet into an "A Link to the Past" ROM and pulls it back out.
//!
//! A sprite sheet is 0x7000 bytes of graphics followed by 0x5a bytes of palette. Patching copies
//! the two parts into their fixed ROM regions (see [`layout`]); extraction copies them back out
//! and appends zero padding.

mod extract;
pub mod layout;
mod patch;
mod sprite;

pub use extract::extract_sprite;
pub use patch::{apply_patch, PatchError, PatchOptions};
pub use sprite::{SpriteError, SpriteSheet};
