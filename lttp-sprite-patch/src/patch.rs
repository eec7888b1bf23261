use lttp_sprite_rom::{RomError, RomMut};
use thiserror::Error;
use tracing::debug;

use crate::layout::{FRAME_ADVANCE_ADDRS, MIN_ROM_SIZE, NOP, SPRITE_GRAPHICS, SPRITE_PALETTE};
use crate::SpriteSheet;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PatchOptions {
    /// NOP out the two instruction bytes guarding the frame advance routine.
    pub frame_advance: bool,
}

/// Writes `sprite` into its ROM regions, in place.
///
/// With [`PatchOptions::frame_advance`] set, also enables frame advance: one controller button
/// freezes the game, a second steps a single frame, and the first resumes. There is no way to
/// undo this; patch a clean ROM instead.
///
/// No other bytes of `rom` are touched.
///
/// # Errors
///
/// Returns an error if `rom` is shorter than [`MIN_ROM_SIZE`]. The ROM is left unmodified.
pub fn apply_patch(
    mut rom: RomMut<'_>,
    sprite: SpriteSheet<'_>,
    options: PatchOptions,
) -> Result<(), PatchError> {
    if rom.len() < MIN_ROM_SIZE {
        return Err(PatchError::UndersizedRom {
            rom_size: rom.len(),
            required: MIN_ROM_SIZE,
        });
    }

    debug!("Writing sprite graphics at {:?}.", SPRITE_GRAPHICS.addr);
    rom.write_bytes(SPRITE_GRAPHICS.addr, sprite.graphics())?;
    debug!("Writing sprite palette at {:?}.", SPRITE_PALETTE.addr);
    rom.write_bytes(SPRITE_PALETTE.addr, sprite.palette())?;

    if options.frame_advance {
        debug!("Enabling frame advance.");
        for addr in FRAME_ADVANCE_ADDRS.iter().copied() {
            rom.write_byte(addr, NOP)?;
        }
    }

    Ok(())
}

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("ROM too small to patch: 0x{rom_size:x} bytes, need at least 0x{required:x}")]
    UndersizedRom { rom_size: usize, required: usize },

    #[error("{0}")]
    RomError(#[from] RomError),
}
