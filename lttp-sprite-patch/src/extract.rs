use lttp_sprite_rom::{Rom, RomError};
use tracing::debug;

use crate::layout::{EXTRACTED_SPRITE_SIZE, SPRITE_GRAPHICS, SPRITE_PALETTE};

/// Copies the sprite graphics and palette out of `rom` into a new sprite sheet.
///
/// The result is always [`EXTRACTED_SPRITE_SIZE`] bytes: graphics, palette, then zero padding.
pub fn extract_sprite(rom: Rom<'_>) -> Result<Vec<u8>, RomError> {
    let graphics = rom.slice(SPRITE_GRAPHICS.range())?;
    let palette = rom.slice(SPRITE_PALETTE.range())?;
    debug!(
        "Read sprite graphics at {:?} and palette at {:?}.",
        SPRITE_GRAPHICS.addr, SPRITE_PALETTE.addr,
    );

    let mut sheet = Vec::with_capacity(EXTRACTED_SPRITE_SIZE);
    sheet.extend_from_slice(graphics);
    sheet.extend_from_slice(palette);
    sheet.resize(EXTRACTED_SPRITE_SIZE, 0x00);
    Ok(sheet)
}
