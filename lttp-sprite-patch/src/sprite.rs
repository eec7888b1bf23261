use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

use crate::layout::{GRAPHICS_SIZE, PALETTE_SIZE, SPRITE_SHEET_MIN_SIZE};

/// A sprite sheet split into its graphics and palette parts.
///
/// Both parts always have their exact sizes, [`GRAPHICS_SIZE`] and [`PALETTE_SIZE`].
#[derive(Clone, Copy)]
pub struct SpriteSheet<'a> {
    graphics: &'a [u8],
    palette: &'a [u8],
}

impl<'a> SpriteSheet<'a> {
    pub fn new(graphics: &'a [u8], palette: &'a [u8]) -> Result<Self, SpriteError> {
        if graphics.len() != GRAPHICS_SIZE {
            return Err(SpriteError::BadGraphicsSize {
                size: graphics.len(),
                expected: GRAPHICS_SIZE,
            });
        }
        if palette.len() != PALETTE_SIZE {
            return Err(SpriteError::BadPaletteSize {
                size: palette.len(),
                expected: PALETTE_SIZE,
            });
        }
        Ok(Self { graphics, palette })
    }

    /// Splits the contents of a sprite sheet file.
    ///
    /// Bytes past the palette, such as the padding written by extraction, are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is shorter than [`SPRITE_SHEET_MIN_SIZE`].
    pub fn split(data: &'a [u8]) -> Result<Self, SpriteError> {
        if data.len() < SPRITE_SHEET_MIN_SIZE {
            return Err(SpriteError::UndersizedSheet {
                size: data.len(),
                required: SPRITE_SHEET_MIN_SIZE,
            });
        }
        let (graphics, rest) = data.split_at(GRAPHICS_SIZE);
        Self::new(graphics, &rest[..PALETTE_SIZE])
    }

    pub fn graphics(self) -> &'a [u8] {
        self.graphics
    }

    pub fn palette(self) -> &'a [u8] {
        self.palette
    }
}

impl<'a> Debug for SpriteSheet<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SpriteSheet(_)")
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum SpriteError {
    #[error("sprite sheet too small: {size} bytes, need at least {required}")]
    UndersizedSheet { size: usize, required: usize },

    #[error("sprite graphics must be {expected} bytes, got {size}")]
    BadGraphicsSize { size: usize, expected: usize },

    #[error("sprite palette must be {expected} bytes, got {size}")]
    BadPaletteSize { size: usize, expected: usize },
}

#[cfg(test)]
mod tests {
    use super::{SpriteError, SpriteSheet};
    use crate::layout::{EXTRACTED_SPRITE_SIZE, GRAPHICS_SIZE, PALETTE_SIZE};

    fn sheet_bytes(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn split_takes_graphics_then_palette() {
        let data = sheet_bytes(GRAPHICS_SIZE + PALETTE_SIZE);
        let sheet = SpriteSheet::split(&data).unwrap();
        assert_eq!(sheet.graphics(), &data[..GRAPHICS_SIZE]);
        assert_eq!(sheet.palette(), &data[GRAPHICS_SIZE..]);
    }

    #[test]
    fn split_ignores_padding() {
        let mut data = sheet_bytes(EXTRACTED_SPRITE_SIZE);
        data[EXTRACTED_SPRITE_SIZE - 1] = 0x55;
        let sheet = SpriteSheet::split(&data).unwrap();
        assert_eq!(sheet.palette().len(), PALETTE_SIZE);
        assert_eq!(sheet.palette(), &data[GRAPHICS_SIZE..GRAPHICS_SIZE + PALETTE_SIZE]);
    }

    #[test]
    fn split_rejects_short_sheet() {
        let data = sheet_bytes(GRAPHICS_SIZE + PALETTE_SIZE - 1);
        assert_eq!(
            SpriteSheet::split(&data).unwrap_err(),
            SpriteError::UndersizedSheet {
                size: 28761,
                required: 28762,
            },
        );
    }

    #[test]
    fn new_checks_part_sizes() {
        let graphics = vec![0; GRAPHICS_SIZE];
        let palette = vec![0; PALETTE_SIZE];
        assert!(SpriteSheet::new(&graphics, &palette).is_ok());
        assert_eq!(
            SpriteSheet::new(&graphics[1..], &palette).unwrap_err(),
            SpriteError::BadGraphicsSize {
                size: GRAPHICS_SIZE - 1,
                expected: GRAPHICS_SIZE,
            },
        );
        assert_eq!(
            SpriteSheet::new(&graphics, &graphics[..PALETTE_SIZE + 1]).unwrap_err(),
            SpriteError::BadPaletteSize {
                size: PALETTE_SIZE + 1,
                expected: PALETTE_SIZE,
            },
        );
    }
}
