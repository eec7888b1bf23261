//! Fixed locations of the sprite data, in ROM and in a sprite sheet file.

use lttp_sprite_rom::RomAddr;
use std::ops::Range;

/// A fixed-size span of ROM.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Region {
    pub addr: RomAddr,
    pub size: u32,
}

impl Region {
    pub const fn new(addr: RomAddr, size: u32) -> Self {
        Self { addr, size }
    }

    pub fn end(self) -> RomAddr {
        self.addr + self.size
    }

    pub fn range(self) -> Range<RomAddr> {
        self.addr..self.end()
    }
}

/// Player sprite tiles.
pub const SPRITE_GRAPHICS: Region = Region::new(RomAddr(0x80000), 0x7000);

/// Player sprite palette.
pub const SPRITE_PALETTE: Region = Region::new(RomAddr(0xdd308), 0x5a);

/// Instruction bytes overwritten to enable the dummied-out frame advance routine.
pub const FRAME_ADVANCE_ADDRS: [RomAddr; 2] = [RomAddr(0x39), RomAddr(0x3a)];

/// 65816 NOP.
pub const NOP: u8 = 0xea;

pub const GRAPHICS_SIZE: usize = SPRITE_GRAPHICS.size as usize;
pub const PALETTE_SIZE: usize = SPRITE_PALETTE.size as usize;

/// Zero bytes appended after the palette in extracted sprite sheets.
pub const PADDING_SIZE: usize = 6;

/// Smallest sprite sheet that holds both graphics and palette.
pub const SPRITE_SHEET_MIN_SIZE: usize = GRAPHICS_SIZE + PALETTE_SIZE;

/// Size of a sprite sheet produced by extraction.
pub const EXTRACTED_SPRITE_SIZE: usize = SPRITE_SHEET_MIN_SIZE + PADDING_SIZE;

/// Smallest ROM that holds every region touched by a patch.
pub const MIN_ROM_SIZE: usize = (SPRITE_PALETTE.addr.0 + SPRITE_PALETTE.size) as usize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(GRAPHICS_SIZE, 28672);
        assert_eq!(PALETTE_SIZE, 90);
        assert_eq!(SPRITE_SHEET_MIN_SIZE, 28762);
        assert_eq!(EXTRACTED_SPRITE_SIZE, 28768);
        assert_eq!(MIN_ROM_SIZE, 0xdd362);
    }

    #[test]
    fn regions_do_not_overlap() {
        assert_eq!(SPRITE_GRAPHICS.end(), RomAddr(0x87000));
        assert!(SPRITE_GRAPHICS.end() <= SPRITE_PALETTE.addr);
        for addr in FRAME_ADVANCE_ADDRS.iter().copied() {
            assert!(addr < SPRITE_GRAPHICS.addr);
        }
    }

    #[test]
    fn palette_region_is_last() {
        assert_eq!(SPRITE_PALETTE.range(), RomAddr(0xdd308)..RomAddr(0xdd362));
        assert_eq!(SPRITE_PALETTE.end().index(), MIN_ROM_SIZE);
    }
}
