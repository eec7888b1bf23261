use std::fmt::{self, Debug, Formatter};
use std::ops::Range;

use crate::{RomAddr, RomError};

/// A slice representing all of ROM.
#[derive(Clone, Copy)]
pub struct Rom<'a>(pub &'a [u8]);

impl<'a> Rom<'a> {
    pub fn slice_from(self, from: RomAddr) -> Result<&'a [u8], RomError> {
        self.0
            .get(from.index()..)
            .ok_or_else(|| RomError::out_of_range(Some(from), None, self.0.len()))
    }

    pub fn slice_to(self, to: RomAddr) -> Result<&'a [u8], RomError> {
        self.0
            .get(..to.index())
            .ok_or_else(|| RomError::out_of_range(None, Some(to), self.0.len()))
    }

    pub fn slice(self, range: Range<RomAddr>) -> Result<&'a [u8], RomError> {
        self.0
            .get(RomAddr::index_range(&range))
            .ok_or_else(|| {
                RomError::out_of_range(Some(range.start), Some(range.end), self.0.len())
            })
    }

    pub fn read_byte(self, addr: RomAddr) -> Result<u8, RomError> {
        Ok(self.slice(addr..addr.checked_add(1)?)?[0])
    }
}

impl<'a> Debug for Rom<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Rom(0x{:x} bytes)", self.0.len())
    }
}
