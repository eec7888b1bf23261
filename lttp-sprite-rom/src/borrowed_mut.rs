use std::fmt::{self, Debug, Formatter};
use std::ops::Range;

use crate::{Rom, RomAddr, RomError};

/// A mutable slice representing all of ROM.
pub struct RomMut<'a>(pub &'a mut [u8]);

impl<'a> RomMut<'a> {
    /// Shortens the borrow so the view can be passed on and used again afterwards.
    pub fn reborrow(&mut self) -> RomMut<'_> {
        RomMut(&mut *self.0)
    }

    pub fn as_rom(&self) -> Rom<'_> {
        Rom(&*self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn slice_mut(&mut self, range: Range<RomAddr>) -> Result<&mut [u8], RomError> {
        let rom_size = self.0.len();
        self.0
            .get_mut(RomAddr::index_range(&range))
            .ok_or_else(|| RomError::out_of_range(Some(range.start), Some(range.end), rom_size))
    }

    pub fn write_byte(&mut self, addr: RomAddr, value: u8) -> Result<(), RomError> {
        let end = addr.checked_add(1)?;
        self.slice_mut(addr..end)?[0] = value;
        Ok(())
    }

    /// Copies `values` into ROM starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns an error without writing anything if the span does not fit in ROM.
    pub fn write_bytes(&mut self, addr: RomAddr, values: &[u8]) -> Result<(), RomError> {
        let end = addr.checked_add(values.len())?;
        self.slice_mut(addr..end)?.copy_from_slice(values);
        Ok(())
    }
}

impl<'a> Debug for RomMut<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "RomMut(0x{:x} bytes)", self.0.len())
    }
}
