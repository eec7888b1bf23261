use std::fmt::{self, Debug, Formatter};
use std::ops::{Add, Range, Sub};

use crate::RomError;

/// An address in ROM.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RomAddr(pub u32);

impl RomAddr {
    pub fn checked_add(self, offset: usize) -> Result<RomAddr, RomError> {
        u32::try_from(offset)
            .ok()
            .and_then(|offset| self.0.checked_add(offset))
            .map(RomAddr)
            .ok_or(RomError::RomAddrOverflow { addr: self, offset })
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Converts a range of addresses into a range of buffer indices.
    pub(crate) fn index_range(range: &Range<RomAddr>) -> Range<usize> {
        range.start.index()..range.end.index()
    }
}

impl Debug for RomAddr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "RomAddr(0x{:08x})", self.0)
    }
}

impl Add<u32> for RomAddr {
    type Output = RomAddr;

    fn add(self, rhs: u32) -> RomAddr {
        RomAddr(self.0 + rhs)
    }
}

impl Sub<RomAddr> for RomAddr {
    type Output = u32;

    fn sub(self, rhs: RomAddr) -> u32 {
        self.0 - rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::RomAddr;
    use crate::RomError;

    #[test]
    fn arithmetic() {
        let addr = RomAddr(0x80000) + 0x7000;
        assert_eq!(addr, RomAddr(0x87000));
        assert_eq!(addr - RomAddr(0x80000), 0x7000);
    }

    #[test]
    fn checked_add_reports_overflow() {
        assert_eq!(RomAddr(0x39).checked_add(1), Ok(RomAddr(0x3a)));
        assert_eq!(RomAddr(u32::MAX - 1).checked_add(1), Ok(RomAddr(u32::MAX)));
        assert_eq!(
            RomAddr(u32::MAX).checked_add(1),
            Err(RomError::RomAddrOverflow {
                addr: RomAddr(u32::MAX),
                offset: 1,
            }),
        );
        assert!(RomAddr(0).checked_add(usize::MAX).is_err());
    }

    #[test]
    fn debug_is_hex() {
        assert_eq!(format!("{:?}", RomAddr(0xdd308)), "RomAddr(0x000dd308)");
    }
}
