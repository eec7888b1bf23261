use thiserror::Error;

use crate::RomAddr;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum RomError {
    #[error("ROM access out of range: {from:?}..{to:?}, ROM size {rom_size:08x}")]
    OutOfRange {
        from: Option<RomAddr>,
        to: Option<RomAddr>,
        rom_size: usize,
    },

    #[error("ROM address overflow: {addr:?} + {offset:08x}")]
    RomAddrOverflow { addr: RomAddr, offset: usize },
}

impl RomError {
    pub(crate) fn out_of_range(
        from: Option<RomAddr>,
        to: Option<RomAddr>,
        rom_size: usize,
    ) -> Self {
        RomError::OutOfRange {
            from,
            to,
            rom_size,
        }
    }
}
