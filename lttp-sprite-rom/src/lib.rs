//! Views over a whole ROM image, addressed by [`RomAddr`].
//!
//! Every access goes through a range check and reports a [`RomError`] instead of panicking, so
//! callers can surface an undersized ROM or an overflowing address as an ordinary error.

mod addr;
mod borrowed;
mod borrowed_mut;
mod error;
mod owned;

pub use addr::RomAddr;
pub use borrowed::Rom;
pub use borrowed_mut::RomMut;
pub use error::RomError;
pub use owned::OwnedRom;
