use crate::{Rom, RomMut};

/// A buffer holding all of ROM, loaded wholesale from storage.
///
/// Function parameters should generally prefer the borrowed [`Rom`] or [`RomMut`].
pub struct OwnedRom {
    data: Vec<u8>,
}

impl OwnedRom {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn borrow(&self) -> Rom<'_> {
        Rom(&self.data)
    }

    pub fn borrow_mut(&mut self) -> RomMut<'_> {
        RomMut(&mut self.data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::OwnedRom;
    use crate::RomAddr;

    #[test]
    fn views_share_the_buffer() {
        let mut rom = OwnedRom::new(vec![0; 4]);
        assert_eq!(rom.len(), 4);
        assert!(!rom.is_empty());

        rom.borrow_mut().write_byte(RomAddr(3), 0xea).unwrap();
        assert_eq!(rom.borrow().read_byte(RomAddr(3)).unwrap(), 0xea);
        assert_eq!(rom.into_inner(), vec![0, 0, 0, 0xea]);
    }

    #[test]
    fn empty_rom() {
        let rom = OwnedRom::new(vec![]);
        assert!(rom.is_empty());
        assert!(rom.borrow().read_byte(RomAddr(0)).is_err());
    }
}
