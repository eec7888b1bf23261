use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Names the patched ROM `<sprite>_<rom>`, dropping a `.spr` extension from the sprite name.
///
/// Returns `None` if either path has no file name.
pub fn patched_rom_name(sprite: &Path, rom: &Path) -> Option<PathBuf> {
    let sprite_name = match sprite.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("spr") => sprite.file_stem()?,
        _ => sprite.file_name()?,
    };
    let rom_name = rom.file_name()?;

    let mut name = OsString::from(sprite_name);
    name.push("_");
    name.push(rom_name);
    Some(PathBuf::from(name))
}
