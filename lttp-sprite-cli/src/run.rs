use anyhow::{Context, Result};
use lttp_sprite_patch::{apply_patch, extract_sprite, PatchOptions, SpriteSheet};
use lttp_sprite_rom::OwnedRom;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::args::Invocation;

pub fn execute(invocation: &Invocation) -> Result<()> {
    match invocation {
        Invocation::Patch {
            sprite,
            rom,
            output,
            options,
        } => patch(sprite, rom, output, *options),
        Invocation::Extract { rom, sprite } => extract(rom, sprite),
    }
}

fn patch(
    sprite_path: &Path,
    rom_path: &Path,
    output_path: &Path,
    options: PatchOptions,
) -> Result<()> {
    info!("Patching ROM.");

    let sheet = read(sprite_path, "sprite sheet")?;
    let mut rom = OwnedRom::new(read(rom_path, "ROM")?);
    debug!("Loaded 0x{:x} byte ROM.", rom.len());
    let sprite = SpriteSheet::split(&sheet)
        .with_context(|| format!("invalid sprite sheet {}", sprite_path.display()))?;

    apply_patch(rom.borrow_mut(), sprite, options)
        .with_context(|| format!("failed to patch {}", rom_path.display()))?;

    debug!("Writing {}.", output_path.display());
    fs::write(output_path, rom.into_inner())
        .with_context(|| format!("failed to write patched ROM {}", output_path.display()))?;

    info!("Done.");
    Ok(())
}

fn extract(rom_path: &Path, sprite_path: &Path) -> Result<()> {
    info!("Extracting sprite.");

    let rom = OwnedRom::new(read(rom_path, "ROM")?);
    debug!("Loaded 0x{:x} byte ROM.", rom.len());
    let sheet = extract_sprite(rom.borrow())
        .with_context(|| format!("failed to extract sprite from {}", rom_path.display()))?;

    debug!("Writing {}.", sprite_path.display());
    fs::write(sprite_path, sheet)
        .with_context(|| format!("failed to write sprite sheet {}", sprite_path.display()))?;

    info!("Done.");
    Ok(())
}

fn read(path: &Path, what: &str) -> Result<Vec<u8>> {
    debug!("Reading {} from {}.", what, path.display());
    fs::read(path).with_context(|| format!("failed to read {} {}", what, path.display()))
}
