use clap::{Parser, ValueEnum};
use lttp_sprite_patch::PatchOptions;
use std::path::PathBuf;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::output::patched_rom_name;

/// Patch a Link sprite sheet into an A Link to the Past ROM, or extract one from a patched ROM.
#[derive(Debug, Parser)]
#[command(name = "lttp-sprite")]
#[command(version)]
pub struct Cli {
    /// Select level of logging for output.
    #[arg(
        long,
        value_enum,
        default_value_t = LogLevel::Info,
        num_args = 0..=1,
        default_missing_value = "info"
    )]
    pub loglevel: LogLevel,

    /// Path to a sprite sheet for Link. Needs to be in binary format and have a length of 0x7000
    /// (28672) (sprite) followed by 0x5a (90) (palette) bytes. Written to when reading.
    #[arg(long)]
    pub sprite: Option<PathBuf>,

    /// Path to a lttp ROM.
    #[arg(long)]
    pub rom: Option<PathBuf>,

    /// Read the sprite sheet out of the ROM.
    #[arg(long)]
    pub read: bool,

    /// Write the sprite sheet into a copy of the ROM.
    #[arg(long)]
    pub write: bool,

    /// Enable frame advance in the patched ROM. Only with --write.
    #[arg(long)]
    pub frame_advance: bool,

    /// Path for the patched ROM. Defaults to <sprite>_<rom> in the current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Info,
    Warning,
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

/// A checked request to patch or extract.
#[derive(Debug, Eq, PartialEq)]
pub enum Invocation {
    Patch {
        sprite: PathBuf,
        rom: PathBuf,
        output: PathBuf,
        options: PatchOptions,
    },
    Extract {
        rom: PathBuf,
        sprite: PathBuf,
    },
}

impl Cli {
    /// Checks that the arguments describe exactly one runnable operation.
    pub fn validate(&self) -> Result<Invocation, InvocationError> {
        let rom = self.rom.clone().ok_or(InvocationError::NoRom)?;
        let sprite = self.sprite.clone().ok_or(InvocationError::NoSprite)?;
        if !rom.is_file() {
            return Err(InvocationError::RomNotFound(rom));
        }

        match (self.read, self.write) {
            (true, false) => {
                if self.frame_advance {
                    return Err(InvocationError::FrameAdvanceWithRead);
                }
                if self.output.is_some() {
                    return Err(InvocationError::OutputWithRead);
                }
                Ok(Invocation::Extract { rom, sprite })
            }
            (false, true) => {
                if !sprite.is_file() {
                    return Err(InvocationError::SpriteNotFound(sprite));
                }
                let output = match &self.output {
                    Some(output) => output.clone(),
                    None => patched_rom_name(&sprite, &rom).ok_or_else(|| {
                        InvocationError::NoOutputName {
                            sprite: sprite.clone(),
                            rom: rom.clone(),
                        }
                    })?,
                };
                Ok(Invocation::Patch {
                    sprite,
                    rom,
                    output,
                    options: PatchOptions {
                        frame_advance: self.frame_advance,
                    },
                })
            }
            _ => Err(InvocationError::AmbiguousMode),
        }
    }
}

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("No rom specified.")]
    NoRom,

    #[error("No sprite specified.")]
    NoSprite,

    #[error("Could not find valid rom at path {}.", .0.display())]
    RomNotFound(PathBuf),

    #[error("Could not find link sprite sheet at path {}.", .0.display())]
    SpriteNotFound(PathBuf),

    #[error("Exactly one of --read or --write must be given.")]
    AmbiguousMode,

    #[error("--frame-advance can only be used with --write.")]
    FrameAdvanceWithRead,

    #[error("--output can only be used with --write; --read writes to the --sprite path.")]
    OutputWithRead,

    #[error(
        "Could not derive an output name from {} and {}; pass --output.",
        .sprite.display(),
        .rom.display()
    )]
    NoOutputName { sprite: PathBuf, rom: PathBuf },
}
