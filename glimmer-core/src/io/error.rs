use std::path::PathBuf;

use super::{header::Tag, Version};
use crate::art::ArtKind;

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("not a Fourier Graphics file (magic {0})")]
    BadMagic(Tag),
    #[error("unknown art kind {0}")]
    UnknownKind(Tag),
    #[error("headerless data needs its art kind named")]
    MissingKind,
    #[error("{0} art is not supported")]
    Unsupported(ArtKind),
    #[error("version {0} is newer than this reader")]
    UnsupportedVersion(Version),
    #[error("reserved header flags set: {0:#04x}")]
    ReservedFlags(u8),
    #[error("expected {expected} art, file holds {found}")]
    WrongKind { expected: ArtKind, found: ArtKind },
    /// The stream ended before a complete entity was read.
    #[error("unexpected end of data at byte {offset}")]
    Truncated { offset: u64 },
    #[error("unknown draw mode tag {0}")]
    UnknownDrawMode(u32),
    #[error("invalid bool byte {0:#04x}")]
    InvalidFlag(u8),
    #[error("unknown animation flags {0:#04x}")]
    UnknownAnimationFlags(u8),
    #[error("element count {0} too large for this platform")]
    CountOverflow(u64),
    #[error("{len} bytes of trailing data at byte {offset}")]
    TrailingData { offset: u64, len: u64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("element count {0} too large to store")]
    CountOverflow(usize),
    /// The value uses a feature the target layout has no room for.
    #[error("can't be written in this layout: {0}")]
    Unrepresentable(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("couldn't open {}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("couldn't read {}", .path.display())]
    Decode { path: PathBuf, source: DecodeError },
    #[error("can't tell what kind of art {} holds", .0.display())]
    UnknownExtension(PathBuf),
    #[error("{0} art is not supported")]
    Unsupported(ArtKind),
}

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("couldn't create {}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("couldn't encode for {}", .path.display())]
    Encode { path: PathBuf, source: EncodeError },
    #[error("couldn't write {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
