//! # File header
//!
//! Current-revision files open with twelve bytes:
//!
//! | Bytes | Field                                    |
//! |-------|------------------------------------------|
//! | 0..4  | Magic, `b"FGR "`                         |
//! | 4..8  | Kind [`Tag`], eg. `b"anim"`              |
//! | 8..11 | [`Version`] major, minor, patch          |
//! | 11    | Flags, reserved and must be zero         |
//!
//! The body that follows is in the layout the version names.

use std::io::{Read, Write};

use super::{
    common::{WireReader, WireWriter},
    error::{DecodeError, EncodeError},
    Layout, Version,
};
use crate::art::ArtKind;

/// Four byte identifier, stored verbatim.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Tag(pub [u8; 4]);
impl Tag {
    pub const MAGIC: Self = Self(*b"FGR ");
    pub const GLYP: Self = Self(*b"glyp");
    pub const SHAP: Self = Self(*b"shap");
    pub const GRPH: Self = Self(*b"grph");
    pub const ANIM: Self = Self(*b"anim");
    pub const PNTG: Self = Self(*b"pntg");
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
    /// The tag naming `kind` in a header. `None` for kinds with no file body.
    #[must_use]
    pub const fn for_kind(kind: ArtKind) -> Option<Self> {
        match kind {
            ArtKind::Glyph => Some(Self::GLYP),
            ArtKind::Shape => Some(Self::SHAP),
            ArtKind::Graphic => Some(Self::GRPH),
            ArtKind::Animation => Some(Self::ANIM),
            ArtKind::Painting => Some(Self::PNTG),
            ArtKind::Spritesheet => None,
        }
    }
    #[must_use]
    pub fn kind(self) -> Option<ArtKind> {
        match self {
            Self::GLYP => Some(ArtKind::Glyph),
            Self::SHAP => Some(ArtKind::Shape),
            Self::GRPH => Some(ArtKind::Graphic),
            Self::ANIM => Some(ArtKind::Animation),
            Self::PNTG => Some(ArtKind::Painting),
            _ => None,
        }
    }
}
impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Write as a string if possible, otherwise as hex.
        if let Some(str) = self.as_str() {
            write!(f, "{str:?}")
        } else {
            write!(f, "{:x?}", self.0)
        }
    }
}

#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
struct RawHeader {
    magic: Tag,
    kind: Tag,
    version: Version,
    flags: u8,
}

const RAW_LEN: usize = std::mem::size_of::<RawHeader>();

/// A validated file header.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Header {
    pub kind: ArtKind,
    pub version: Version,
}
impl Header {
    pub const LEN: usize = RAW_LEN;
    #[must_use]
    pub const fn new(kind: ArtKind) -> Self {
        Self {
            kind,
            version: Version::CURRENT,
        }
    }
    /// The layout of the body following this header.
    #[must_use]
    pub fn layout(&self) -> Layout {
        // Validated on read, and `new` only makes current headers.
        self.version.layout().unwrap_or(Layout::CURRENT)
    }
    /// Read and validate a header.
    /// # Errors
    /// Truncated, unrecognized or from a newer version.
    pub fn read<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        let bytes = reader.read_bytes::<RAW_LEN>()?;
        let raw: RawHeader = bytemuck::pod_read_unaligned(&bytes);
        if raw.magic != Tag::MAGIC {
            return Err(DecodeError::BadMagic(raw.magic));
        }
        if raw.version.layout().is_none() {
            return Err(DecodeError::UnsupportedVersion(raw.version));
        }
        if raw.flags != 0 {
            return Err(DecodeError::ReservedFlags(raw.flags));
        }
        let kind = raw.kind.kind().ok_or(DecodeError::UnknownKind(raw.kind))?;
        Ok(Self {
            kind,
            version: raw.version,
        })
    }
    /// # Errors
    /// The kind has no tag, or the writer failed.
    pub fn write<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        let kind = Tag::for_kind(self.kind)
            .ok_or(EncodeError::Unrepresentable("art kind has no file format"))?;
        let raw = RawHeader {
            magic: Tag::MAGIC,
            kind,
            version: self.version,
            flags: 0,
        };
        writer.write_bytes(bytemuck::bytes_of(&raw))
    }
}

#[cfg(test)]
mod test {
    use super::{Header, Tag};
    use crate::{
        art::ArtKind,
        io::{DecodeError, Layout, Version, WireReader, WireWriter},
    };

    fn read(bytes: &[u8]) -> Result<Header, DecodeError> {
        Header::read(&mut WireReader::new(bytes, Layout::CURRENT))
    }
    #[test]
    fn layout() {
        assert_eq!(Header::LEN, 12);
        let mut writer = WireWriter::new(Vec::new(), Layout::CURRENT);
        Header::new(ArtKind::Animation).write(&mut writer).unwrap();
        assert_eq!(writer.into_inner(), b"FGR anim\x01\x00\x00\x00");
    }
    #[test]
    fn validation() {
        assert_eq!(
            read(b"FGR shap\x01\x04\x02\x00").unwrap(),
            Header {
                kind: ArtKind::Shape,
                version: Version(1, 4, 2),
            }
        );
        assert!(matches!(
            read(b"RIFF shap\x01\x00\x00"),
            Err(DecodeError::BadMagic(Tag(magic))) if &magic == b"RIFF"
        ));
        assert!(matches!(
            read(b"FGR shap\x02\x00\x00\x00"),
            Err(DecodeError::UnsupportedVersion(Version(2, 0, 0)))
        ));
        assert!(matches!(
            read(b"FGR shap\x01\x00\x00\x80"),
            Err(DecodeError::ReservedFlags(0x80))
        ));
        assert!(matches!(
            read(b"FGR sprt\x01\x00\x00\x00"),
            Err(DecodeError::UnknownKind(_))
        ));
        assert!(matches!(
            read(b"FGR sh"),
            Err(DecodeError::Truncated { offset: 0 })
        ));
    }
    #[test]
    fn spritesheets_have_no_header() {
        let mut writer = WireWriter::new(Vec::new(), Layout::CURRENT);
        assert!(Header::new(ArtKind::Spritesheet).write(&mut writer).is_err());
        assert_eq!(writer.position(), 0);
    }
}
