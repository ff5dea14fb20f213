//! # Fourier Graphics wire format
//!
//! Every entity is written as a flat run of fixed-width scalars, with variable-length containers
//! prefixed by a 64-bit element count:
//!
//! | Entity    | Layout                                                             |
//! |-----------|--------------------------------------------------------------------|
//! | Point     | `f32 x, f32 y`                                                     |
//! | Color     | `f32 r, f32 g, f32 b[, f32 a]`                                     |
//! | Glyph     | `mode tag[, bool curve], u64 count, count × Point`                 |
//! | Shape     | `Color, f32 line thickness, f32 point size, Glyph`                 |
//! | Graphic   | `u64 count, count × Shape`                                         |
//! | Frame     | `i32 delay, Graphic`                                               |
//! | Animation | `u8 cycle/flags, u64 count, count × Frame`                         |
//! | Component | `Animation, Point, f32, f32, Point, f32, f32, Point, f32`          |
//! | Painting  | `u64 count, count × Component`                                     |
//!
//! The bracketed fields, byte order and tag widths depend on the [`Layout`]. Files in the current
//! revision start with a [`header`] naming their kind and version; older files have no header
//! at all and must be read with the right [`LegacyRevision`].

pub mod codec;
pub mod common;
pub mod error;
pub mod file;
pub mod header;

pub use codec::{Decode, Document, Encode};
pub use common::{WireReader, WireWriter};
pub use error::{DecodeError, EncodeError, LoadError, SaveError};
pub use file::{
    load, load_art, load_from_path, load_into, save, save_art, save_to_path,
};

/// Format version, stored in file headers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable, Debug)]
#[repr(C)]
pub struct Version(pub u8, pub u8, pub u8);
impl Version {
    pub const CURRENT: Self = Self(1, 0, 0);
    /// The wire layout used by files of this version. `None` if this reader predates it.
    #[must_use]
    pub const fn layout(self) -> Option<Layout> {
        match self {
            // Minor and patch revisions never change the layout.
            Self(1, _, _) => Some(Layout::CURRENT),
            _ => None,
        }
    }
}
impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ByteOrder {
    Little,
    /// Whatever the host uses. Files written this way only read back on hosts that agree.
    Native,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ColorChannels {
    /// Alpha isn't stored, and reads as opaque.
    Rgb,
    Rgba,
}
impl ColorChannels {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Width of the draw mode tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TagWidth {
    U8,
    /// A full `GLenum`, as written by the first editors.
    U32,
}

/// Everything that varies between revisions of the wire format.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Layout {
    pub byte_order: ByteOrder,
    pub color: ColorChannels,
    /// Glyphs carry a curve flag after their mode tag.
    pub curve_flag: bool,
    pub mode_tag: TagWidth,
    /// The animation cycle byte is a flags byte that also records the delay unit.
    /// Without it, the byte is a plain bool and delays are milliseconds.
    pub animation_flags: bool,
}
impl Layout {
    pub const CURRENT: Self = Self {
        byte_order: ByteOrder::Little,
        color: ColorChannels::Rgba,
        curve_flag: true,
        mode_tag: TagWidth::U8,
        animation_flags: true,
    };
    #[must_use]
    pub const fn legacy(revision: LegacyRevision) -> Self {
        let (color, curve_flag) = match revision {
            LegacyRevision::Rgb => (ColorChannels::Rgb, false),
            LegacyRevision::Rgba => (ColorChannels::Rgba, false),
            LegacyRevision::Bezier => (ColorChannels::Rgba, true),
        };
        Self {
            byte_order: ByteOrder::Native,
            color,
            curve_flag,
            mode_tag: TagWidth::U32,
            animation_flags: false,
        }
    }
    /// Size of an encoded color.
    #[must_use]
    pub const fn color_len(self) -> usize {
        self.color.count() * std::mem::size_of::<f32>()
    }
    /// Size of a glyph's fields before its points.
    #[must_use]
    pub const fn glyph_header_len(self) -> usize {
        let tag = match self.mode_tag {
            TagWidth::U8 => 1,
            TagWidth::U32 => 4,
        };
        tag + self.curve_flag as usize + std::mem::size_of::<u64>()
    }
}
impl Default for Layout {
    fn default() -> Self {
        Self::CURRENT
    }
}

/// The headerless layouts written by earlier editors, oldest first.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LegacyRevision {
    /// Three channel colors, no curve flag.
    Rgb,
    /// Four channel colors, no curve flag.
    Rgba,
    /// Four channel colors and curve flag.
    Bezier,
}

/// How a whole file is framed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Format {
    /// Header followed by a [`Layout::CURRENT`] body.
    #[default]
    Current,
    /// No header, body in a legacy layout.
    Legacy(LegacyRevision),
}
impl Format {
    #[must_use]
    pub const fn layout(self) -> Layout {
        match self {
            Self::Current => Layout::CURRENT,
            Self::Legacy(revision) => Layout::legacy(revision),
        }
    }
}

/// Encode a whole document, header included, into a new buffer.
/// # Errors
/// See [`EncodeError`].
pub fn to_bytes<T: Document>(value: &T, format: Format) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::new();
    codec::write_document(value, format, &mut bytes)?;
    Ok(bytes)
}

/// Decode a whole document from a buffer. The buffer must hold exactly one document.
/// # Errors
/// See [`DecodeError`].
pub fn from_bytes<T: Document>(bytes: &[u8], format: Format) -> Result<T, DecodeError> {
    codec::read_document(bytes, format)
}

/// How many bytes `value` occupies in `layout`, without a header.
/// # Errors
/// `value` can't be represented in `layout`.
pub fn encoded_len<T: Encode>(value: &T, layout: Layout) -> Result<u64, EncodeError> {
    let mut writer = WireWriter::new(std::io::sink(), layout);
    value.encode(&mut writer)?;
    Ok(writer.position())
}
