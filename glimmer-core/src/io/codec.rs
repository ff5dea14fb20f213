//! Encoders and decoders for every art entity.
//!
//! Containers delegate to their children in wire order, so a failure anywhere surfaces from the
//! outermost call with the offset it happened at. Decoding always builds fresh values; nothing
//! is decoded in place.

use std::io::{Read, Write};

use super::{
    common::{WireReader, WireWriter, PREALLOCATION_LIMIT},
    error::{DecodeError, EncodeError},
    header::Header,
    ColorChannels, Format, TagWidth,
};
use crate::{
    art::{Art, ArtKind},
    Animation, Color, Component, DelayUnit, DrawMode, Frame, Glyph, Graphic, Painting, Point,
    Shape,
};

pub trait Decode: Sized {
    /// Read one value in the reader's layout.
    /// # Errors
    /// The stream was short, malformed, or failed.
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError>;
}

pub trait Encode {
    /// Write this value in the writer's layout.
    /// # Errors
    /// The value can't be represented in the layout, or the stream failed.
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError>;
}

/// An entity that can stand alone as a whole file.
pub trait Document: Encode + Decode {
    const KIND: ArtKind;
}

bitflags::bitflags! {
    /// Stored in place of the cycle bool by layouts with animation flags.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    struct AnimationFlags : u8 {
        const CYCLE       = 0b0000_0001;
        /// Delays count display refreshes rather than milliseconds.
        const FRAME_TIMED = 0b0000_0010;
    }
}

fn decode_seq<T: Decode, R: Read>(reader: &mut WireReader<R>) -> Result<Vec<T>, DecodeError> {
    let count = reader.read_count()?;
    let mut items = Vec::with_capacity(count.min(PREALLOCATION_LIMIT));
    for _ in 0..count {
        items.push(T::decode(reader)?);
    }
    Ok(items)
}

fn encode_seq<T: Encode, W: Write>(
    items: &[T],
    writer: &mut WireWriter<W>,
) -> Result<(), EncodeError> {
    writer.write_count(items.len())?;
    items.iter().try_for_each(|item| item.encode(writer))
}

impl Decode for Point {
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        let x = reader.read_f32()?;
        let y = reader.read_f32()?;
        Ok(Self::new(x, y))
    }
}
impl Encode for Point {
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        writer.write_f32(self.x())?;
        writer.write_f32(self.y())
    }
}

impl Decode for Color {
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        let r = reader.read_f32()?;
        let g = reader.read_f32()?;
        let b = reader.read_f32()?;
        let a = match reader.layout().color {
            ColorChannels::Rgba => reader.read_f32()?,
            ColorChannels::Rgb => 1.0,
        };
        Ok(Self::new(r, g, b, a))
    }
}
impl Encode for Color {
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        let rgba = writer.layout().color == ColorChannels::Rgba;
        if !rgba && !self.is_opaque() {
            return Err(EncodeError::Unrepresentable(
                "translucent color without an alpha channel",
            ));
        }
        writer.write_f32(self.r)?;
        writer.write_f32(self.g)?;
        writer.write_f32(self.b)?;
        if rgba {
            writer.write_f32(self.a)?;
        }
        Ok(())
    }
}

impl Decode for DrawMode {
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        let tag = match reader.layout().mode_tag {
            TagWidth::U8 => u32::from(reader.read_u8()?),
            TagWidth::U32 => reader.read_u32()?,
        };
        Self::from_tag(tag).ok_or(DecodeError::UnknownDrawMode(tag))
    }
}
impl Encode for DrawMode {
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        match writer.layout().mode_tag {
            TagWidth::U8 => writer.write_u8(*self as u8),
            TagWidth::U32 => writer.write_u32(self.tag()),
        }
    }
}

impl Decode for Glyph {
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        let mode = DrawMode::decode(reader)?;
        let curve = if reader.layout().curve_flag {
            reader.read_bool()?
        } else {
            false
        };
        let points = decode_seq(reader)?;
        Ok(Self::with_points(mode, curve, points))
    }
}
impl Encode for Glyph {
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        let curve_flag = writer.layout().curve_flag;
        if !curve_flag && self.is_curve() {
            return Err(EncodeError::Unrepresentable("curve glyph without a curve flag"));
        }
        self.mode().encode(writer)?;
        if curve_flag {
            writer.write_bool(self.is_curve())?;
        }
        encode_seq(self.points(), writer)
    }
}

impl Decode for Shape {
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        let color = Color::decode(reader)?;
        let line_thickness = reader.read_f32()?;
        let point_size = reader.read_f32()?;
        let glyph = Glyph::decode(reader)?;
        Ok(Self::with_style(glyph, color, line_thickness, point_size))
    }
}
impl Encode for Shape {
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        self.color.encode(writer)?;
        writer.write_f32(self.line_thickness)?;
        writer.write_f32(self.point_size)?;
        self.glyph.encode(writer)
    }
}

impl Decode for Graphic {
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        decode_seq::<Shape, _>(reader).map(Self::from)
    }
}
impl Encode for Graphic {
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        encode_seq(self.shapes(), writer)
    }
}

impl Decode for Frame {
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        let delay = reader.read_i32()?;
        let graphic = Graphic::decode(reader)?;
        Ok(Self::new(delay, graphic))
    }
}
impl Encode for Frame {
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        writer.write_i32(self.delay)?;
        self.graphic.encode(writer)
    }
}

impl Decode for Animation {
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        let (cycle, delay_unit) = if reader.layout().animation_flags {
            let bits = reader.read_u8()?;
            let flags =
                AnimationFlags::from_bits(bits).ok_or(DecodeError::UnknownAnimationFlags(bits))?;
            let unit = if flags.contains(AnimationFlags::FRAME_TIMED) {
                DelayUnit::Frames
            } else {
                DelayUnit::Milliseconds
            };
            (flags.contains(AnimationFlags::CYCLE), unit)
        } else {
            (reader.read_bool()?, DelayUnit::Milliseconds)
        };
        let frames = decode_seq(reader)?;
        Ok(Self::with_frames(cycle, delay_unit, frames))
    }
}
impl Encode for Animation {
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        if writer.layout().animation_flags {
            let mut flags = AnimationFlags::empty();
            flags.set(AnimationFlags::CYCLE, self.cycle);
            flags.set(
                AnimationFlags::FRAME_TIMED,
                self.delay_unit == DelayUnit::Frames,
            );
            writer.write_u8(flags.bits())?;
        } else {
            if self.delay_unit != DelayUnit::Milliseconds {
                return Err(EncodeError::Unrepresentable(
                    "frame-counted delays without animation flags",
                ));
            }
            writer.write_bool(self.cycle)?;
        }
        encode_seq(self.frames(), writer)
    }
}

impl Decode for Component {
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        Ok(Self {
            animation: Animation::decode(reader)?,
            position: Point::decode(reader)?,
            rotation: reader.read_f32()?,
            scale: reader.read_f32()?,
            position_frequency: Point::decode(reader)?,
            rotation_frequency: reader.read_f32()?,
            scale_frequency: reader.read_f32()?,
            position_amplitude: Point::decode(reader)?,
            scale_amplitude: reader.read_f32()?,
        })
    }
}
impl Encode for Component {
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        self.animation.encode(writer)?;
        self.position.encode(writer)?;
        writer.write_f32(self.rotation)?;
        writer.write_f32(self.scale)?;
        self.position_frequency.encode(writer)?;
        writer.write_f32(self.rotation_frequency)?;
        writer.write_f32(self.scale_frequency)?;
        self.position_amplitude.encode(writer)?;
        writer.write_f32(self.scale_amplitude)
    }
}

impl Decode for Painting {
    fn decode<R: Read>(reader: &mut WireReader<R>) -> Result<Self, DecodeError> {
        decode_seq::<Component, _>(reader).map(Self::from)
    }
}
impl Encode for Painting {
    fn encode<W: Write>(&self, writer: &mut WireWriter<W>) -> Result<(), EncodeError> {
        encode_seq(self.components(), writer)
    }
}

impl Document for Glyph {
    const KIND: ArtKind = ArtKind::Glyph;
}
impl Document for Shape {
    const KIND: ArtKind = ArtKind::Shape;
}
impl Document for Graphic {
    const KIND: ArtKind = ArtKind::Graphic;
}
impl Document for Animation {
    const KIND: ArtKind = ArtKind::Animation;
}
impl Document for Painting {
    const KIND: ArtKind = ArtKind::Painting;
}

/// Write `value` as a whole document, returning the number of bytes written.
/// # Errors
/// See [`EncodeError`].
pub fn write_document<T: Document, W: Write>(
    value: &T,
    format: Format,
    writer: W,
) -> Result<u64, EncodeError> {
    let mut writer = WireWriter::new(writer, format.layout());
    if format == Format::Current {
        Header::new(T::KIND).write(&mut writer)?;
    }
    value.encode(&mut writer)?;
    writer.flush()?;
    Ok(writer.position())
}

/// Write any art as a whole document, returning the number of bytes written.
/// # Errors
/// See [`EncodeError`].
pub fn write_art<W: Write>(art: &Art, format: Format, writer: W) -> Result<u64, EncodeError> {
    match art {
        Art::Glyph(glyph) => write_document(glyph, format, writer),
        Art::Shape(shape) => write_document(shape, format, writer),
        Art::Graphic(graphic) => write_document(graphic, format, writer),
        Art::Animation(animation) => write_document(animation, format, writer),
        Art::Painting(painting) => write_document(painting, format, writer),
    }
}

/// Decode one value that must make up the rest of the stream.
fn read_body<T: Decode, R: Read>(reader: &mut WireReader<R>) -> Result<T, DecodeError> {
    let value = T::decode(reader)?;
    let offset = reader.position();
    match reader.drain()? {
        0 => Ok(value),
        len => Err(DecodeError::TrailingData { offset, len }),
    }
}

/// Read a whole document of a known kind.
/// # Errors
/// See [`DecodeError`].
pub fn read_document<T: Document, R: Read>(reader: R, format: Format) -> Result<T, DecodeError> {
    let mut reader = WireReader::new(reader, format.layout());
    if format == Format::Current {
        let header = Header::read(&mut reader)?;
        if header.kind != T::KIND {
            return Err(DecodeError::WrongKind {
                expected: T::KIND,
                found: header.kind,
            });
        }
        reader.set_layout(header.layout());
    }
    read_body(&mut reader)
}

/// Read a whole document of any kind. Current files name their own kind, headerless data
/// is read as `legacy_kind`.
/// # Errors
/// See [`DecodeError`]. [`DecodeError::MissingKind`] if headerless data has no `legacy_kind`.
pub fn read_art<R: Read>(
    reader: R,
    format: Format,
    legacy_kind: Option<ArtKind>,
) -> Result<Art, DecodeError> {
    let mut reader = WireReader::new(reader, format.layout());
    let kind = if format == Format::Current {
        let header = Header::read(&mut reader)?;
        reader.set_layout(header.layout());
        header.kind
    } else {
        legacy_kind.ok_or(DecodeError::MissingKind)?
    };
    Ok(match kind {
        ArtKind::Glyph => Art::Glyph(read_body(&mut reader)?),
        ArtKind::Shape => Art::Shape(read_body(&mut reader)?),
        ArtKind::Graphic => Art::Graphic(read_body(&mut reader)?),
        ArtKind::Animation => Art::Animation(read_body(&mut reader)?),
        ArtKind::Painting => Art::Painting(read_body(&mut reader)?),
        ArtKind::Spritesheet => return Err(DecodeError::Unsupported(kind)),
    })
}
