//! # Glimmer core
//!
//! The Fourier Graphics data model and its binary codecs. Glyphs, shapes, graphics, animations and
//! paintings nest strictly by ownership, and each level has a matching encoder and decoder in [`io`].

pub mod art;
pub mod color;
pub mod io;
pub mod point;

pub use art::{
    animation::{Animation, DelayUnit, Frame},
    glyph::{DrawMode, Glyph},
    graphic::Graphic,
    painting::{Component, Painting},
    shape::Shape,
    Art, ArtKind, ConvertError, EditError,
};
pub use color::Color;
pub use point::Point;
