//! # Art
//!
//! The Fourier Graphics entities. Ownership is strictly nested: a painting owns components, which
//! own an animation, which owns frames, each owning a graphic of shapes, each owning a glyph of
//! points. Nothing is shared.

pub mod animation;
pub mod glyph;
pub mod graphic;
pub mod painting;
pub mod shape;

use animation::{Animation, Frame};
use glyph::Glyph;
use graphic::Graphic;
use painting::{Component, Painting};
use shape::Shape;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditError {
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// The kinds of file an editor can open.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ArtKind {
    Glyph,
    Shape,
    Graphic,
    Animation,
    Painting,
    /// Recognized by extension, but there is no spritesheet format yet.
    Spritesheet,
}
impl ArtKind {
    /// File extension used by the editor, without the dot.
    #[must_use]
    pub const fn extension(self) -> Option<&'static str> {
        match self {
            Self::Glyph => Some("fgl"),
            Self::Shape => Some("fsh"),
            Self::Graphic => Some("fgr"),
            Self::Animation => Some("fan"),
            Self::Spritesheet => Some("fss"),
            Self::Painting => None,
        }
    }
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|kind| {
            kind.extension()
                .is_some_and(|known| known.eq_ignore_ascii_case(extension))
        })
    }
    #[must_use]
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(std::ffi::OsStr::to_str)
            .and_then(Self::from_extension)
    }
    /// Position on the containment ladder, `None` if the kind can't be held in memory.
    const fn rank(self) -> Option<u8> {
        match self {
            Self::Glyph => Some(0),
            Self::Shape => Some(1),
            Self::Graphic => Some(2),
            Self::Animation => Some(3),
            Self::Painting => Some(4),
            Self::Spritesheet => None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertError {
    #[error("{0} art is not supported")]
    Unsupported(ArtKind),
    #[error("can't narrow a {from} of {count} elements into a {to}")]
    Ambiguous {
        from: ArtKind,
        to: ArtKind,
        count: usize,
    },
}

/// Any one piece of art an editor can hold.
#[derive(Clone, PartialEq, Debug)]
pub enum Art {
    Glyph(Glyph),
    Shape(Shape),
    Graphic(Graphic),
    Animation(Animation),
    Painting(Painting),
}
impl Art {
    #[must_use]
    pub fn kind(&self) -> ArtKind {
        match self {
            Self::Glyph(_) => ArtKind::Glyph,
            Self::Shape(_) => ArtKind::Shape,
            Self::Graphic(_) => ArtKind::Graphic,
            Self::Animation(_) => ArtKind::Animation,
            Self::Painting(_) => ArtKind::Painting,
        }
    }
    /// Re-express this art as another kind, one containment step at a time.
    ///
    /// Widening wraps the art with defaults. Narrowing unwraps a container holding exactly one
    /// element and drops that container's own attributes (paint style, delay, transform).
    /// # Errors
    /// The target is unsupported, or a container on the way down holds zero or several elements.
    pub fn convert(self, to: ArtKind) -> Result<Self, ConvertError> {
        let target = to.rank().ok_or(ConvertError::Unsupported(to))?;
        let mut art = self;
        loop {
            // Every in-memory kind has a rank.
            let current = art.kind().rank().ok_or(ConvertError::Unsupported(art.kind()))?;
            art = match current.cmp(&target) {
                std::cmp::Ordering::Equal => return Ok(art),
                std::cmp::Ordering::Less => art.widen(),
                std::cmp::Ordering::Greater => art.narrow(to)?,
            };
        }
    }
    fn widen(self) -> Self {
        match self {
            Self::Glyph(glyph) => Self::Shape(Shape::new(glyph)),
            Self::Shape(shape) => Self::Graphic(Graphic::from(vec![shape])),
            Self::Graphic(graphic) => {
                let mut animation = Animation::new(false);
                animation.push(Frame::from(graphic));
                Self::Animation(animation)
            }
            Self::Animation(animation) => {
                Self::Painting(Painting::from(vec![Component::new(animation)]))
            }
            // Top of the ladder.
            Self::Painting(painting) => Self::Painting(painting),
        }
    }
    fn narrow(self, to: ArtKind) -> Result<Self, ConvertError> {
        let from = self.kind();
        let ambiguous = |count| ConvertError::Ambiguous { from, to, count };
        Ok(match self {
            // Bottom of the ladder.
            Self::Glyph(glyph) => Self::Glyph(glyph),
            Self::Shape(shape) => Self::Glyph(shape.into_glyph()),
            Self::Graphic(graphic) => {
                let mut shapes = graphic.into_shapes();
                if shapes.len() != 1 {
                    return Err(ambiguous(shapes.len()));
                }
                Self::Shape(shapes.remove(0))
            }
            Self::Animation(animation) => {
                let mut frames = animation.into_frames();
                if frames.len() != 1 {
                    return Err(ambiguous(frames.len()));
                }
                Self::Graphic(frames.remove(0).graphic)
            }
            Self::Painting(painting) => {
                let mut components = painting.into_components();
                if components.len() != 1 {
                    return Err(ambiguous(components.len()));
                }
                Self::Animation(components.remove(0).animation)
            }
        })
    }
}
impl From<Glyph> for Art {
    fn from(value: Glyph) -> Self {
        Self::Glyph(value)
    }
}
impl From<Shape> for Art {
    fn from(value: Shape) -> Self {
        Self::Shape(value)
    }
}
impl From<Graphic> for Art {
    fn from(value: Graphic) -> Self {
        Self::Graphic(value)
    }
}
impl From<Animation> for Art {
    fn from(value: Animation) -> Self {
        Self::Animation(value)
    }
}
impl From<Painting> for Art {
    fn from(value: Painting) -> Self {
        Self::Painting(value)
    }
}

#[cfg(test)]
mod test {
    use super::{Art, ArtKind, ConvertError};
    use crate::{Animation, Color, DrawMode, Frame, Glyph, Graphic, Point, Shape};

    fn triangle() -> Glyph {
        Glyph::with_points(
            DrawMode::Triangles,
            false,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
            ],
        )
    }
    #[test]
    fn extensions() {
        assert_eq!(ArtKind::from_extension("fgl"), Some(ArtKind::Glyph));
        assert_eq!(ArtKind::from_extension("FSH"), Some(ArtKind::Shape));
        assert_eq!(ArtKind::from_extension("fgr"), Some(ArtKind::Graphic));
        assert_eq!(ArtKind::from_extension("fan"), Some(ArtKind::Animation));
        assert_eq!(ArtKind::from_extension("fss"), Some(ArtKind::Spritesheet));
        assert_eq!(ArtKind::from_extension("png"), None);
        assert_eq!(
            ArtKind::from_path(std::path::Path::new("art/walk.cycle.fan")),
            Some(ArtKind::Animation)
        );
        assert_eq!(ArtKind::from_path(std::path::Path::new("fgl")), None);
        assert_eq!(ArtKind::Painting.extension(), None);
    }
    #[test]
    fn widen_glyph_to_animation() {
        let art = Art::from(triangle()).convert(ArtKind::Animation).unwrap();
        let Art::Animation(anim) = art else {
            panic!("expected an animation")
        };
        assert!(!anim.cycle);
        assert_eq!(anim.len(), 1);
        assert_eq!(anim.frames()[0].delay, Frame::DEFAULT_DELAY);
        assert_eq!(anim.frames()[0].graphic.shapes(), &[Shape::new(triangle())]);
    }
    #[test]
    fn narrow_round_trip() {
        let shape = Shape::with_style(triangle(), Color::RED, 3.0, 2.0);
        let painting = Art::from(shape.clone())
            .convert(ArtKind::Painting)
            .unwrap();
        assert_eq!(painting.kind(), ArtKind::Painting);
        assert_eq!(painting.convert(ArtKind::Shape), Ok(Art::Shape(shape)));
    }
    #[test]
    fn narrow_ambiguous() {
        let graphic: Graphic = [Shape::new(triangle()), Shape::default()]
            .into_iter()
            .collect();
        assert_eq!(
            Art::from(graphic).convert(ArtKind::Glyph),
            Err(ConvertError::Ambiguous {
                from: ArtKind::Graphic,
                to: ArtKind::Glyph,
                count: 2
            })
        );
        assert_eq!(
            Art::from(Animation::new(true)).convert(ArtKind::Graphic),
            Err(ConvertError::Ambiguous {
                from: ArtKind::Animation,
                to: ArtKind::Graphic,
                count: 0
            })
        );
    }
    #[test]
    fn spritesheet_unsupported() {
        assert_eq!(
            Art::from(triangle()).convert(ArtKind::Spritesheet),
            Err(ConvertError::Unsupported(ArtKind::Spritesheet))
        );
    }
}
