use super::glyph::Glyph;
use crate::color::Color;

/// A glyph with a paint style.
///
/// Weights are not validated; zero or negative values are carried as-is.
#[derive(Clone, PartialEq, Debug)]
pub struct Shape {
    pub color: Color,
    pub line_thickness: f32,
    pub point_size: f32,
    pub glyph: Glyph,
}
impl Shape {
    pub const DEFAULT_LINE_THICKNESS: f32 = 1.0;
    pub const DEFAULT_POINT_SIZE: f32 = 1.0;
    /// Paint `glyph` with the default style.
    #[must_use]
    pub fn new(glyph: Glyph) -> Self {
        Self {
            color: Color::default(),
            line_thickness: Self::DEFAULT_LINE_THICKNESS,
            point_size: Self::DEFAULT_POINT_SIZE,
            glyph,
        }
    }
    #[must_use]
    pub fn with_style(glyph: Glyph, color: Color, line_thickness: f32, point_size: f32) -> Self {
        Self {
            color,
            line_thickness,
            point_size,
            glyph,
        }
    }
    /// Discard the paint style.
    #[must_use]
    pub fn into_glyph(self) -> Glyph {
        self.glyph
    }
}
impl Default for Shape {
    fn default() -> Self {
        Self::new(Glyph::default())
    }
}
impl std::ops::Deref for Shape {
    type Target = Glyph;
    fn deref(&self) -> &Self::Target {
        &self.glyph
    }
}
impl std::ops::DerefMut for Shape {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.glyph
    }
}
impl From<Glyph> for Shape {
    fn from(value: Glyph) -> Self {
        Self::new(value)
    }
}
