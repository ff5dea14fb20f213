use super::EditError;
use crate::point::Point;

/// How the points of a glyph are assembled into primitives when drawn.
///
/// Discriminants are the OpenGL primitive enumerants, which is also the tag written to files.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum DrawMode {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    #[default]
    LineStrip = 3,
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
    Quads = 7,
    QuadStrip = 8,
    Polygon = 9,
}
impl DrawMode {
    #[must_use]
    pub const fn tag(self) -> u32 {
        self as u32
    }
    /// Look up a mode by its tag. `None` for tags no renderer could draw.
    #[must_use]
    pub const fn from_tag(tag: u32) -> Option<Self> {
        Some(match tag {
            0 => Self::Points,
            1 => Self::Lines,
            2 => Self::LineLoop,
            3 => Self::LineStrip,
            4 => Self::Triangles,
            5 => Self::TriangleStrip,
            6 => Self::TriangleFan,
            7 => Self::Quads,
            8 => Self::QuadStrip,
            9 => Self::Polygon,
            _ => return None,
        })
    }
}

/// An ordered run of points, the base drawable.
///
/// Point order defines connectivity under [`DrawMode`], so editing operations never reorder
/// existing points.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Glyph {
    mode: DrawMode,
    /// Points are bezier control points rather than segment ends.
    curve: bool,
    points: Vec<Point>,
}
impl Glyph {
    #[must_use]
    pub fn new(mode: DrawMode) -> Self {
        Self {
            mode,
            curve: false,
            points: Vec::new(),
        }
    }
    #[must_use]
    pub fn with_points(mode: DrawMode, curve: bool, points: Vec<Point>) -> Self {
        Self {
            mode,
            curve,
            points,
        }
    }
    #[must_use]
    pub fn mode(&self) -> DrawMode {
        self.mode
    }
    pub fn set_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }
    #[must_use]
    pub fn is_curve(&self) -> bool {
        self.curve
    }
    pub fn set_curve(&mut self, curve: bool) {
        self.curve = curve;
    }
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }
    /// Insert a point before `index`. `index == len` appends.
    /// # Errors
    /// `index` is past the end.
    pub fn insert(&mut self, index: usize, point: Point) -> Result<(), EditError> {
        if index > self.points.len() {
            return Err(EditError::OutOfBounds {
                index,
                len: self.points.len(),
            });
        }
        self.points.insert(index, point);
        Ok(())
    }
    /// Remove and return the point at `index`, `None` if there is no such point.
    pub fn remove(&mut self, index: usize) -> Option<Point> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }
    /// Move a point in place, keeping its position in the sequence.
    /// # Errors
    /// `index` is past the end.
    pub fn set_point(&mut self, index: usize, point: Point) -> Result<(), EditError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(EditError::OutOfBounds { index, len })?;
        *slot = point;
        Ok(())
    }
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
impl Extend<Point> for Glyph {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}
impl<'a> IntoIterator for &'a Glyph {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::{DrawMode, Glyph};
    use crate::{art::EditError, point::Point};
    #[test]
    fn mode_names() {
        assert_eq!(DrawMode::LineStrip.to_string(), "line-strip");
        assert_eq!(
            "Triangle-Fan".parse::<DrawMode>().unwrap(),
            DrawMode::TriangleFan
        );
        assert!("hexagons".parse::<DrawMode>().is_err());
    }
    #[test]
    fn mode_tags() {
        use strum::IntoEnumIterator;
        for mode in DrawMode::iter() {
            assert_eq!(DrawMode::from_tag(mode.tag()), Some(mode));
        }
        assert_eq!(DrawMode::from_tag(10), None);
        assert_eq!(DrawMode::from_tag(u32::MAX), None);
    }
    #[test]
    fn editing_keeps_order() {
        let mut glyph = Glyph::new(DrawMode::Polygon);
        glyph.push(Point::new(0.0, 0.0));
        glyph.push(Point::new(2.0, 0.0));
        glyph.insert(1, Point::new(1.0, 1.0)).unwrap();
        glyph.insert(3, Point::new(3.0, 3.0)).unwrap();
        assert_eq!(
            glyph.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 0.0),
                Point::new(3.0, 3.0),
            ]
        );

        assert_eq!(
            glyph.insert(9, Point::ORIGIN),
            Err(EditError::OutOfBounds { index: 9, len: 4 })
        );
        assert_eq!(glyph.remove(1), Some(Point::new(1.0, 1.0)));
        assert_eq!(glyph.remove(3), None);
        assert_eq!(glyph.len(), 3);

        glyph.set_curve(true);
        glyph.set_mode(DrawMode::Points);
        assert!(glyph.is_curve());
        assert_eq!(glyph.mode(), DrawMode::Points);
    }
}
