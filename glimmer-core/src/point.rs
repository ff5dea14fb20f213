/// A position on the drawing plane.
#[derive(Copy, Clone, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable, Debug)]
#[repr(C)]
pub struct Point {
    x: f32,
    y: f32,
}
impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    #[must_use]
    pub const fn x(self) -> f32 {
        self.x
    }
    #[must_use]
    pub const fn y(self) -> f32 {
        self.y
    }
    #[must_use]
    pub const fn as_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}
impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}
impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
impl From<Point> for [f32; 2] {
    fn from(value: Point) -> Self {
        value.as_array()
    }
}
impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
