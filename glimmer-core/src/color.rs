/// A straight-alpha RGBA color, one `f32` per channel.
///
/// Channels are stored exactly as given. Nothing is clamped or normalized, so a color read from a
/// file compares equal to the color that was written.
#[derive(Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Debug)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}
impl Color {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    /// An opaque color. This is also how colors from three-channel files are read.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
    #[must_use]
    pub const fn from_array([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
    #[must_use]
    pub const fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }
}
impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
impl From<[f32; 4]> for Color {
    fn from(value: [f32; 4]) -> Self {
        Self::from_array(value)
    }
}
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod test {
    use super::Color;
    #[test]
    fn rgb_is_opaque() {
        let color = Color::rgb(0.25, 0.5, 0.75);
        assert!(color.is_opaque());
        assert_eq!(color.as_array(), [0.25, 0.5, 0.75, 1.0]);
        assert!(!Color::TRANSPARENT.is_opaque());
    }
    #[test]
    fn pod_layout() {
        // The in-memory layout is the channel order used on the wire.
        let color = Color::new(1.0, 2.0, 3.0, 4.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&color));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
