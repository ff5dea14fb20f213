use super::animation::Animation;
use crate::point::Point;

/// An animation placed in a painting, with a resting transform and a periodic wobble around it.
#[derive(Clone, PartialEq, Debug)]
pub struct Component {
    pub animation: Animation,
    pub position: Point,
    /// Radians.
    pub rotation: f32,
    pub scale: f32,
    pub position_frequency: Point,
    pub rotation_frequency: f32,
    pub scale_frequency: f32,
    pub position_amplitude: Point,
    pub scale_amplitude: f32,
}
impl Component {
    /// Place `animation` at the origin, unscaled and still.
    #[must_use]
    pub fn new(animation: Animation) -> Self {
        Self {
            animation,
            position: Point::ORIGIN,
            rotation: 0.0,
            scale: 1.0,
            position_frequency: Point::ORIGIN,
            rotation_frequency: 0.0,
            scale_frequency: 0.0,
            position_amplitude: Point::ORIGIN,
            scale_amplitude: 0.0,
        }
    }
    /// No movement beyond the resting transform.
    #[must_use]
    pub fn is_still(&self) -> bool {
        self.position_amplitude == Point::ORIGIN && self.scale_amplitude == 0.0
    }
}
impl Default for Component {
    fn default() -> Self {
        Self::new(Animation::default())
    }
}

/// A scene of components, drawn in order.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Painting {
    components: Vec<Component>,
}
impl Painting {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }
    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }
    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }
    pub fn remove(&mut self, index: usize) -> Option<Component> {
        (index < self.components.len()).then(|| self.components.remove(index))
    }
    #[must_use]
    pub fn into_components(self) -> Vec<Component> {
        self.components
    }
}
impl From<Vec<Component>> for Painting {
    fn from(components: Vec<Component>) -> Self {
        Self { components }
    }
}
impl FromIterator<Component> for Painting {
    fn from_iter<T: IntoIterator<Item = Component>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}
impl<'a> IntoIterator for &'a Painting {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
