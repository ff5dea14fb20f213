use super::{graphic::Graphic, EditError};

/// What a frame's delay counts.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum DelayUnit {
    #[default]
    Milliseconds,
    /// Display refreshes of the host.
    Frames,
}

/// One still of an animation and how long it stays up.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Frame {
    /// Display duration in the owning animation's [`DelayUnit`]. Not range checked.
    pub delay: i32,
    pub graphic: Graphic,
}
impl Frame {
    /// Delay given to frames which are made rather than drawn, eg. when a graphic is promoted.
    pub const DEFAULT_DELAY: i32 = 100;
    #[must_use]
    pub fn new(delay: i32, graphic: Graphic) -> Self {
        Self { delay, graphic }
    }
}
impl From<Graphic> for Frame {
    fn from(graphic: Graphic) -> Self {
        Self::new(Self::DEFAULT_DELAY, graphic)
    }
}

/// An ordered run of frames. Frame 0 is shown first.
///
/// An animation without frames is valid and shows nothing.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Animation {
    /// Loop back to frame 0 after the last frame.
    pub cycle: bool,
    pub delay_unit: DelayUnit,
    frames: Vec<Frame>,
}
impl Animation {
    #[must_use]
    pub fn new(cycle: bool) -> Self {
        Self {
            cycle,
            ..Self::default()
        }
    }
    #[must_use]
    pub fn with_frames(cycle: bool, delay_unit: DelayUnit, frames: Vec<Frame>) -> Self {
        Self {
            cycle,
            delay_unit,
            frames,
        }
    }
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
    pub fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }
    /// # Errors
    /// `index` is past the end.
    pub fn insert(&mut self, index: usize, frame: Frame) -> Result<(), EditError> {
        if index > self.frames.len() {
            return Err(EditError::OutOfBounds {
                index,
                len: self.frames.len(),
            });
        }
        self.frames.insert(index, frame);
        Ok(())
    }
    pub fn remove(&mut self, index: usize) -> Option<Frame> {
        (index < self.frames.len()).then(|| self.frames.remove(index))
    }
    /// The frame shown after `index`. `None` once a non-cycling animation has played out,
    /// or if `index` isn't a frame at all.
    #[must_use]
    pub fn successor(&self, index: usize) -> Option<usize> {
        let next = index.checked_add(1)?;
        if index >= self.frames.len() {
            None
        } else if next < self.frames.len() {
            Some(next)
        } else if self.cycle {
            Some(0)
        } else {
            None
        }
    }
    /// Sum of every frame's delay, for a single pass.
    #[must_use]
    pub fn total_duration(&self) -> i64 {
        self.frames.iter().map(|frame| i64::from(frame.delay)).sum()
    }
    #[must_use]
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}
impl<'a> IntoIterator for &'a Animation {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
