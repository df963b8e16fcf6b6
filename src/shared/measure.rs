// This is free and unencumbered software released into the public domain.

use crate::shared::Resolution;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureMode {
    /// The parent imposes no constraint.
    Unspecified,
    /// The parent dictates the exact size.
    Exactly,
    /// The view may be as large as it wants up to the given size.
    AtMost,
}

/// A layout constraint handed down by the host toolkit during measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }

    pub const fn exactly(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    pub const fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// Reconciles the size a view would like with this constraint.
    pub fn resolve(&self, desired: u32) -> u32 {
        match self.mode {
            MeasureMode::Unspecified => desired,
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => desired.min(self.size),
        }
    }
}

pub fn resolve_size(desired: u32, spec: MeasureSpec) -> u32 {
    spec.resolve(desired)
}

/// Long side over short side, independent of orientation.
pub fn preview_aspect(preview: Resolution) -> Option<f32> {
    let long = preview.width.max(preview.height);
    let short = preview.width.min(preview.height);
    (short > 0).then(|| long as f32 / short as f32)
}

/// Keeps the measured width and derives the height from the preview's
/// aspect, so the view is never shorter than the preview it shows.
pub fn measured_dimensions(width: u32, preview: Resolution) -> Option<(u32, u32)> {
    let aspect = preview_aspect(preview)?;
    Some((width, (width as f32 * aspect) as u32))
}
