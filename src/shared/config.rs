// This is free and unencumbered software released into the public domain.

use crate::shared::{ASPECT_TOLERANCE, CameraError, FocusMode, Resolution, Selector};

/// A snapshot of a camera's parameter set.
///
/// Read from a [`CameraDevice`](crate::shared::CameraDevice), edited as a
/// plain value, and written back whole.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CameraParameters {
    pub supported_preview_sizes: Vec<Resolution>,
    pub supported_picture_sizes: Vec<Resolution>,
    pub supported_focus_modes: Vec<FocusMode>,
    pub preview_size: Option<Resolution>,
    pub picture_size: Option<Resolution>,
    pub focus_mode: Option<FocusMode>,
}

impl CameraParameters {
    pub fn new(
        supported_preview_sizes: impl Into<Vec<Resolution>>,
        supported_picture_sizes: impl Into<Vec<Resolution>>,
    ) -> Self {
        Self {
            supported_preview_sizes: supported_preview_sizes.into(),
            supported_picture_sizes: supported_picture_sizes.into(),
            ..Default::default()
        }
    }

    pub fn with_focus_modes(mut self, modes: impl Into<Vec<FocusMode>>) -> Self {
        self.supported_focus_modes = modes.into();
        self
    }

    pub fn supports_focus_mode(&self, mode: FocusMode) -> bool {
        self.supported_focus_modes.contains(&mode)
    }
}

#[derive(Clone, Debug)]
pub struct PreviewConfig {
    pub aspect_tolerance: f64,
    pub focus_mode: Option<FocusMode>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            aspect_tolerance: ASPECT_TOLERANCE,
            focus_mode: Some(FocusMode::ContinuousPicture),
        }
    }
}

impl PreviewConfig {
    pub fn with_aspect_tolerance(mut self, tolerance: f64) -> Self {
        self.aspect_tolerance = tolerance;
        self
    }

    pub fn with_focus_mode(mut self, mode: Option<FocusMode>) -> Self {
        self.focus_mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), CameraError> {
        if !self.aspect_tolerance.is_finite() || self.aspect_tolerance < 0.0 {
            return Err(CameraError::invalid_config(format!(
                "aspect tolerance must be a non-negative number, got {}",
                self.aspect_tolerance
            )));
        }
        Ok(())
    }

    pub fn selector(&self) -> Selector {
        Selector::default().with_aspect_tolerance(self.aspect_tolerance)
    }
}
