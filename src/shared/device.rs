// This is free and unencumbered software released into the public domain.

use crate::shared::{CameraError, CameraParameters};

/// The host surface a preview is drawn into, as reported by the toolkit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceInfo {
    pub format: i32,
    pub width: u32,
    pub height: u32,
}

impl SurfaceInfo {
    pub fn new(format: i32, width: u32, height: u32) -> Self {
        Self {
            format,
            width,
            height,
        }
    }
}

/// The platform camera, as seen from a preview surface.
///
/// Implementations wrap the host's camera handle. Every call reports
/// failure explicitly; none of them may panic across the host boundary.
pub trait CameraDevice {
    fn parameters(&self) -> Result<CameraParameters, CameraError>;

    fn set_parameters(&mut self, parameters: &CameraParameters) -> Result<(), CameraError>;

    fn set_preview_display(&mut self, surface: &SurfaceInfo) -> Result<(), CameraError>;

    fn start_preview(&mut self) -> Result<(), CameraError>;

    fn stop_preview(&mut self) -> Result<(), CameraError> {
        Ok(())
    }
}

impl<D: CameraDevice + ?Sized> CameraDevice for Box<D> {
    fn parameters(&self) -> Result<CameraParameters, CameraError> {
        (**self).parameters()
    }

    fn set_parameters(&mut self, parameters: &CameraParameters) -> Result<(), CameraError> {
        (**self).set_parameters(parameters)
    }

    fn set_preview_display(&mut self, surface: &SurfaceInfo) -> Result<(), CameraError> {
        (**self).set_preview_display(surface)
    }

    fn start_preview(&mut self) -> Result<(), CameraError> {
        (**self).start_preview()
    }

    fn stop_preview(&mut self) -> Result<(), CameraError> {
        (**self).stop_preview()
    }
}
