// This is free and unencumbered software released into the public domain.

use crate::shared::{
    CameraDevice, CameraError, MeasureSpec, PreviewConfig, Resolution, Selector, SizeNegotiation,
    SurfaceInfo, Target, measured_dimensions,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceState {
    /// No surface exists yet.
    Idle,
    /// The host surface exists and may be previewed into.
    Active(SurfaceInfo),
    /// The surface was destroyed; a new one may still be created.
    TornDown,
}

/// Binds a camera to a host view, driven by the toolkit's measure and
/// surface callbacks. All callbacks are expected on the host UI thread.
pub struct PreviewSurface<D: CameraDevice> {
    device: D,
    selector: Selector,
    preview_sizes: Vec<Resolution>,
    picture_sizes: Vec<Resolution>,
    sizes: SizeNegotiation,
    state: SurfaceState,
}

impl<D: CameraDevice> PreviewSurface<D> {
    /// Snapshots the supported sizes and applies the preferred focus mode
    /// when the camera supports it.
    pub fn new(mut device: D, config: &PreviewConfig) -> Result<Self, CameraError> {
        config.validate()?;
        let mut parameters = device.parameters()?;

        if let Some(mode) = config.focus_mode {
            if parameters.supports_focus_mode(mode) {
                parameters.focus_mode = Some(mode);
            } else {
                log!(debug, focus_mode = %mode, "focus mode not supported, leaving default");
            }
        }

        device.set_parameters(&parameters)?;

        Ok(Self {
            device,
            selector: config.selector(),
            preview_sizes: parameters.supported_preview_sizes,
            picture_sizes: parameters.supported_picture_sizes,
            sizes: SizeNegotiation::default(),
            state: SurfaceState::Idle,
        })
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// The preview and picture sizes chosen by the last measure; empty when
    /// that measure could not size the preview.
    pub fn sizes(&self) -> SizeNegotiation {
        self.sizes
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }

    /// Negotiates sizes for the measured view box and returns the view's
    /// measured dimensions: the resolved width, and a height stretched to
    /// the preview's aspect.
    pub fn on_measure(
        &mut self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        suggested_minimum: Resolution,
    ) -> (u32, u32) {
        let width = width_spec.resolve(suggested_minimum.width);
        let height = height_spec.resolve(suggested_minimum.height);

        let Ok(view) = Target::new(width, height) else {
            log!(warn, width, height, "view has no width, skipping preview sizing");
            self.sizes = SizeNegotiation::default();
            return (width, height);
        };

        let sizes = self
            .selector
            .negotiate(&self.preview_sizes, &self.picture_sizes, view);
        let Some(preview) = sizes.preview else {
            log!(warn, width, height, "no supported preview size, skipping preview sizing");
            self.sizes = SizeNegotiation::default();
            return (width, height);
        };

        log!(
            debug,
            preview = %preview,
            picture = ?sizes.picture,
            "negotiated sizes for {width}x{height}"
        );
        self.sizes = sizes;

        measured_dimensions(width, preview).unwrap_or((width, height))
    }

    pub fn on_surface_created(&mut self, surface: SurfaceInfo) {
        log!(debug, ?surface, "surface created");
        self.state = SurfaceState::Active(surface);
    }

    /// Restarts the preview with the measured sizes on the changed surface.
    pub fn on_surface_changed(&mut self, surface: SurfaceInfo) -> Result<(), CameraError> {
        if !matches!(self.state, SurfaceState::Active(_)) {
            log!(warn, ?surface, "surface changed without an active surface");
            return Err(CameraError::NoSurface);
        }
        self.state = SurfaceState::Active(surface);

        // The camera may not be previewing yet; that is not a failure.
        if let Err(err) = self.device.stop_preview() {
            log!(warn, error = err, "failed to stop preview before reconfiguring");
        }

        let Some(preview) = self.sizes.preview else {
            return Err(CameraError::NotMeasured);
        };

        self.start_preview(surface, preview, self.sizes.picture)
            .inspect_err(|err| log!(error, error = err, "failed to start camera preview"))
    }

    pub fn on_surface_destroyed(&mut self) -> Result<(), CameraError> {
        if !matches!(self.state, SurfaceState::Active(_)) {
            return Ok(());
        }
        log!(debug, "surface destroyed");
        self.state = SurfaceState::TornDown;

        self.device
            .stop_preview()
            .inspect_err(|err| log!(warn, error = err, "failed to stop preview on teardown"))
    }

    fn start_preview(
        &mut self,
        surface: SurfaceInfo,
        preview: Resolution,
        picture: Option<Resolution>,
    ) -> Result<(), CameraError> {
        let mut parameters = self.device.parameters()?;
        parameters.preview_size = Some(preview);
        if picture.is_some() {
            parameters.picture_size = picture;
        }

        self.device.set_parameters(&parameters)?;
        self.device.set_preview_display(&surface)?;
        self.device.start_preview()
    }
}
