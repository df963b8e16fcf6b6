// This is free and unencumbered software released into the public domain.

// C ABI for host runtimes that drive preview sizing from their own
// view/surface glue (Java via JNI shims, Swift, etc.).

use crate::shared::{CameraError, Resolution, Target, negotiate, try_select_optimal};
use core::slice;

/// A resolution as laid out across the FFI boundary.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AsimovCameraSize {
    pub width: u32,
    pub height: u32,
}

impl From<Resolution> for AsimovCameraSize {
    fn from(size: Resolution) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

impl From<AsimovCameraSize> for Resolution {
    fn from(size: AsimovCameraSize) -> Self {
        Resolution::new(size.width, size.height)
    }
}

/// Error codes returned by the FFI API.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AsimovCameraErrorCode {
    /// No error.
    Ok = 0,
    /// The candidate list was empty.
    NoCandidate = 1,
    /// Invalid arguments passed via the FFI boundary.
    InvalidArgument = 2,
}

impl From<CameraError> for AsimovCameraErrorCode {
    fn from(err: CameraError) -> Self {
        match err {
            CameraError::NoCandidateAvailable => AsimovCameraErrorCode::NoCandidate,
            _ => AsimovCameraErrorCode::InvalidArgument,
        }
    }
}

/// Borrow a C array as candidate sizes.
///
/// `NULL` is accepted only together with a zero length.
///
/// # Safety
/// A non-null `ptr` must point to `len` readable, initialized values.
unsafe fn candidates(
    ptr: *const AsimovCameraSize,
    len: usize,
) -> Result<Vec<Resolution>, AsimovCameraErrorCode> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return Err(AsimovCameraErrorCode::InvalidArgument);
    }
    let sizes = unsafe { slice::from_raw_parts(ptr, len) };
    Ok(sizes.iter().copied().map(Resolution::from).collect())
}

/// Select the best-fitting size for a target box.
///
/// Parameters:
/// - `sizes`, `len`: supported sizes in platform order.
/// - `target_width`, `target_height`: the box to fit; width must be positive.
/// - `out_size`: [out] receives the selected size on success.
///
/// Return:
/// - `Ok` with `out_size` written, `NoCandidate` when `len` is zero,
///   `InvalidArgument` otherwise.
///
/// # Safety
/// `sizes` must point to `len` values (or be NULL with `len == 0`), and
/// `out_size` must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn asimov_camera_select_optimal(
    sizes: *const AsimovCameraSize,
    len: usize,
    target_width: u32,
    target_height: u32,
    out_size: *mut AsimovCameraSize,
) -> AsimovCameraErrorCode {
    if out_size.is_null() {
        return AsimovCameraErrorCode::InvalidArgument;
    }
    let Ok(target) = Target::new(target_width, target_height) else {
        return AsimovCameraErrorCode::InvalidArgument;
    };
    let sizes = match unsafe { candidates(sizes, len) } {
        Ok(v) => v,
        Err(e) => return e,
    };

    match try_select_optimal(&sizes, target) {
        Ok(size) => {
            unsafe {
                *out_size = size.into();
            }
            AsimovCameraErrorCode::Ok
        },
        Err(e) => e.into(),
    }
}

/// Negotiate preview and picture sizes for a view box.
///
/// The picture size is selected against the chosen preview size. When no
/// picture size can be chosen (empty list), `out_picture` is zeroed and the
/// call still succeeds.
///
/// Return:
/// - `Ok` when a preview size was chosen, `NoCandidate` when the preview
///   list is empty, `InvalidArgument` otherwise.
///
/// # Safety
/// Each size pointer must point to its length in values (or be NULL with a
/// zero length); both out pointers must be valid for writes.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn asimov_camera_negotiate(
    preview_sizes: *const AsimovCameraSize,
    preview_len: usize,
    picture_sizes: *const AsimovCameraSize,
    picture_len: usize,
    view_width: u32,
    view_height: u32,
    out_preview: *mut AsimovCameraSize,
    out_picture: *mut AsimovCameraSize,
) -> AsimovCameraErrorCode {
    if out_preview.is_null() || out_picture.is_null() {
        return AsimovCameraErrorCode::InvalidArgument;
    }
    let Ok(view) = Target::new(view_width, view_height) else {
        return AsimovCameraErrorCode::InvalidArgument;
    };
    let (preview_sizes, picture_sizes) = match unsafe {
        (
            candidates(preview_sizes, preview_len),
            candidates(picture_sizes, picture_len),
        )
    } {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => return e,
    };

    let result = negotiate(&preview_sizes, &picture_sizes, view);
    let Some(preview) = result.preview else {
        return AsimovCameraErrorCode::NoCandidate;
    };

    unsafe {
        *out_preview = preview.into();
        *out_picture = result.picture.map(Into::into).unwrap_or_default();
    }
    AsimovCameraErrorCode::Ok
}
