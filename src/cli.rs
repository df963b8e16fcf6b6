// This is free and unencumbered software released into the public domain.

//! CLI helpers (argument parsing, error reporting, verbosity handling).
//!
//! This module must compile even when the crate feature `cli` is disabled,
//! because the library is built in non-CLI configurations.

use crate::shared::{CameraError, Resolution};

#[cfg(feature = "cli")]
use asimov_module::SysexitsError::{self, *};

#[cfg(feature = "cli")]
use clientele::StandardOptions;

/// Parses a comma-separated size list such as `1920x1080,1280x720`,
/// keeping the given order.
pub fn parse_size_list(s: &str) -> Result<Vec<Resolution>, CameraError> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(feature = "cli")]
pub fn handle_error(err: &CameraError, flags: &StandardOptions) -> SysexitsError {
    #[cfg(feature = "tracing")]
    {
        use asimov_module::tracing::{debug, error};

        error!(target: "asimov_camera_preview_module", %err, "camera command failed");

        if flags.debug || flags.verbose >= 2 {
            debug!(target: "asimov_camera_preview_module", ?err, "detailed error");
        }
    }

    report_error(err, flags);
    map_error_to_sysexit(err)
}

#[cfg(feature = "cli")]
pub fn info_user(flags: &StandardOptions, msg: &str) {
    if flags.debug || flags.verbose >= 1 {
        eprintln!("INFO: {msg}");
    }

    #[cfg(feature = "tracing")]
    asimov_module::tracing::info!(target: "asimov_camera_preview_module", "{msg}");
}

#[cfg(feature = "cli")]
pub fn warn_user(flags: &StandardOptions, msg: &str) {
    if flags.debug || flags.verbose >= 1 {
        eprintln!("WARN: {msg}");
    }

    #[cfg(feature = "tracing")]
    asimov_module::tracing::warn!(target: "asimov_camera_preview_module", "{msg}");
}

#[cfg(feature = "cli")]
fn report_error(err: &CameraError, flags: &StandardOptions) {
    use std::error::Error as _;
    use std::io::Write;

    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "ERROR: {err}");

    if flags.debug || flags.verbose >= 2 {
        let mut source = err.source();
        while let Some(cause) = source {
            let _ = writeln!(stderr, "  Caused by: {}", cause);
            source = cause.source();
        }
    }
}

#[cfg(feature = "cli")]
pub fn map_error_to_sysexit(err: &CameraError) -> SysexitsError {
    match err {
        CameraError::NoCandidateAvailable => EX_UNAVAILABLE,
        CameraError::InvalidTarget(_) => EX_USAGE,
        CameraError::InvalidConfig(_) => EX_USAGE,
        CameraError::NoSurface => EX_SOFTWARE,
        CameraError::NotMeasured => EX_SOFTWARE,
        CameraError::Unsupported(_) => EX_UNAVAILABLE,
        CameraError::Device { .. } => EX_SOFTWARE,
        CameraError::Other(_) => EX_SOFTWARE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_lists_keep_platform_order() {
        assert_eq!(
            parse_size_list("1920x1080, 640x480,,1280x720").unwrap(),
            [
                Resolution::new(1920, 1080),
                Resolution::new(640, 480),
                Resolution::new(1280, 720)
            ]
        );
        assert!(parse_size_list("").unwrap().is_empty());
        assert!(parse_size_list("640x480,bogus").is_err());
    }
}
