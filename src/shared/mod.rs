// This is free and unencumbered software released into the public domain.

/// Emits a log event through `asimov_module::tracing` when the `tracing`
/// feature is on; compiles to nothing otherwise.
macro_rules! log {
    ($level:ident, error = $err:expr, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        asimov_module::tracing::$level!(
            target: "asimov_camera_preview_module",
            error = %$err,
            $($arg)+
        );
        #[cfg(not(feature = "tracing"))]
        let _ = &$err;
    }};
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        asimov_module::tracing::$level!(target: "asimov_camera_preview_module", $($arg)+);
    }};
}

mod config;
pub use config::*;

mod device;
pub use device::*;

mod error;
pub use error::*;

mod focus;
pub use focus::*;

mod measure;
pub use measure::*;

mod negotiate;
pub use negotiate::*;

mod resolution;
pub use resolution::*;

mod surface;
pub use surface::*;
