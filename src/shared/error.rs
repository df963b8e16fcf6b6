// This is free and unencumbered software released into the public domain.

use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("no candidate resolution available")]
    NoCandidateAvailable,

    #[error("invalid target: {0}")]
    InvalidTarget(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("preview surface does not exist")]
    NoSurface,

    #[error("preview sizes have not been measured yet")]
    NotMeasured,

    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("camera error while {context}")]
    Device {
        context: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("{0}")]
    Other(String),
}

impl CameraError {
    #[inline]
    pub fn device(context: &'static str, source: impl StdError + Send + Sync + 'static) -> Self {
        Self::Device {
            context,
            source: Box::new(source),
        }
    }

    #[inline]
    pub fn invalid_target(msg: impl Into<String>) -> Self {
        Self::InvalidTarget(msg.into())
    }

    #[inline]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    #[inline]
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
