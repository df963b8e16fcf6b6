// This is free and unencumbered software released into the public domain.

use crate::shared::CameraError;
use std::{borrow::Cow, fmt, str::FromStr};

/// Camera focus modes, named as the platform's parameter strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusMode {
    Auto,
    Infinity,
    Macro,
    Fixed,
    Edof,
    ContinuousVideo,
    ContinuousPicture,
}

impl FocusMode {
    pub const ALL: [FocusMode; 7] = [
        Self::Auto,
        Self::Infinity,
        Self::Macro,
        Self::Fixed,
        Self::Edof,
        Self::ContinuousVideo,
        Self::ContinuousPicture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Infinity => "infinity",
            Self::Macro => "macro",
            Self::Fixed => "fixed",
            Self::Edof => "edof",
            Self::ContinuousVideo => "continuous-video",
            Self::ContinuousPicture => "continuous-picture",
        }
    }
}

impl fmt::Display for FocusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl dogma::Named for FocusMode {
    fn name(&self) -> Cow<'_, str> {
        self.as_str().into()
    }
}

impl FromStr for FocusMode {
    type Err = CameraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CameraError::unsupported(format!("focus mode '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogma::Named;

    #[test]
    fn names_match_platform_strings() {
        for mode in FocusMode::ALL {
            assert_eq!(mode.to_string(), mode.as_str());
            assert_eq!(mode.name(), mode.as_str());
            assert_eq!(mode.as_str().parse::<FocusMode>().unwrap(), mode);
        }
    }

    #[test]
    fn rejects_unknown_modes() {
        assert!(matches!(
            "manual".parse::<FocusMode>(),
            Err(CameraError::Unsupported(_))
        ));
    }
}
