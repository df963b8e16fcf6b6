// This is free and unencumbered software released into the public domain.

use crate::shared::CameraError;
use derive_more::Display;
use std::str::FromStr;

/// Maximum deviation between a candidate's and the target's height/width
/// ratio for the candidate to count as aspect-matched.
pub const ASPECT_TOLERANCE: f64 = 0.1;

/// A device-supported capture or display size, in pixels.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
#[display("{width}x{height}")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Height over width, or `None` for a zero-width resolution.
    pub fn ratio(&self) -> Option<f64> {
        (self.width > 0).then(|| self.height as f64 / self.width as f64)
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl FromStr for Resolution {
    type Err = CameraError;

    /// Parses `WxH` (also accepting `×` and `X` as the separator).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace(['×', 'X'], "x");
        let Some((w, h)) = s.split_once('x') else {
            return Err(CameraError::invalid_config(format!(
                "invalid size '{s}', use WxH (e.g., 1920x1080)"
            )));
        };
        let width: u32 = w
            .trim()
            .parse()
            .map_err(|_| CameraError::invalid_config(format!("invalid width: {}", w.trim())))?;
        let height: u32 = h
            .trim()
            .parse()
            .map_err(|_| CameraError::invalid_config(format!("invalid height: {}", h.trim())))?;
        if width == 0 || height == 0 {
            return Err(CameraError::invalid_config(format!(
                "size {width}x{height} has a zero dimension"
            )));
        }
        Ok(Self { width, height })
    }
}

/// The box a selection optimises against. The width is always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    width: u32,
    height: u32,
}

impl Target {
    pub fn new(width: u32, height: u32) -> Result<Self, CameraError> {
        if width == 0 {
            return Err(CameraError::invalid_target("target width must be positive"));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Height over width.
    pub fn ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }
}

impl TryFrom<Resolution> for Target {
    type Error = CameraError;

    fn try_from(size: Resolution) -> Result<Self, Self::Error> {
        Self::new(size.width, size.height)
    }
}

/// Two-pass size selector with a configurable aspect tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selector {
    pub aspect_tolerance: f64,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            aspect_tolerance: ASPECT_TOLERANCE,
        }
    }
}

impl Selector {
    pub fn with_aspect_tolerance(mut self, tolerance: f64) -> Self {
        self.aspect_tolerance = tolerance;
        self
    }

    /// Returns the candidate whose height is closest to the target's,
    /// preferring candidates within the aspect tolerance of the target
    /// ratio and falling back to all candidates when none are.
    ///
    /// Both ratios are height over width, taken literally from the view
    /// box and the camera sizes. A landscape sensor reported against a
    /// portrait view will therefore never aspect-match and always fall
    /// through to the unconstrained pass.
    pub fn select<'a>(&self, candidates: &'a [Resolution], target: Target) -> Option<&'a Resolution> {
        let target_ratio = target.ratio();
        let aspect_matched = candidates.iter().filter(|size| {
            size.ratio()
                .is_some_and(|ratio| (ratio - target_ratio).abs() <= self.aspect_tolerance)
        });

        closest_height(aspect_matched, target.height)
            .or_else(|| closest_height(candidates.iter(), target.height))
    }
}

// `min_by_key` returns the first of several equal minima, so earlier
// candidates win ties.
fn closest_height<'a>(
    sizes: impl Iterator<Item = &'a Resolution>,
    target_height: u32,
) -> Option<&'a Resolution> {
    sizes.min_by_key(|size| size.height.abs_diff(target_height))
}

/// Selects the best-fitting supported size for `target`, using the default
/// aspect tolerance. Returns `None` only when `candidates` is empty.
pub fn select_optimal(candidates: &[Resolution], target: Target) -> Option<Resolution> {
    Selector::default().select(candidates, target).copied()
}

/// Like [`select_optimal`], reporting an empty candidate set as an error.
pub fn try_select_optimal(candidates: &[Resolution], target: Target) -> Result<Resolution, CameraError> {
    select_optimal(candidates, target).ok_or(CameraError::NoCandidateAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(list: &[(u32, u32)]) -> Vec<Resolution> {
        list.iter().copied().map(Resolution::from).collect()
    }

    fn target(w: u32, h: u32) -> Target {
        Target::new(w, h).unwrap()
    }

    #[test]
    fn falls_back_to_nearest_height_when_no_ratio_matches() {
        let candidates = sizes(&[(640, 480), (1280, 720), (1920, 1080)]);
        assert_eq!(
            select_optimal(&candidates, target(720, 1280)),
            Some(Resolution::new(1920, 1080))
        );
    }

    #[test]
    fn prefers_nearest_height_among_matching_ratios() {
        let candidates = sizes(&[(320, 240), (640, 480)]);
        assert_eq!(
            select_optimal(&candidates, target(400, 300)),
            Some(Resolution::new(320, 240))
        );
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        assert_eq!(select_optimal(&[], target(400, 300)), None);
        assert!(matches!(
            try_select_optimal(&[], target(1, 1)),
            Err(CameraError::NoCandidateAvailable)
        ));
    }

    #[test]
    fn matching_ratio_beats_closer_height() {
        // 1280x720 has the exact height but the wrong ratio.
        let candidates = sizes(&[(1280, 720), (800, 600)]);
        assert_eq!(
            select_optimal(&candidates, target(960, 720)),
            Some(Resolution::new(800, 600))
        );
    }

    #[test]
    fn first_candidate_wins_ties() {
        let candidates = sizes(&[(640, 500), (640, 400), (700, 500)]);
        assert_eq!(
            select_optimal(&candidates, target(640, 450)),
            Some(Resolution::new(640, 500))
        );

        let candidates = sizes(&[(100, 900), (200, 1100)]);
        assert_eq!(
            select_optimal(&candidates, target(1000, 1000)),
            Some(Resolution::new(100, 900))
        );
    }

    #[test]
    fn tolerance_boundary_is_inclusive() {
        // 0.2 - 0.1 is exactly 0.1, so 10x2 sits on the boundary. Excluding
        // it would hand the fallback pass to 1x1, which is nearer in height.
        let candidates = sizes(&[(10, 2), (1, 1)]);
        assert_eq!(
            select_optimal(&candidates, target(10, 1)),
            Some(Resolution::new(10, 2))
        );
    }

    #[test]
    fn zero_width_candidates_never_aspect_match() {
        let candidates = sizes(&[(0, 300), (400, 200)]);
        // Only the fallback pass can see the zero-width entry.
        assert_eq!(
            select_optimal(&candidates, target(400, 300)),
            Some(Resolution::new(0, 300))
        );
        let candidates = sizes(&[(0, 300), (400, 290)]);
        assert_eq!(
            select_optimal(&candidates, target(400, 300)),
            Some(Resolution::new(400, 290))
        );
    }

    #[test]
    fn target_rejects_zero_width() {
        assert!(matches!(Target::new(0, 10), Err(CameraError::InvalidTarget(_))));
        assert!(Target::try_from(Resolution::new(0, 10)).is_err());
        assert_eq!(Target::new(10, 0).unwrap().ratio(), 0.0);
    }

    #[test]
    fn parses_and_displays_sizes() {
        let size: Resolution = " 1920x1080 ".parse().unwrap();
        assert_eq!(size, Resolution::new(1920, 1080));
        assert_eq!(size.to_string(), "1920x1080");
        assert_eq!("640×480".parse::<Resolution>().unwrap(), Resolution::new(640, 480));
        assert!("640".parse::<Resolution>().is_err());
        assert!("0x480".parse::<Resolution>().is_err());
        assert!("wide x tall".parse::<Resolution>().is_err());
    }
}
