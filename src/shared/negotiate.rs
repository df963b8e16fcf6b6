// This is free and unencumbered software released into the public domain.

use crate::shared::{Resolution, Selector, Target};

/// Preview and picture sizes chosen for one view box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeNegotiation {
    pub preview: Option<Resolution>,
    pub picture: Option<Resolution>,
}

impl Selector {
    /// Picks the preview size against `view`, then the picture size against
    /// the chosen preview so both streams share an aspect ratio.
    pub fn negotiate(
        &self,
        preview_sizes: &[Resolution],
        picture_sizes: &[Resolution],
        view: Target,
    ) -> SizeNegotiation {
        let preview = self.select(preview_sizes, view).copied();
        let picture = preview
            .and_then(|preview| Target::try_from(preview).ok())
            .and_then(|target| self.select(picture_sizes, target).copied());
        SizeNegotiation { preview, picture }
    }
}

pub fn negotiate(
    preview_sizes: &[Resolution],
    picture_sizes: &[Resolution],
    view: Target,
) -> SizeNegotiation {
    Selector::default().negotiate(preview_sizes, picture_sizes, view)
}
