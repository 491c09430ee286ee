use super::surface::MediaSurface;

/// Hook invoked when the viewer picks another quality. Implementations swap
/// the media source; the binder restores the playback position afterwards.
pub trait QualitySwitcher {
    fn switch(&self, media: Option<&dyn MediaSurface>, quality: &str);
}

/// Leaves the current source in place.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepSource;

impl QualitySwitcher for KeepSource {
    fn switch(&self, _media: Option<&dyn MediaSurface>, _quality: &str) {}
}
