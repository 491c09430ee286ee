pub mod binder;
pub mod quality;
pub mod surface;
#[cfg(test)]
pub mod testing;

pub use binder::{BoundControls, ControlElements, PlayerControls};
pub use quality::{KeepSource, QualitySwitcher};
pub use surface::{
    DiagnosticSink, EventSource, FullscreenError, FullscreenHost, Handler, IconButton,
    MediaSurface, SelectControl, Subscription,
};
