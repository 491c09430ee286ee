//! The page-facing seams the binder is written against.
//!
//! Each trait covers the smallest slice of an element the handlers touch, so
//! the DOM adapters stay thin and tests can drive the binder with plain
//! in-memory fakes.

use crate::model::ControlEvent;
use thiserror::Error;

pub type Handler = Box<dyn FnMut()>;

/// Why a fullscreen request did not go through.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FullscreenError {
    /// The browser rejected the request (permission denied, not allowed here, ...).
    #[error("{0}")]
    Rejected(String),
    /// The request could not be issued at all.
    #[error("{0}")]
    Unavailable(String),
}

/// A live listener registration. Dropping it detaches the listener.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A registration with nothing to undo.
    pub fn noop() -> Self {
        Self { detach: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// The video being controlled.
pub trait MediaSurface {
    fn muted(&self) -> bool;
    fn set_muted(&self, muted: bool);
    /// Playback position in seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&self, secs: f64);
    /// Asks for fullscreen on this element. `on_rejected` runs at most once,
    /// possibly after this call has returned.
    fn request_fullscreen(&self, on_rejected: Box<dyn FnOnce(FullscreenError)>);
}

/// Document-level fullscreen state.
pub trait FullscreenHost {
    fn has_fullscreen_element(&self) -> bool;
    fn exit_fullscreen(&self);
}

pub trait EventSource {
    fn subscribe(&self, event: ControlEvent, handler: Handler) -> Subscription;
}

/// A button whose `svg` child shows the current state.
pub trait IconButton: EventSource {
    fn set_icon_markup(&self, markup: &str);
}

pub trait SelectControl: EventSource {
    fn is_hidden(&self) -> bool;
    fn set_hidden(&self, hidden: bool);
    fn value(&self) -> String;
}

pub trait DiagnosticSink {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
}
