// In-memory stand-ins for page elements used by the binder tests.

use super::quality::QualitySwitcher;
use super::surface::{
    DiagnosticSink, EventSource, FullscreenError, FullscreenHost, Handler, IconButton,
    MediaSurface, SelectControl, Subscription,
};
use crate::model::ControlEvent;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Listeners = Rc<RefCell<Vec<(u64, ControlEvent, Handler)>>>;

#[derive(Default)]
pub struct FakeListeners {
    next_id: Cell<u64>,
    listeners: Listeners,
}

impl FakeListeners {
    fn subscribe(&self, event: ControlEvent, handler: Handler) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, event, handler));
        let weak = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = weak.upgrade() {
                listeners.borrow_mut().retain(|(lid, _, _)| *lid != id);
            }
        })
    }

    fn fire(&self, event: ControlEvent) {
        let mut listeners = self.listeners.borrow_mut();
        for (_, kind, handler) in listeners.iter_mut() {
            if *kind == event {
                handler();
            }
        }
    }

    pub fn count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

pub struct FakeMedia {
    pub muted: Cell<bool>,
    pub position: Cell<f64>,
    pub fullscreen_requests: Cell<u32>,
    pending: RefCell<Option<Box<dyn FnOnce(FullscreenError)>>>,
}

impl FakeMedia {
    pub fn new(muted: bool, position: f64) -> Rc<Self> {
        Rc::new(Self {
            muted: Cell::new(muted),
            position: Cell::new(position),
            fullscreen_requests: Cell::new(0),
            pending: RefCell::new(None),
        })
    }

    /// Settles the last fullscreen request as rejected.
    pub fn reject_fullscreen(&self, err: FullscreenError) {
        let pending = self.pending.borrow_mut().take();
        if let Some(on_rejected) = pending {
            on_rejected(err);
        }
    }
}

impl MediaSurface for FakeMedia {
    fn muted(&self) -> bool {
        self.muted.get()
    }
    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }
    fn current_time(&self) -> f64 {
        self.position.get()
    }
    fn set_current_time(&self, secs: f64) {
        self.position.set(secs);
    }
    fn request_fullscreen(&self, on_rejected: Box<dyn FnOnce(FullscreenError)>) {
        self.fullscreen_requests.set(self.fullscreen_requests.get() + 1);
        *self.pending.borrow_mut() = Some(on_rejected);
    }
}

#[derive(Default)]
pub struct FakeDocument {
    pub active: Cell<bool>,
    pub exits: Cell<u32>,
}

impl FullscreenHost for FakeDocument {
    fn has_fullscreen_element(&self) -> bool {
        self.active.get()
    }
    fn exit_fullscreen(&self) {
        self.exits.set(self.exits.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeButton {
    pub listeners: FakeListeners,
    pub icon: RefCell<String>,
}

impl FakeButton {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn click(&self) {
        self.listeners.fire(ControlEvent::Click);
    }
}

impl EventSource for FakeButton {
    fn subscribe(&self, event: ControlEvent, handler: Handler) -> Subscription {
        self.listeners.subscribe(event, handler)
    }
}

impl IconButton for FakeButton {
    fn set_icon_markup(&self, markup: &str) {
        *self.icon.borrow_mut() = markup.to_string();
    }
}

pub struct FakeSelect {
    pub listeners: FakeListeners,
    pub hidden: Cell<bool>,
    pub value: RefCell<String>,
}

impl FakeSelect {
    pub fn new(hidden: bool, value: &str) -> Rc<Self> {
        Rc::new(Self {
            listeners: FakeListeners::default(),
            hidden: Cell::new(hidden),
            value: RefCell::new(value.to_string()),
        })
    }

    pub fn choose(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
        self.listeners.fire(ControlEvent::Change);
    }
}

impl EventSource for FakeSelect {
    fn subscribe(&self, event: ControlEvent, handler: Handler) -> Subscription {
        self.listeners.subscribe(event, handler)
    }
}

impl SelectControl for FakeSelect {
    fn is_hidden(&self) -> bool {
        self.hidden.get()
    }
    fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
    }
    fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub infos: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl DiagnosticSink for RecordingSink {
    fn info(&self, msg: &str) {
        self.infos.borrow_mut().push(msg.to_string());
    }
    fn error(&self, msg: &str) {
        self.errors.borrow_mut().push(msg.to_string());
    }
}

/// Moves the media to a fixed position, like a source swap that restarts playback.
pub struct RewindingSwitcher {
    pub seen: RefCell<Vec<String>>,
}

impl QualitySwitcher for RewindingSwitcher {
    fn switch(&self, media: Option<&dyn MediaSurface>, quality: &str) {
        self.seen.borrow_mut().push(quality.to_string());
        if let Some(media) = media {
            media.set_current_time(0.0);
        }
    }
}
