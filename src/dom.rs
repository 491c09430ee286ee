// web-sys implementations of the control surface, plus element lookup.

use crate::controls::{
    BoundControls, ControlElements, DiagnosticSink, EventSource, FullscreenError, FullscreenHost,
    Handler, IconButton, MediaSurface, PlayerControls, QualitySwitcher, SelectControl,
    Subscription,
};
use crate::model::{ControlEvent, ControlIds};
use crate::util::{cerror, clog};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlMediaElement, HtmlSelectElement};

fn listen(target: &EventTarget, event: ControlEvent, mut handler: Handler) -> Subscription {
    let cb = Closure::wrap(Box::new(move |_e: web_sys::Event| handler()) as Box<dyn FnMut(_)>);
    if let Err(err) =
        target.add_event_listener_with_callback(event.as_str(), cb.as_ref().unchecked_ref())
    {
        cerror(&format!(
            "could not attach {} listener: {}",
            event.as_str(),
            describe_js_error(&err)
        ));
        return Subscription::noop();
    }
    let target = target.clone();
    Subscription::new(move || {
        let _ = target
            .remove_event_listener_with_callback(event.as_str(), cb.as_ref().unchecked_ref());
        drop(cb);
    })
}

/// Best-effort text for a thrown JS value: its `message`, or the value itself.
fn describe_js_error(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

// web-sys binds requestFullscreen() as returning nothing, so call it by name
// to get hold of the promise.
fn fullscreen_promise(element: &Element) -> Result<js_sys::Promise, FullscreenError> {
    let request = js_sys::Reflect::get(element, &JsValue::from_str("requestFullscreen"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or_else(|| {
            FullscreenError::Unavailable("requestFullscreen is not supported".to_string())
        })?;
    let result = request
        .call0(element)
        .map_err(|err| FullscreenError::Unavailable(describe_js_error(&err)))?;
    // Engines predating the promise-based API return undefined.
    Ok(result
        .dyn_into::<js_sys::Promise>()
        .unwrap_or_else(|_| js_sys::Promise::resolve(&JsValue::UNDEFINED)))
}

pub struct DomMedia(pub HtmlMediaElement);

impl MediaSurface for DomMedia {
    fn muted(&self) -> bool {
        self.0.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.0.set_muted(muted);
    }

    fn current_time(&self) -> f64 {
        self.0.current_time()
    }

    fn set_current_time(&self, secs: f64) {
        self.0.set_current_time(secs);
    }

    fn request_fullscreen(&self, on_rejected: Box<dyn FnOnce(FullscreenError)>) {
        match fullscreen_promise(self.0.as_ref()) {
            Ok(promise) => spawn_local(async move {
                if let Err(reason) = JsFuture::from(promise).await {
                    on_rejected(FullscreenError::Rejected(describe_js_error(&reason)));
                }
            }),
            Err(err) => on_rejected(err),
        }
    }
}

pub struct DomDocument(pub Document);

impl FullscreenHost for DomDocument {
    fn has_fullscreen_element(&self) -> bool {
        self.0.fullscreen_element().is_some()
    }

    fn exit_fullscreen(&self) {
        self.0.exit_fullscreen();
    }
}

pub struct DomButton(pub HtmlElement);

impl EventSource for DomButton {
    fn subscribe(&self, event: ControlEvent, handler: Handler) -> Subscription {
        listen(self.0.as_ref(), event, handler)
    }
}

impl IconButton for DomButton {
    fn set_icon_markup(&self, markup: &str) {
        if let Ok(Some(svg)) = self.0.query_selector("svg") {
            svg.set_inner_html(markup);
        }
    }
}

pub struct DomSelect(pub HtmlSelectElement);

impl EventSource for DomSelect {
    fn subscribe(&self, event: ControlEvent, handler: Handler) -> Subscription {
        listen(self.0.as_ref(), event, handler)
    }
}

impl SelectControl for DomSelect {
    fn is_hidden(&self) -> bool {
        self.0
            .style()
            .get_property_value("display")
            .map(|d| d == "none")
            .unwrap_or(false)
    }

    fn set_hidden(&self, hidden: bool) {
        let display = if hidden { "none" } else { "block" };
        let _ = self.0.style().set_property("display", display);
    }

    fn value(&self) -> String {
        self.0.value()
    }
}

pub struct ConsoleDiagnostics;

impl DiagnosticSink for ConsoleDiagnostics {
    fn info(&self, msg: &str) {
        clog(msg);
    }

    fn error(&self, msg: &str) {
        cerror(msg);
    }
}

fn find<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Looks up the control elements by id. Missing elements, and elements of the
/// wrong kind, come back as `None`.
pub fn lookup_elements(document: &Document, ids: &ControlIds) -> ControlElements {
    let button = |id: &str| find::<HtmlElement>(document, id).map(DomButton);
    ControlElements {
        media: find::<HtmlMediaElement>(document, &ids.media)
            .map(|m| Rc::new(DomMedia(m)) as Rc<dyn MediaSurface>),
        mute_button: button(&ids.mute_button).map(|b| Rc::new(b) as Rc<dyn IconButton>),
        fullscreen_button: button(&ids.fullscreen_button)
            .map(|b| Rc::new(b) as Rc<dyn EventSource>),
        quality_button: button(&ids.quality_button).map(|b| Rc::new(b) as Rc<dyn EventSource>),
        quality_select: find::<HtmlSelectElement>(document, &ids.quality_select)
            .map(|s| Rc::new(DomSelect(s)) as Rc<dyn SelectControl>),
    }
}

/// Binds the player controls found in `document`, logging to the console.
pub fn bind_document(
    document: &Document,
    ids: &ControlIds,
    switcher: Rc<dyn QualitySwitcher>,
) -> BoundControls {
    let controls = PlayerControls::new(
        Rc::new(DomDocument(document.clone())),
        Rc::new(ConsoleDiagnostics),
    )
    .with_switcher(switcher);
    let bound = controls.bind(lookup_elements(document, ids));
    clog(&format!("player controls bound: {:?}", bound.bindings()));
    bound
}
