use super::quality::{KeepSource, QualitySwitcher};
use super::surface::{
    DiagnosticSink, EventSource, FullscreenHost, IconButton, MediaSurface, SelectControl,
    Subscription,
};
use crate::model::{Binding, ControlEvent, mute_icon};
use crate::util::format_position;
use std::rc::Rc;

/// Elements found on the page. Any of them may be missing.
#[derive(Clone, Default)]
pub struct ControlElements {
    pub media: Option<Rc<dyn MediaSurface>>,
    pub mute_button: Option<Rc<dyn IconButton>>,
    pub fullscreen_button: Option<Rc<dyn EventSource>>,
    pub quality_button: Option<Rc<dyn EventSource>>,
    pub quality_select: Option<Rc<dyn SelectControl>>,
}

/// Wires the player's control bar to its media element.
pub struct PlayerControls {
    host: Rc<dyn FullscreenHost>,
    diagnostics: Rc<dyn DiagnosticSink>,
    switcher: Rc<dyn QualitySwitcher>,
}

/// Listeners attached by [`PlayerControls::bind`]; dropping this detaches them all.
#[must_use = "dropping BoundControls detaches every listener"]
#[derive(Debug)]
pub struct BoundControls {
    bindings: Vec<Binding>,
    _subscriptions: Vec<Subscription>,
}

impl BoundControls {
    fn push(&mut self, binding: Binding, sub: Subscription) {
        self.bindings.push(binding);
        self._subscriptions.push(sub);
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn is_bound(&self, binding: Binding) -> bool {
        self.bindings.contains(&binding)
    }
}

impl PlayerControls {
    pub fn new(host: Rc<dyn FullscreenHost>, diagnostics: Rc<dyn DiagnosticSink>) -> Self {
        Self {
            host,
            diagnostics,
            switcher: Rc::new(KeepSource),
        }
    }

    pub fn with_switcher(mut self, switcher: Rc<dyn QualitySwitcher>) -> Self {
        self.switcher = switcher;
        self
    }

    /// Attaches every binding whose elements are present. Bindings are
    /// independent: a missing element only disables the ones that need it.
    pub fn bind(&self, elements: ControlElements) -> BoundControls {
        let mut bound = BoundControls {
            bindings: Vec::new(),
            _subscriptions: Vec::new(),
        };
        let ControlElements {
            media,
            mute_button,
            fullscreen_button,
            quality_button,
            quality_select,
        } = elements;

        if let (Some(media), Some(button)) = (media.clone(), mute_button) {
            button.set_icon_markup(mute_icon(media.muted()));
            let target = button.clone();
            let sub = button.subscribe(
                ControlEvent::Click,
                Box::new(move || {
                    toggle_mute(&*media, &*target);
                }),
            );
            bound.push(Binding::Mute, sub);
        }

        if let (Some(media), Some(button)) = (media.clone(), fullscreen_button) {
            let host = self.host.clone();
            let diagnostics = self.diagnostics.clone();
            let sub = button.subscribe(
                ControlEvent::Click,
                Box::new(move || toggle_fullscreen(&*host, &*media, diagnostics.clone())),
            );
            bound.push(Binding::Fullscreen, sub);
        }

        if let (Some(button), Some(select)) = (quality_button, quality_select) {
            let menu = select.clone();
            let sub = button.subscribe(
                ControlEvent::Click,
                Box::new(move || {
                    toggle_quality_menu(&*menu);
                }),
            );
            bound.push(Binding::QualityMenu, sub);

            let switcher = self.switcher.clone();
            let diagnostics = self.diagnostics.clone();
            let target = select.clone();
            let sub = select.subscribe(
                ControlEvent::Change,
                Box::new(move || {
                    apply_quality_change(media.as_deref(), &*target, &*switcher, &*diagnostics)
                }),
            );
            bound.push(Binding::QualityChange, sub);

            select.set_hidden(true);
        }

        for binding in Binding::ALL {
            if !bound.is_bound(binding) {
                self.diagnostics.info(&format!(
                    "player controls: {} not bound, element missing",
                    binding.label()
                ));
            }
        }
        bound
    }
}

/// Flips the muted flag and swaps the button icon. Returns the new muted state.
pub fn toggle_mute(media: &dyn MediaSurface, button: &dyn IconButton) -> bool {
    let muted = !media.muted();
    media.set_muted(muted);
    button.set_icon_markup(mute_icon(muted));
    muted
}

/// Leaves fullscreen if something is fullscreen, otherwise asks for it on `media`.
pub fn toggle_fullscreen(
    host: &dyn FullscreenHost,
    media: &dyn MediaSurface,
    diagnostics: Rc<dyn DiagnosticSink>,
) {
    if host.has_fullscreen_element() {
        host.exit_fullscreen();
    } else {
        media.request_fullscreen(Box::new(move |err| {
            diagnostics.error(&format!("failed to enter fullscreen mode: {err}"));
        }));
    }
}

/// Shows a hidden quality menu, hides a visible one. Returns the new hidden state.
pub fn toggle_quality_menu(select: &dyn SelectControl) -> bool {
    let hidden = !select.is_hidden();
    select.set_hidden(hidden);
    hidden
}

pub fn apply_quality_change(
    media: Option<&dyn MediaSurface>,
    select: &dyn SelectControl,
    switcher: &dyn QualitySwitcher,
    diagnostics: &dyn DiagnosticSink,
) {
    let position = media.map(|m| m.current_time());
    let quality = select.value();
    match position {
        Some(pos) => diagnostics.info(&format!(
            "quality changed to: {quality} (at {})",
            format_position(pos)
        )),
        None => diagnostics.info(&format!("quality changed to: {quality}")),
    }
    switcher.switch(media, &quality);
    if let (Some(media), Some(pos)) = (media, position) {
        media.set_current_time(pos);
    }
}
