use yew::prelude::*;

mod components;
mod controls;
mod dom;
mod model;
mod playlist;
mod util;

use components::PlayerView;
use controls::KeepSource;
use model::PlayerConfig;
use std::rc::Rc;
use util::cerror;

// Inline `<script id="player-config" type="application/json">` block, if the
// page has one; a `<script id="player-playlist">` M3U block replaces its
// `playlist`, and `?src=` in the page URL wins over its `source`.
fn load_config() -> PlayerConfig {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return PlayerConfig::default();
    };
    let mut config = document
        .get_element_by_id("player-config")
        .and_then(|el| el.text_content())
        .map(|raw| {
            PlayerConfig::from_json(&raw).unwrap_or_else(|err| {
                cerror(&format!("invalid player config, using defaults: {err}"));
                PlayerConfig::default()
            })
        })
        .unwrap_or_default();
    if let Some(m3u) = document
        .get_element_by_id("player-playlist")
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
    {
        config.playlist = Some(m3u);
    }
    if let Some(src) = query_source() {
        config.source = Some(src);
    }
    config
}

fn query_source() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get("src")
        .filter(|s| !s.is_empty())
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());

    {
        // Runs once after the first render, when the player markup is in the DOM.
        let ids = config.ids.clone();
        use_effect_with((), move |_| {
            let bound = web_sys::window()
                .and_then(|w| w.document())
                .map(|document| dom::bind_document(&document, &ids, Rc::new(KeepSource)));
            move || drop(bound)
        });
    }

    html! {
        <div id="root" style="padding:12px;">
            <PlayerView config={(*config).clone()} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
