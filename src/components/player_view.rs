use crate::model::PlayerConfig;
use crate::playlist::parse_m3u;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerViewProps {
    pub config: PlayerConfig,
}

// Renders the video and its control bar. Behaviour is attached afterwards by
// the binder, which finds these elements through the configured ids.
#[function_component(PlayerView)]
pub fn player_view(props: &PlayerViewProps) -> Html {
    let ids = &props.config.ids;
    let playlist = use_memo(props.config.playlist.clone(), |text| {
        text.as_deref().map(parse_m3u).unwrap_or_default()
    });
    let source = use_state(|| props.config.source.clone());
    let src = (*source).clone().map(AttrValue::from);

    let on_channel = {
        let source = source.clone();
        Callback::from(move |e: Event| {
            let url = e.target_unchecked_into::<HtmlSelectElement>().value();
            source.set((!url.is_empty()).then_some(url));
        })
    };
    let channel_picker = if playlist.is_empty() {
        html! {}
    } else {
        html! {<select id="channelSelect" onchange={on_channel} style="max-width:240px;">
            <option value="">{"Channels"}</option>
            { for playlist.categories.iter().map(|cat| html! {
                <optgroup label={cat.name.clone()}>
                    { for cat.channels.iter().map(|ch| html! {
                        <option value={ch.url.clone()}>{ ch.name.clone() }</option>
                    }) }
                </optgroup>
            }) }
        </select>}
    };
    let options = props
        .config
        .qualities
        .iter()
        .map(|q| html! { <option value={q.clone()}>{ q.clone() }</option> })
        .collect::<Html>();

    html! {<div style="position:relative; width:100%; max-width:960px; margin:0 auto; background:#000; border:1px solid #30363d; border-radius:8px; overflow:hidden;">
        <video id={ids.media.clone()} src={src} preload="auto" style="display:block; width:100%; background:#000;"></video>
        <div style="display:flex; gap:6px; align-items:center; padding:8px; background:rgba(22,27,34,0.9); border-top:1px solid #30363d;">
            <button id={ids.mute_button.clone()} title="Mute">
                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"></svg>
            </button>
            { channel_picker }
            <span style="flex:1;"></span>
            <div style="position:relative;">
                <button id={ids.quality_button.clone()} title="Quality">{"HD"}</button>
                <select id={ids.quality_select.clone()} style="position:absolute; right:0; bottom:36px;">
                    { options }
                </select>
            </div>
            <button id={ids.fullscreen_button.clone()} title="Fullscreen">{"⛶"}</button>
        </div>
    </div>}
}
