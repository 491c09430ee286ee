//! Data types shared by the player view and the control binder.

use serde::Deserialize;

/// Icon markup placed inside the mute button's `svg` when the media is muted.
pub const MUTED_ICON: &str = r#"<path d="M13 5v14l-7-7H2V9h4l7-7z"></path><path d="M23 9l-6 6"></path><path d="M17 9l6 6"></path>"#;

/// Icon markup placed inside the mute button's `svg` when sound is on.
pub const UNMUTED_ICON: &str = r#"<path d="M13 5v14l-7-7H2V9h4l7-7z"></path><path d="M18 9a6 6 0 0 1 0 8"></path><path d="M21 7a10 10 0 0 1 0 12"></path>"#;

pub fn mute_icon(muted: bool) -> &'static str {
    if muted { MUTED_ICON } else { UNMUTED_ICON }
}

/// Element identifiers the binder looks up in the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControlIds {
    pub media: String,
    pub mute_button: String,
    pub fullscreen_button: String,
    pub quality_button: String,
    pub quality_select: String,
}

impl Default for ControlIds {
    fn default() -> Self {
        Self {
            media: "videoPlayer".into(),
            mute_button: "muteBtn".into(),
            fullscreen_button: "fullscreenBtn".into(),
            quality_button: "qualityBtn".into(),
            quality_select: "qualitySelect".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub ids: ControlIds,
    /// Values offered by the quality select, in display order.
    pub qualities: Vec<String>,
    /// Stream URL given to the video element; none leaves `src` unset.
    pub source: Option<String>,
    /// Extended M3U text offered through the channel picker.
    pub playlist: Option<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            ids: ControlIds::default(),
            qualities: ["auto", "1080p", "720p", "480p"]
                .iter()
                .map(|q| q.to_string())
                .collect(),
            source: None,
            playlist: None,
        }
    }
}

impl PlayerConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// DOM events the controls listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    Click,
    Change,
}

impl ControlEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlEvent::Click => "click",
            ControlEvent::Change => "change",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    Mute,
    Fullscreen,
    QualityMenu,
    QualityChange,
}

impl Binding {
    pub const ALL: [Binding; 4] = [
        Binding::Mute,
        Binding::Fullscreen,
        Binding::QualityMenu,
        Binding::QualityChange,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Binding::Mute => "mute toggle",
            Binding::Fullscreen => "fullscreen toggle",
            Binding::QualityMenu => "quality menu toggle",
            Binding::QualityChange => "quality selection",
        }
    }
}
