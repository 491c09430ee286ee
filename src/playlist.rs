//! Extended M3U channel lists.
//!
//! Each `#EXTINF:` line names a channel (everything after the first comma) and
//! may carry a `group-title="..."` attribute. The next line that is not a
//! directive is that channel's stream URL.

use regex::Regex;
use std::sync::LazyLock;

/// Group used for entries without a `group-title`.
pub const UNCATEGORIZED: &str = "Без категории";

static GROUP_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"group-title="([^"]+)""#).expect("static regex"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub group: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub channels: Vec<Channel>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Playlist {
    /// All channels in file order.
    pub channels: Vec<Channel>,
    /// Channels grouped by `group-title`, groups in order of first appearance.
    pub categories: Vec<Category>,
}

impl Playlist {
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    fn push(&mut self, channel: Channel) {
        match self.categories.iter_mut().find(|c| c.name == channel.group) {
            Some(category) => category.channels.push(channel.clone()),
            None => self.categories.push(Category {
                name: channel.group.clone(),
                channels: vec![channel.clone()],
            }),
        }
        self.channels.push(channel);
    }
}

pub fn parse_m3u(text: &str) -> Playlist {
    let mut playlist = Playlist::default();
    // (name, group) of the last #EXTINF still waiting for its URL line
    let mut pending: Option<(String, String)> = None;

    for line in text.lines().map(str::trim) {
        if let Some(info) = line.strip_prefix("#EXTINF:") {
            let group = GROUP_TITLE
                .captures(info)
                .map(|c| c[1].to_string())
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            pending = info
                .split_once(',')
                .map(|(_, name)| (name.trim().to_string(), group));
        } else if line.is_empty() || line.starts_with('#') {
            continue;
        } else if let Some((name, group)) = pending.take() {
            playlist.push(Channel {
                name,
                group,
                url: line.to_string(),
            });
        }
    }
    playlist
}
