use std::sync::Arc;

use druid::{Data, Lens};
use serde::Deserialize;

use crate::data::CoverArt;

/// Privacy code upstream sets on playlists hidden from the owner's profile.
pub const PRIVACY_PRIVATE: i64 = 10;

#[derive(Clone, Debug, Data, Lens, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: u64,
    pub name: Arc<str>,
    #[serde(flatten)]
    pub art: CoverArt,
    #[serde(default)]
    pub creator: Option<Creator>,
    #[serde(default)]
    pub copywriter: Option<Arc<str>>,
    #[serde(default)]
    pub privacy: i64,
}

impl Playlist {
    pub fn link(&self) -> PlaylistLink {
        PlaylistLink {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn is_private(&self) -> bool {
        self.privacy == PRIVACY_PRIVATE
    }

    pub fn creator_name(&self) -> Option<Arc<str>> {
        self.creator.as_ref().map(|creator| creator.nickname.clone())
    }
}

#[derive(Clone, Debug, Data, Lens, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub nickname: Arc<str>,
}

#[derive(Clone, Debug, Data, Lens, Eq, PartialEq, Hash, Deserialize)]
pub struct PlaylistLink {
    pub id: u64,
    pub name: Arc<str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_code_is_exact() {
        let mut playlist: Playlist = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Liked",
            "privacy": PRIVACY_PRIVATE,
        }))
        .unwrap();
        assert!(playlist.is_private());
        playlist.privacy = 0;
        assert!(!playlist.is_private());
    }

    #[test]
    fn deserializes_upstream_shape() {
        let playlist: Playlist = serde_json::from_value(serde_json::json!({
            "id": 9,
            "name": "Daily Mix",
            "coverImgUrl": "https://p2.music.126.net/mix.jpg",
            "creator": { "nickname": "annie" },
            "copywriter": "Fresh picks for you",
        }))
        .unwrap();
        assert_eq!(playlist.creator_name().as_deref(), Some("annie"));
        assert_eq!(playlist.copywriter.as_deref(), Some("Fresh picks for you"));
        assert_eq!(
            playlist.art.primary(),
            Some("https://p2.music.126.net/mix.jpg")
        );
        assert!(!playlist.is_private());
    }
}
