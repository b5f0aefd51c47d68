use std::sync::Arc;

use druid::{im::Vector, Data, Lens};
use serde::Deserialize;
use time::{macros::format_description, OffsetDateTime};

use crate::data::{ArtistLink, CoverArt};

/// Content-advisory marker value upstream sets on explicit albums.
pub const EXPLICIT_MARK: i64 = 1_056_768;

#[derive(Clone, Debug, Data, Lens, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: u64,
    pub name: Arc<str>,
    #[serde(flatten)]
    pub art: CoverArt,
    /// Release timestamp in milliseconds since the Unix epoch. Zero and
    /// absent both mean "unknown".
    #[serde(default)]
    pub publish_time: Option<i64>,
    #[serde(default, rename = "type")]
    pub album_type: Option<TypeCode>,
    #[serde(default)]
    pub mark: i64,
    #[serde(default)]
    pub artist: Option<ArtistLink>,
    #[serde(default)]
    pub artists: Vector<ArtistLink>,
}

impl Album {
    pub fn link(&self) -> AlbumLink {
        AlbumLink {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn is_explicit(&self) -> bool {
        self.mark == EXPLICIT_MARK
    }

    /// The display name of the album's main artist, preferring the single
    /// artist field over the head of the artists list.
    pub fn artist_name(&self) -> Option<Arc<str>> {
        self.artist
            .as_ref()
            .or_else(|| self.artists.front())
            .map(|link| link.name.clone())
    }

    /// UTC calendar year of the release, or `None` when the timestamp is
    /// missing, zero, or out of range.
    pub fn release_year(&self) -> Option<String> {
        let millis = self.publish_time.filter(|&millis| millis != 0)?;
        let date = OffsetDateTime::from_unix_timestamp(millis / 1000).ok()?;
        date.format(format_description!("[year]")).ok()
    }

    pub fn type_label(&self) -> &'static str {
        self.album_type
            .as_ref()
            .map(TypeCode::label)
            .unwrap_or("unknown")
    }
}

#[derive(Clone, Debug, Data, Lens, Eq, PartialEq, Hash, Deserialize)]
pub struct AlbumLink {
    pub id: u64,
    pub name: Arc<str>,
}

/// Raw `type` code of an album. Upstream sends either a string code or a
/// bare number; numbers carry no display meaning.
#[derive(Clone, Debug, Data, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeCode {
    Name(Arc<str>),
    Numeric(i64),
}

impl TypeCode {
    /// Display label for a raw type code. The `"album"` and `"专辑"` keys
    /// both occur in upstream data and intentionally stay separate entries.
    /// Anything not listed here, including every numeric code, is "unknown".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name(code) => match code.as_ref() {
                "playlist" => "playlist",
                "album" => "Album",
                "专辑" => "Album",
                "Single" => "Single",
                "EP/Single" => "EP",
                "EP" => "EP",
                "精选集" => "Collection",
                _ => "unknown",
            },
            Self::Numeric(_) => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(publish_time: Option<i64>, album_type: Option<TypeCode>) -> Album {
        Album {
            id: 1,
            name: "Test".into(),
            art: CoverArt::default(),
            publish_time,
            album_type,
            mark: 0,
            artist: None,
            artists: Vector::new(),
        }
    }

    #[test]
    fn release_year_of_valid_timestamp() {
        // 2020-01-01T00:00:00Z
        let album = album(Some(1_577_836_800_000), None);
        assert_eq!(album.release_year().as_deref(), Some("2020"));
    }

    #[test]
    fn release_year_of_zero_or_absent_is_unknown() {
        assert_eq!(album(Some(0), None).release_year(), None);
        assert_eq!(album(None, None).release_year(), None);
    }

    #[test]
    fn type_code_labels() {
        assert_eq!(TypeCode::Name("EP/Single".into()).label(), "EP");
        assert_eq!(TypeCode::Name("album".into()).label(), "Album");
        assert_eq!(TypeCode::Name("专辑".into()).label(), "Album");
        assert_eq!(TypeCode::Name("精选集".into()).label(), "Collection");
        assert_eq!(TypeCode::Name("mixtape".into()).label(), "unknown");
        assert_eq!(TypeCode::Numeric(10).label(), "unknown");
    }

    #[test]
    fn explicit_mark_is_exact() {
        let mut explicit = album(None, None);
        explicit.mark = EXPLICIT_MARK;
        assert!(explicit.is_explicit());
        explicit.mark = 1;
        assert!(!explicit.is_explicit());
    }

    #[test]
    fn artist_name_prefers_single_artist_field() {
        let mut album = album(None, None);
        album.artists.push_back(ArtistLink {
            id: 2,
            name: "From List".into(),
        });
        assert_eq!(album.artist_name().as_deref(), Some("From List"));

        album.artist = Some(ArtistLink {
            id: 3,
            name: "Single Field".into(),
        });
        assert_eq!(album.artist_name().as_deref(), Some("Single Field"));
    }

    #[test]
    fn deserializes_upstream_shape() {
        let album: Album = serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "OK Computer",
            "picUrl": "https://p1.music.126.net/ok.jpg",
            "publishTime": 1_577_836_800_000_i64,
            "type": "专辑",
            "mark": EXPLICIT_MARK,
            "artists": [{ "id": 7, "name": "Radiohead" }],
        }))
        .unwrap();
        assert_eq!(album.id, 42);
        assert_eq!(album.art.primary(), Some("https://p1.music.126.net/ok.jpg"));
        assert_eq!(album.type_label(), "Album");
        assert!(album.is_explicit());
        assert_eq!(album.artist_name().as_deref(), Some("Radiohead"));
    }
}
