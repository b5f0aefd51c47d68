use std::sync::Arc;

use druid::{im::Vector, Data, Lens};

use crate::data::{resize_image, Album, Artist, CoverArt, Nav, Playlist, SizeClass};

/// One record to render as a cover tile. Every tile handles all three
/// kinds, so a grid renders correctly even when its items are mixed.
#[derive(Clone, Debug, Data)]
pub enum CoverItem {
    Album(Album),
    Playlist(Playlist),
    Artist(Artist),
}

impl CoverItem {
    pub fn id(&self) -> u64 {
        match self {
            Self::Album(album) => album.id,
            Self::Playlist(playlist) => playlist.id,
            Self::Artist(artist) => artist.id,
        }
    }

    pub fn name(&self) -> Arc<str> {
        match self {
            Self::Album(album) => album.name.clone(),
            Self::Playlist(playlist) => playlist.name.clone(),
            Self::Artist(artist) => artist.name.clone(),
        }
    }

    pub fn art(&self) -> &CoverArt {
        match self {
            Self::Album(album) => &album.art,
            Self::Playlist(playlist) => &playlist.art,
            Self::Artist(artist) => &artist.art,
        }
    }

    /// Medium-size rendition of the preferred cover candidate. Empty when
    /// the item carries no image at all.
    pub fn image_url(&self) -> String {
        resize_image(self.art().primary().unwrap_or(""), SizeClass::Md)
    }

    pub fn nav(&self) -> Nav {
        match self {
            Self::Album(album) => Nav::AlbumDetail(album.link()),
            Self::Playlist(playlist) => Nav::PlaylistDetail(playlist.link()),
            Self::Artist(artist) => Nav::ArtistDetail(artist.link()),
        }
    }

    pub fn is_artist(&self) -> bool {
        matches!(self, Self::Artist(_))
    }

    pub fn is_private_playlist(&self) -> bool {
        matches!(self, Self::Playlist(playlist) if playlist.is_private())
    }

    pub fn is_explicit_album(&self) -> bool {
        matches!(self, Self::Album(album) if album.is_explicit())
    }

    /// Secondary text line under the item name. Missing data degrades to a
    /// fixed fallback, never to an error.
    pub fn subtitle(&self, kind: SubtitleKind) -> String {
        match kind {
            SubtitleKind::Creator => {
                let nickname = self.creator_name();
                format!("by {}", nickname.as_deref().unwrap_or("someone"))
            }
            SubtitleKind::Artist => self
                .artist_name()
                .map(|name| name.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            SubtitleKind::Copywriter => self
                .copywriter()
                .map(|text| text.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            SubtitleKind::TypeReleaseYear => {
                let year = self.release_year();
                format!(
                    "{} · {}",
                    self.type_label(),
                    year.as_deref().unwrap_or("unknown")
                )
            }
        }
    }

    fn creator_name(&self) -> Option<Arc<str>> {
        match self {
            Self::Playlist(playlist) => playlist.creator_name(),
            _ => None,
        }
    }

    fn artist_name(&self) -> Option<Arc<str>> {
        match self {
            Self::Album(album) => album.artist_name(),
            _ => None,
        }
    }

    fn copywriter(&self) -> Option<Arc<str>> {
        match self {
            Self::Playlist(playlist) => playlist.copywriter.clone(),
            _ => None,
        }
    }

    fn release_year(&self) -> Option<String> {
        match self {
            Self::Album(album) => album.release_year(),
            _ => None,
        }
    }

    fn type_label(&self) -> &'static str {
        match self {
            Self::Album(album) => album.type_label(),
            _ => "unknown",
        }
    }
}

/// Which derivation rule produces the subtitle line.
#[derive(Copy, Clone, Debug, Data, Eq, PartialEq)]
pub enum SubtitleKind {
    Copywriter,
    Creator,
    TypeReleaseYear,
    Artist,
}

impl Default for SubtitleKind {
    fn default() -> Self {
        Self::Copywriter
    }
}

/// Input of the grid renderer: the item collection plus the externally
/// owned loading flag. The constructors below build single-kind grids,
/// which is the usual shape, but `items` is open and a mixed collection
/// renders fine since each tile carries its own kind.
#[derive(Clone, Debug, Data, Lens)]
pub struct CoverGridData {
    pub items: Vector<CoverItem>,
    pub is_loading: bool,
}

impl CoverGridData {
    pub fn albums(albums: Vector<Album>) -> Self {
        Self {
            items: albums.into_iter().map(CoverItem::Album).collect(),
            is_loading: false,
        }
    }

    pub fn playlists(playlists: Vector<Playlist>) -> Self {
        Self {
            items: playlists.into_iter().map(CoverItem::Playlist).collect(),
            is_loading: false,
        }
    }

    pub fn artists(artists: Vector<Artist>) -> Self {
        Self {
            items: artists.into_iter().map(CoverItem::Artist).collect(),
            is_loading: false,
        }
    }

    pub fn loading() -> Self {
        Self {
            items: Vector::new(),
            is_loading: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ArtistLink, Creator, TypeCode};

    fn album() -> Album {
        Album {
            id: 42,
            name: "In Rainbows".into(),
            art: CoverArt::default(),
            publish_time: None,
            album_type: None,
            mark: 0,
            artist: None,
            artists: Vector::new(),
        }
    }

    fn playlist() -> Playlist {
        Playlist {
            id: 7,
            name: "Daily Mix".into(),
            art: CoverArt::default(),
            creator: None,
            copywriter: None,
            privacy: 0,
        }
    }

    fn artist() -> Artist {
        Artist {
            id: 3,
            name: "Radiohead".into(),
            art: CoverArt::default(),
        }
    }

    #[test]
    fn creator_subtitle_falls_back_to_someone() {
        let item = CoverItem::Playlist(playlist());
        assert_eq!(item.subtitle(SubtitleKind::Creator), "by someone");

        let mut named = playlist();
        named.creator = Some(Creator {
            nickname: "annie".into(),
        });
        let item = CoverItem::Playlist(named);
        assert_eq!(item.subtitle(SubtitleKind::Creator), "by annie");
    }

    #[test]
    fn artist_subtitle_precedence() {
        let mut with_list = album();
        with_list.artists.push_back(ArtistLink {
            id: 1,
            name: "First".into(),
        });
        with_list.artists.push_back(ArtistLink {
            id: 2,
            name: "Second".into(),
        });
        assert_eq!(
            CoverItem::Album(with_list.clone()).subtitle(SubtitleKind::Artist),
            "First"
        );

        with_list.artist = Some(ArtistLink {
            id: 3,
            name: "Main".into(),
        });
        assert_eq!(
            CoverItem::Album(with_list).subtitle(SubtitleKind::Artist),
            "Main"
        );

        assert_eq!(
            CoverItem::Album(album()).subtitle(SubtitleKind::Artist),
            "unknown"
        );
    }

    #[test]
    fn copywriter_subtitle_falls_back_to_unknown() {
        assert_eq!(
            CoverItem::Playlist(playlist()).subtitle(SubtitleKind::Copywriter),
            "unknown"
        );
        let mut described = playlist();
        described.copywriter = Some("Fresh picks".into());
        assert_eq!(
            CoverItem::Playlist(described).subtitle(SubtitleKind::Copywriter),
            "Fresh picks"
        );
    }

    #[test]
    fn type_year_subtitle() {
        let mut released = album();
        released.album_type = Some(TypeCode::Name("EP/Single".into()));
        released.publish_time = Some(1_577_836_800_000); // 2020-01-01T00:00:00Z
        assert_eq!(
            CoverItem::Album(released).subtitle(SubtitleKind::TypeReleaseYear),
            "EP · 2020"
        );

        let mut unreleased = album();
        unreleased.album_type = Some(TypeCode::Numeric(4));
        unreleased.publish_time = Some(0);
        assert_eq!(
            CoverItem::Album(unreleased).subtitle(SubtitleKind::TypeReleaseYear),
            "unknown · unknown"
        );
    }

    #[test]
    fn only_artist_items_suppress_the_subtitle_line() {
        // The grid hides the secondary line for exactly the items where
        // this predicate holds, regardless of the configured kind.
        assert!(CoverItem::Artist(artist()).is_artist());
        assert!(!CoverItem::Album(album()).is_artist());
        assert!(!CoverItem::Playlist(playlist()).is_artist());
    }

    #[test]
    fn item_navigation_targets() {
        assert_eq!(CoverItem::Album(album()).nav().route(), "/album/42");
        assert_eq!(CoverItem::Playlist(playlist()).nav().route(), "/playlist/7");
        assert_eq!(CoverItem::Artist(artist()).nav().route(), "/artist/3");
    }

    #[test]
    fn grid_data_constructors_tag_items() {
        let albums = CoverGridData::albums(Vector::from(vec![album()]));
        assert!(matches!(albums.items[0], CoverItem::Album(_)));
        assert!(!albums.is_loading);

        let loading = CoverGridData::loading();
        assert!(loading.is_loading);
        assert!(loading.items.is_empty());
    }
}
