use druid::Data;

use crate::data::{AlbumLink, ArtistLink, PlaylistLink};

#[derive(Clone, Debug, Data, PartialEq, Eq, Hash)]
pub enum Nav {
    Home,
    AlbumDetail(AlbumLink),
    PlaylistDetail(PlaylistLink),
    ArtistDetail(ArtistLink),
}

impl Nav {
    pub fn title(&self) -> String {
        match self {
            Nav::Home => "Home".to_string(),
            Nav::AlbumDetail(link) => link.name.to_string(),
            Nav::PlaylistDetail(link) => link.name.to_string(),
            Nav::ArtistDetail(link) => link.name.to_string(),
        }
    }

    pub fn route(&self) -> String {
        match self {
            Nav::Home => "/".to_string(),
            Nav::AlbumDetail(link) => format!("/album/{}", link.id),
            Nav::PlaylistDetail(link) => format!("/playlist/{}", link.id),
            Nav::ArtistDetail(link) => format!("/artist/{}", link.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_kind_specific() {
        let album = Nav::AlbumDetail(AlbumLink {
            id: 42,
            name: "In Rainbows".into(),
        });
        let playlist = Nav::PlaylistDetail(PlaylistLink {
            id: 7,
            name: "Daily Mix".into(),
        });
        let artist = Nav::ArtistDetail(ArtistLink {
            id: 3,
            name: "Radiohead".into(),
        });
        assert_eq!(album.route(), "/album/42");
        assert_eq!(playlist.route(), "/playlist/7");
        assert_eq!(artist.route(), "/artist/3");
        assert_eq!(Nav::Home.route(), "/");
    }
}
