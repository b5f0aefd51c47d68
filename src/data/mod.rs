pub mod album;
pub mod artist;
pub mod image;
pub mod item;
pub mod nav;
pub mod playlist;

pub use crate::data::{
    album::{Album, AlbumLink, TypeCode},
    artist::{Artist, ArtistLink},
    image::{resize_image, CoverArt, SizeClass},
    item::{CoverGridData, CoverItem, SubtitleKind},
    nav::Nav,
    playlist::{Creator, Playlist, PlaylistLink},
};
