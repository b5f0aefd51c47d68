use druid::Selector;

use crate::data::{AlbumLink, Nav, PlaylistLink};

// Navigation

pub const NAVIGATE: Selector<Nav> = Selector::new("app.navigate");
pub const SEE_MORE: Selector<Nav> = Selector::new("app.see-more");
pub const SCROLL_TO_TOP: Selector = Selector::new("app.scroll-to-top");

// Prefetch
//
// Submitted on pointer-over, best effort. Whoever installs the app delegate
// decides how to warm the cache; the grid never looks at the result.

pub const PREFETCH_ALBUM: Selector<AlbumLink> = Selector::new("app.prefetch-album");
pub const PREFETCH_PLAYLIST: Selector<PlaylistLink> = Selector::new("app.prefetch-playlist");
