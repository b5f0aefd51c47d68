use std::sync::Arc;

use druid::{Data, Lens};
use serde::Deserialize;

use crate::data::CoverArt;

#[derive(Clone, Debug, Data, Lens, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: u64,
    pub name: Arc<str>,
    #[serde(flatten)]
    pub art: CoverArt,
}

impl Artist {
    pub fn link(&self) -> ArtistLink {
        ArtistLink {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, Data, Lens, Eq, PartialEq, Hash, Deserialize)]
pub struct ArtistLink {
    pub id: u64,
    pub name: Arc<str>,
}
