use std::sync::Arc;

use druid::{Data, Lens};
use serde::Deserialize;
use url::Url;

/// Image URL candidates carried by a display item. Upstream records are
/// inconsistent about which field they fill in, so all three are optional and
/// any subset may be present on any item kind.
#[derive(Clone, Debug, Default, Data, Lens, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverArt {
    #[serde(default)]
    pub cover_img_url: Option<Arc<str>>,
    #[serde(default)]
    pub pic_url: Option<Arc<str>>,
    #[serde(default, rename = "img1v1Url")]
    pub img1v1_url: Option<Arc<str>>,
}

impl CoverArt {
    /// The first non-empty candidate, in precedence order: cover image,
    /// picture URL, portrait URL.
    pub fn primary(&self) -> Option<&str> {
        [&self.cover_img_url, &self.pic_url, &self.img1v1_url]
            .into_iter()
            .flatten()
            .map(|url| url.as_ref())
            .find(|url| !url.is_empty())
    }
}

/// Size buckets understood by the upstream image CDN.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SizeClass {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl SizeClass {
    pub fn pixels(self) -> u32 {
        match self {
            Self::Xs => 128,
            Self::Sm => 256,
            Self::Md => 512,
            Self::Lg => 1024,
            Self::Xl => 1920,
        }
    }
}

/// Rewrites `url` to request a square rendition in the given size bucket,
/// using the CDN's `?param=NxN` convention. Empty input stays empty, and a
/// URL we cannot parse is passed through untouched.
pub fn resize_image(url: &str, size: SizeClass) -> String {
    if url.is_empty() {
        return String::new();
    }
    match Url::parse(url) {
        Ok(mut parsed) => {
            let pixels = size.pixels();
            parsed.set_query(Some(&format!("param={}y{}", pixels, pixels)));
            parsed.into()
        }
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(cover: Option<&str>, pic: Option<&str>, portrait: Option<&str>) -> CoverArt {
        CoverArt {
            cover_img_url: cover.map(Into::into),
            pic_url: pic.map(Into::into),
            img1v1_url: portrait.map(Into::into),
        }
    }

    #[test]
    fn primary_prefers_cover_image() {
        let all = art(Some("a"), Some("b"), Some("c"));
        assert_eq!(all.primary(), Some("a"));
    }

    #[test]
    fn primary_falls_through_empty_candidates() {
        assert_eq!(art(None, Some("b"), Some("c")).primary(), Some("b"));
        assert_eq!(art(Some(""), None, Some("c")).primary(), Some("c"));
        assert_eq!(art(None, None, None).primary(), None);
    }

    #[test]
    fn resize_appends_size_bucket() {
        assert_eq!(
            resize_image("https://p1.music.126.net/abc.jpg", SizeClass::Md),
            "https://p1.music.126.net/abc.jpg?param=512y512"
        );
    }

    #[test]
    fn resize_replaces_existing_query() {
        assert_eq!(
            resize_image("https://p1.music.126.net/abc.jpg?param=64y64", SizeClass::Lg),
            "https://p1.music.126.net/abc.jpg?param=1024y1024"
        );
    }

    #[test]
    fn resize_of_empty_is_empty() {
        assert_eq!(resize_image("", SizeClass::Md), "");
    }
}
