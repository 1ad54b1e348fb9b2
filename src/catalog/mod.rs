//! Static video catalog: categories with their ordered videos.
//!
//! The catalog is loaded once from embedded JSON and never mutated afterwards.
//! Every lookup returns `Option` so a miss is an explicit absent result.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::utils::slugify;

mod models;

pub use models::{Category, Video};

const BUILTIN_CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

static BUILTIN_CATALOG: Lazy<Arc<Catalog>> = Lazy::new(|| {
    match Catalog::from_json(BUILTIN_CATALOG_JSON) {
        Ok(catalog) => {
            tracing::info!(
                categories = catalog.categories.len(),
                videos = catalog.video_count(),
                "loaded built-in catalog"
            );
            Arc::new(catalog)
        }
        Err(err) => {
            tracing::error!(error = %err, "built-in catalog is invalid, starting with an empty catalog");
            Arc::new(Catalog::default())
        }
    }
});

/// Shared handle to the catalog compiled into the binary.
pub fn builtin() -> Arc<Catalog> {
    BUILTIN_CATALOG.clone()
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate category slug `{0}`")]
    DuplicateCategory(String),
    #[error("duplicate video id `{0}`")]
    DuplicateVideoId(String),
    #[error("duplicate video slug `{0}`")]
    DuplicateVideoSlug(String),
    #[error("video in category `{0}` has an empty id")]
    MissingVideoId(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

impl Catalog {
    /// Parses and validates a catalog document.
    ///
    /// Videos inherit the name and slug of the category they are nested under,
    /// and a video without a slug gets one derived from its title.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_categories(file.categories)
    }

    pub fn from_categories(mut categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut category_slugs = HashSet::new();
        let mut video_ids = HashSet::new();
        let mut video_slugs = HashSet::new();

        for category in categories.iter_mut() {
            if category.slug.trim().is_empty() {
                category.slug = slugify(&category.name);
            }
            if !category_slugs.insert(category.slug.clone()) {
                return Err(CatalogError::DuplicateCategory(category.slug.clone()));
            }

            for video in category.videos.iter_mut() {
                if video.id.trim().is_empty() {
                    return Err(CatalogError::MissingVideoId(category.slug.clone()));
                }
                if video.slug.trim().is_empty() {
                    video.slug = derive_slug(video);
                }
                if video.category.trim().is_empty() {
                    video.category = category.name.clone();
                }
                if video.category_slug.trim().is_empty() {
                    video.category_slug = category.slug.clone();
                }

                if !video_ids.insert(video.id.clone()) {
                    return Err(CatalogError::DuplicateVideoId(video.id.clone()));
                }
                if !video_slugs.insert(video.slug.clone()) {
                    return Err(CatalogError::DuplicateVideoSlug(video.slug.clone()));
                }
            }
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All videos in catalog order (category order, then position).
    pub fn all_videos(&self) -> impl Iterator<Item = &Video> {
        self.categories.iter().flat_map(|c| c.videos.iter())
    }

    pub fn video_count(&self) -> usize {
        self.categories.iter().map(|c| c.videos.len()).sum()
    }

    pub fn find_video(&self, id: &str) -> Option<&Video> {
        self.all_videos().find(|v| v.id == id)
    }

    /// Route entry point: the path segment may carry either a slug or an id.
    pub fn find_by_slug_or_id(&self, key: &str) -> Option<&Video> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        self.all_videos()
            .find(|v| v.slug == key)
            .or_else(|| self.find_video(key))
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Resolves the category whose display name matches the one stored on a video.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Category a video belongs to. Matches on slug so two categories sharing
    /// a display name never merge.
    pub fn category_for(&self, video: &Video) -> Option<&Category> {
        self.category_by_slug(&video.category_slug)
    }

    /// Ordered sibling list for a video, including the video itself.
    pub fn siblings(&self, video: &Video) -> &[Video] {
        self.category_for(video)
            .map(|c| c.videos.as_slice())
            .unwrap_or(&[])
    }

    /// The video following `video` in its category, if any.
    pub fn next_after(&self, video: &Video) -> Option<&Video> {
        let siblings = self.siblings(video);
        let index = siblings.iter().position(|v| v.id == video.id)?;
        siblings.get(index + 1)
    }
}

/// Title slug, or the id when the title has nothing slug-safe in it.
fn derive_slug(video: &Video) -> String {
    let from_title = slugify(&video.title);
    if !from_title.is_empty() {
        return from_title;
    }
    let from_id = slugify(&video.id);
    if from_id.is_empty() {
        video.id.trim().to_string()
    } else {
        from_id
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn catalog() -> Catalog {
        let json = serde_json::json!({
            "categories": [
                {
                    "slug": "rust-basics",
                    "name": "Rust Basics",
                    "icon": "crab",
                    "videos": [
                        { "id": "v1", "slug": "ownership", "title": "Ownership", "thumbnail_url": "t1.jpg", "media_url": "https://www.youtube.com/embed/aaa", "duration": "4:10" },
                        { "id": "v2", "slug": "borrowing", "title": "Borrowing", "thumbnail_url": "t2.jpg", "media_url": "https://www.youtube.com/embed/bbb", "duration": "6:02" },
                        { "id": "v3", "slug": "lifetimes", "title": "Lifetimes", "thumbnail_url": "t3.jpg", "media_url": "https://www.youtube.com/embed/ccc" }
                    ]
                },
                {
                    "slug": "async",
                    "name": "Async",
                    "icon": "bolt",
                    "videos": [
                        { "id": "v4", "title": "Futures Explained", "thumbnail_url": "t4.jpg", "media_url": "https://www.youtube.com/embed/ddd?start=5", "duration": "1:02:03" }
                    ]
                },
                {
                    "slug": "async-advanced",
                    "name": "Async",
                    "icon": "bolt",
                    "videos": [
                        { "id": "v5", "slug": "pinning", "title": "Pinning", "thumbnail_url": "t5.jpg", "media_url": "https://www.youtube.com/embed/eee" },
                        { "id": "v6", "slug": "executors", "title": "Executors", "thumbnail_url": "t6.jpg", "media_url": "https://www.youtube.com/embed/fff" }
                    ]
                }
            ]
        });
        Catalog::from_json(&json.to_string()).expect("fixture catalog is valid")
    }

    pub fn video(id: &str) -> Video {
        catalog().find_video(id).cloned().expect("fixture video exists")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::catalog;
    use super::*;

    #[test]
    fn nested_videos_inherit_category_fields() {
        let catalog = catalog();
        let video = catalog.find_video("v2").unwrap();
        assert_eq!(video.category, "Rust Basics");
        assert_eq!(video.category_slug, "rust-basics");
    }

    #[test]
    fn missing_slug_is_derived_from_title() {
        let catalog = catalog();
        assert_eq!(catalog.find_video("v4").unwrap().slug, "futures-explained");
    }

    #[test]
    fn unknown_id_is_not_found() {
        assert!(catalog().find_video("nope").is_none());
    }

    #[test]
    fn route_key_resolves_slug_then_id() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_slug_or_id("borrowing").unwrap().id, "v2");
        assert_eq!(catalog.find_by_slug_or_id("v3").unwrap().slug, "lifetimes");
        assert!(catalog.find_by_slug_or_id("").is_none());
        assert!(catalog.find_by_slug_or_id("missing").is_none());
    }

    #[test]
    fn next_after_follows_category_order() {
        let catalog = catalog();
        let v1 = catalog.find_video("v1").unwrap();
        let v3 = catalog.find_video("v3").unwrap();
        assert_eq!(catalog.next_after(v1).unwrap().id, "v2");
        assert!(catalog.next_after(v3).is_none());
    }

    #[test]
    fn siblings_match_on_slug_not_display_name() {
        let catalog = catalog();
        let futures = catalog.find_video("v4").unwrap();
        let ids: Vec<_> = catalog.siblings(futures).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v4"]);
        assert!(catalog.next_after(futures).is_none());
    }

    #[test]
    fn category_by_name_returns_first_match() {
        let catalog = catalog();
        assert_eq!(catalog.category_by_name("Async").unwrap().slug, "async");
        assert!(catalog.category_by_name("Cooking").is_none());
    }

    #[test]
    fn unresolvable_category_yields_no_siblings() {
        let catalog = catalog();
        let mut orphan = catalog.find_video("v1").unwrap().clone();
        orphan.category_slug = "gone".to_string();
        assert!(catalog.siblings(&orphan).is_empty());
        assert!(catalog.next_after(&orphan).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{"categories":[{"slug":"a","name":"A","icon":"x","videos":[
            {"id":"1","slug":"one","title":"One","thumbnail_url":"","media_url":"m"},
            {"id":"1","slug":"two","title":"Two","thumbnail_url":"","media_url":"m"}]}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateVideoId(id)) if id == "1"
        ));
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let json = r#"{"categories":[{"slug":"a","name":"A","icon":"x","videos":[
            {"id":"1","title":"Same Title","thumbnail_url":"","media_url":"m"},
            {"id":"2","title":"Same title","thumbnail_url":"","media_url":"m"}]}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateVideoSlug(_))
        ));
    }

    #[test]
    fn title_without_slug_characters_falls_back_to_id() {
        let json = r#"{"categories":[{"slug":"a","name":"A","icon":"x","videos":[
            {"id":"vid-101","title":"東京の夜","thumbnail_url":"","media_url":"m"},
            {"id":"vid-102","title":"Ночь","thumbnail_url":"","media_url":"m"}]}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.find_video("vid-101").unwrap().slug, "vid-101");
        assert_eq!(catalog.find_video("vid-102").unwrap().slug, "vid-102");
        assert_eq!(catalog.find_by_slug_or_id("vid-101").unwrap().title, "東京の夜");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = builtin();
        assert!(catalog.video_count() > 0);
    }
}
