use std::collections::HashSet;

use crate::gallery::application::domain::entities::{
    GalleryPhoto, GalleryTag, OrderedPhoto, RemoteAsset,
};

/// Pure reconciliation of the curated order with the remote listing.
///
/// Output is the surviving ordered photos in stored order, followed by the
/// remote assets that are neither blacklisted nor already ordered, in remote
/// order. Segments are never re-sorted against each other.
#[derive(Debug, Clone)]
pub struct GalleryMerge<'a> {
    tag: GalleryTag,
    byline: &'a str,
}

impl<'a> GalleryMerge<'a> {
    pub fn new(tag: GalleryTag, byline: &'a str) -> Self {
        Self { tag, byline }
    }

    pub fn alt_text(&self) -> String {
        let byline = self.byline.trim();
        if byline.is_empty() {
            self.tag.to_string()
        } else {
            format!("{} {}", self.tag, byline)
        }
    }

    pub fn merge(
        &self,
        blacklist: &HashSet<String>,
        ordered: Vec<OrderedPhoto>,
        remote: Vec<RemoteAsset>,
    ) -> Vec<GalleryPhoto> {
        let alt = self.alt_text();
        let mut emitted: HashSet<String> = HashSet::with_capacity(ordered.len());
        let mut photos = Vec::with_capacity(ordered.len() + remote.len());

        for photo in ordered {
            if blacklist.contains(&photo.id) || !emitted.insert(photo.id.clone()) {
                continue;
            }

            let mut variants = photo.variants;
            variants.sort_by_key(|v| v.position);

            photos.push(GalleryPhoto {
                id: photo.id,
                url: photo.url,
                alt: alt.clone(),
                description: photo.description.unwrap_or_default(),
                variants,
            });
        }

        for asset in remote {
            if blacklist.contains(&asset.public_id) || !emitted.insert(asset.public_id.clone()) {
                continue;
            }

            photos.push(GalleryPhoto {
                id: asset.public_id,
                url: asset.url,
                alt: alt.clone(),
                description: String::new(),
                variants: vec![],
            });
        }

        photos
    }
}
