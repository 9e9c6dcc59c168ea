use async_trait::async_trait;

use crate::gallery::application::{
    domain::{entities::GalleryPhoto, policies::gallery_merge::GalleryMerge},
    ports::{
        incoming::use_cases::{ResolveGalleryCommand, ResolveGalleryError, ResolveGalleryUseCase},
        outgoing::{db::PhotoOrderQuery, media_host::MediaListing},
    },
};

pub struct ResolveGalleryService<Q, L>
where
    Q: PhotoOrderQuery,
    L: MediaListing,
{
    query: Q,
    listing: L,
    alt_byline: String,
}

impl<Q, L> ResolveGalleryService<Q, L>
where
    Q: PhotoOrderQuery,
    L: MediaListing,
{
    pub fn new(query: Q, listing: L, alt_byline: impl Into<String>) -> Self {
        Self {
            query,
            listing,
            alt_byline: alt_byline.into(),
        }
    }
}

#[async_trait]
impl<Q, L> ResolveGalleryUseCase for ResolveGalleryService<Q, L>
where
    Q: PhotoOrderQuery,
    L: MediaListing,
{
    async fn execute(
        &self,
        command: ResolveGalleryCommand,
    ) -> Result<Vec<GalleryPhoto>, ResolveGalleryError> {
        let Some(tag) = command.tag() else {
            return Ok(vec![]);
        };

        let (blacklist, ordered, remote) = futures::join!(
            self.query.list_blacklist(),
            self.query.list_ordered(tag),
            self.listing.list_by_tag(tag),
        );

        let blacklist = blacklist.map_err(|e| {
            tracing::error!("Blacklist read failed while resolving '{}': {}", tag, e);
            ResolveGalleryError::BlacklistUnavailable(e.to_string())
        })?;

        let remote = match remote {
            Ok(assets) => assets,
            Err(e) => {
                tracing::warn!("Remote listing for '{}' unavailable, using none: {}", tag, e);
                vec![]
            }
        };

        let ordered = match ordered {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Order records for '{}' unavailable: {}", tag, e);
                return Ok(vec![]);
            }
        };

        let photos = GalleryMerge::new(tag, &self.alt_byline).merge(&blacklist, ordered, remote);
        tracing::debug!("Resolved gallery '{}' with {} photos", tag, photos.len());

        Ok(photos)
    }
}
