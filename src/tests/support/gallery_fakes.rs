use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::gallery::application::{
    domain::{
        draft::OrderEntry,
        entities::{GalleryTag, OrderedPhoto, PhotoVariant, RemoteAsset, UploadedAsset},
    },
    ports::outgoing::{
        db::{
            DeletedPhoto, NewOrderRecord, NewVariantRecord, PhotoOrderQuery,
            PhotoOrderQueryError, PhotoOrderRepository, PhotoOrderRepositoryError,
        },
        media_host::{
            MediaListing, MediaListingError, MediaUpload, MediaUploadError, MediaUploader,
        },
    },
};

// ============================================================
// In-memory order store (query + repository)
// ============================================================

#[derive(Debug, Clone)]
struct StoredOrder {
    id: String,
    tag: GalleryTag,
    position: i32,
    url: String,
    seq: u64,
}

#[derive(Default)]
struct StoreState {
    orders: Vec<StoredOrder>,
    variants: Vec<(String, PhotoVariant)>,
    descriptions: HashMap<String, String>,
    blacklist: HashSet<String>,
    seq: u64,
    fail_blacklist_reads: bool,
    fail_order_reads: bool,
    fail_writes: bool,
    write_calls: usize,
}

impl StoreState {
    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn begin_write(&mut self) -> Result<(), PhotoOrderRepositoryError> {
        self.write_calls += 1;
        if self.fail_writes {
            return Err(PhotoOrderRepositoryError::DatabaseError(
                "write failed".to_string(),
            ));
        }
        Ok(())
    }
}

/// Behaves like the order/variant/description/blacklist tables.
#[derive(Clone, Default)]
pub struct InMemoryGalleryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryGalleryStore {
    /// Positions follow slice order starting at 0.
    pub fn seed_order(&self, tag: GalleryTag, ids: &[&str]) {
        let mut state = self.state.lock().unwrap();
        for (position, id) in ids.iter().enumerate() {
            let seq = state.next_seq();
            state.orders.push(StoredOrder {
                id: id.to_string(),
                tag,
                position: position as i32,
                url: format!("https://db.example/{id}.jpg"),
                seq,
            });
        }
    }

    pub fn seed_blacklist(&self, ids: &[&str]) {
        let mut state = self.state.lock().unwrap();
        state.blacklist.extend(ids.iter().map(|id| id.to_string()));
    }

    pub fn seed_variant(&self, parent_id: &str, variant_id: &str) {
        let mut state = self.state.lock().unwrap();
        state.variants.push((
            parent_id.to_string(),
            PhotoVariant {
                id: variant_id.to_string(),
                url: format!("https://db.example/{variant_id}.jpg"),
                position: 0,
            },
        ));
    }

    pub fn fail_blacklist_reads(&self) {
        self.state.lock().unwrap().fail_blacklist_reads = true;
    }

    pub fn fail_order_reads(&self) {
        self.state.lock().unwrap().fail_order_reads = true;
    }

    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub fn write_calls(&self) -> usize {
        self.state.lock().unwrap().write_calls
    }

    /// `(id, position)` for the tag in resolve order.
    pub fn positions(&self, tag: GalleryTag) -> Vec<(String, i32)> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<&StoredOrder> = state.orders.iter().filter(|o| o.tag == tag).collect();
        rows.sort_by_key(|o| (o.position, o.seq));
        rows.into_iter().map(|o| (o.id.clone(), o.position)).collect()
    }

    pub fn is_blacklisted(&self, id: &str) -> bool {
        self.state.lock().unwrap().blacklist.contains(id)
    }

    pub fn variant_ids(&self, parent_id: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .variants
            .iter()
            .filter(|(parent, _)| parent == parent_id)
            .map(|(_, v)| v.id.clone())
            .collect()
    }

    pub fn description(&self, photo_id: &str) -> Option<String> {
        self.state.lock().unwrap().descriptions.get(photo_id).cloned()
    }
}

#[async_trait]
impl PhotoOrderQuery for InMemoryGalleryStore {
    async fn list_blacklist(&self) -> Result<HashSet<String>, PhotoOrderQueryError> {
        let state = self.state.lock().unwrap();
        if state.fail_blacklist_reads {
            return Err(PhotoOrderQueryError::DatabaseError(
                "blacklist read failed".to_string(),
            ));
        }
        Ok(state.blacklist.clone())
    }

    async fn list_ordered(
        &self,
        tag: GalleryTag,
    ) -> Result<Vec<OrderedPhoto>, PhotoOrderQueryError> {
        let state = self.state.lock().unwrap();
        if state.fail_order_reads {
            return Err(PhotoOrderQueryError::DatabaseError(
                "order read failed".to_string(),
            ));
        }

        let mut rows: Vec<&StoredOrder> = state.orders.iter().filter(|o| o.tag == tag).collect();
        rows.sort_by_key(|o| (o.position, o.seq));

        Ok(rows
            .into_iter()
            .map(|o| OrderedPhoto {
                id: o.id.clone(),
                tag: o.tag,
                position: o.position,
                url: o.url.clone(),
                variants: state
                    .variants
                    .iter()
                    .filter(|(parent, _)| *parent == o.id)
                    .map(|(_, v)| v.clone())
                    .collect(),
                description: state.descriptions.get(&o.id).cloned(),
            })
            .collect())
    }
}

#[async_trait]
impl PhotoOrderRepository for InMemoryGalleryStore {
    async fn insert_photo(&self, record: NewOrderRecord) -> Result<(), PhotoOrderRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.begin_write()?;
        if state.orders.iter().any(|o| o.id == record.id) {
            return Err(PhotoOrderRepositoryError::AlreadyExists(record.id));
        }
        let seq = state.next_seq();
        state.orders.push(StoredOrder {
            id: record.id,
            tag: record.tag,
            position: record.position,
            url: record.url,
            seq,
        });
        Ok(())
    }

    async fn upsert_order(
        &self,
        entries: Vec<OrderEntry>,
    ) -> Result<u64, PhotoOrderRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.begin_write()?;
        let count = entries.len() as u64;

        for entry in entries {
            if let Some(existing) = state.orders.iter_mut().find(|o| o.id == entry.id) {
                existing.tag = entry.tag;
                existing.position = entry.position;
                existing.url = entry.url;
                continue;
            }
            let seq = state.next_seq();
            state.orders.push(StoredOrder {
                id: entry.id,
                tag: entry.tag,
                position: entry.position,
                url: entry.url,
                seq,
            });
        }
        Ok(count)
    }

    async fn delete_photo(
        &self,
        photo_id: &str,
    ) -> Result<DeletedPhoto, PhotoOrderRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.begin_write()?;
        let before = state.orders.len();
        state.orders.retain(|o| o.id != photo_id);
        let had_order_record = state.orders.len() != before;
        state.blacklist.insert(photo_id.to_string());
        Ok(DeletedPhoto {
            photo_id: photo_id.to_string(),
            had_order_record,
        })
    }

    async fn insert_variant(
        &self,
        record: NewVariantRecord,
    ) -> Result<(), PhotoOrderRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.begin_write()?;
        state.variants.push((
            record.parent_id,
            PhotoVariant {
                id: record.id,
                url: record.url,
                position: record.position,
            },
        ));
        Ok(())
    }

    async fn delete_variant(&self, variant_id: &str) -> Result<(), PhotoOrderRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.begin_write()?;
        let before = state.variants.len();
        state.variants.retain(|(_, v)| v.id != variant_id);
        if state.variants.len() == before {
            return Err(PhotoOrderRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn upsert_description(
        &self,
        photo_id: &str,
        description: &str,
    ) -> Result<(), PhotoOrderRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.begin_write()?;
        state
            .descriptions
            .insert(photo_id.to_string(), description.to_string());
        Ok(())
    }
}

// ============================================================
// Media host stubs
// ============================================================

#[derive(Clone)]
pub struct StubMediaListing {
    result: Result<Vec<RemoteAsset>, MediaListingError>,
}

impl StubMediaListing {
    pub fn assets(ids: &[&str]) -> Self {
        Self {
            result: Ok(ids
                .iter()
                .map(|id| RemoteAsset {
                    public_id: id.to_string(),
                    format: "jpg".to_string(),
                    url: format!("https://cdn.example/{id}.jpg"),
                })
                .collect()),
        }
    }

    pub fn failing(err: MediaListingError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl MediaListing for StubMediaListing {
    async fn list_by_tag(&self, _tag: GalleryTag) -> Result<Vec<RemoteAsset>, MediaListingError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubMediaUploader {
    result: Result<UploadedAsset, MediaUploadError>,
    uploads: Arc<Mutex<Vec<MediaUpload>>>,
}

impl StubMediaUploader {
    pub fn returning(public_id: &str, secure_url: &str) -> Self {
        Self {
            result: Ok(UploadedAsset {
                public_id: public_id.to_string(),
                secure_url: secure_url.to_string(),
            }),
            uploads: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn failing(err: MediaUploadError) -> Self {
        Self {
            result: Err(err),
            uploads: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn uploads(&self) -> Vec<MediaUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for StubMediaUploader {
    async fn upload(&self, upload: MediaUpload) -> Result<UploadedAsset, MediaUploadError> {
        self.uploads.lock().unwrap().push(upload);
        self.result.clone()
    }
}
