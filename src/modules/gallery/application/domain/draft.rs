use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

use crate::gallery::application::domain::entities::GalleryTag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DraftItem {
    pub id: String,
    pub url: String,
}

/// Row to be upserted into the order table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderEntry {
    pub id: String,
    pub tag: GalleryTag,
    pub position: i32,
    pub url: String,
}

/// A single editor gesture replayed against a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DraftEdit {
    /// Array move: remove at `from`, insert at `to`.
    Move { from: usize, to: usize },
    Swap { a: usize, b: usize },
    /// Drag-end by id.
    Drag {
        #[serde(rename = "activeId")]
        active_id: String,
        #[serde(rename = "overId")]
        over_id: String,
    },
    Remove { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Photo id at index {0} is empty")]
    EmptyId(usize),

    #[error("Duplicate photo id: {0}")]
    DuplicateId(String),

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// In-memory ordering being edited by the owner. Never touches storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryDraft {
    items: Vec<DraftItem>,
}

impl GalleryDraft {
    /// Ids are trimmed; blank or duplicate ids are rejected.
    pub fn new(items: Vec<DraftItem>) -> Result<Self, DraftError> {
        let mut seen = HashSet::with_capacity(items.len());
        let mut cleaned = Vec::with_capacity(items.len());

        for (index, item) in items.into_iter().enumerate() {
            let id = item.id.trim().to_string();
            if id.is_empty() {
                return Err(DraftError::EmptyId(index));
            }
            if !seen.insert(id.clone()) {
                return Err(DraftError::DuplicateId(id));
            }
            cleaned.push(DraftItem { id, url: item.url });
        }

        Ok(Self { items: cleaned })
    }

    pub fn items(&self) -> &[DraftItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), DraftError> {
        self.check_index(from)?;
        self.check_index(to)?;

        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        Ok(())
    }

    /// Moves `active` to the slot currently held by `over`.
    /// Returns false (and leaves the draft untouched) when the ids are equal or unknown.
    pub fn move_by_id(&mut self, active: &str, over: &str) -> bool {
        if active == over {
            return false;
        }

        let (Some(from), Some(to)) = (self.index_of(active), self.index_of(over)) else {
            return false;
        };

        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), DraftError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.items.swap(a, b);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<DraftItem> {
        let index = self.index_of(id)?;
        Some(self.items.remove(index))
    }

    pub fn apply(&mut self, edit: DraftEdit) -> Result<(), DraftError> {
        match edit {
            DraftEdit::Move { from, to } => self.move_item(from, to),
            DraftEdit::Swap { a, b } => self.swap(a, b),
            DraftEdit::Drag { active_id, over_id } => {
                self.move_by_id(&active_id, &over_id);
                Ok(())
            }
            DraftEdit::Remove { id } => {
                self.remove(&id);
                Ok(())
            }
        }
    }

    /// Each item's index becomes its position.
    pub fn to_order_entries(&self, tag: GalleryTag) -> Vec<OrderEntry> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| OrderEntry {
                id: item.id.clone(),
                tag,
                position: index as i32,
                url: item.url.clone(),
            })
            .collect()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn check_index(&self, index: usize) -> Result<(), DraftError> {
        if index >= self.items.len() {
            return Err(DraftError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}
