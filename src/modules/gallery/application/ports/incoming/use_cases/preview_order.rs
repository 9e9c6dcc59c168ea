use crate::gallery::application::domain::{
    draft::{DraftEdit, DraftError, DraftItem, GalleryDraft, OrderEntry},
    entities::GalleryTag,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewOrderError {
    #[error("Edit #{index} is invalid: {source}")]
    InvalidEdit { index: usize, source: DraftError },
}

#[derive(Debug, Clone)]
pub struct PreviewOrderCommand {
    tag: GalleryTag,
    draft: GalleryDraft,
    edits: Vec<DraftEdit>,
}

impl PreviewOrderCommand {
    pub fn new(
        tag: GalleryTag,
        items: Vec<DraftItem>,
        edits: Vec<DraftEdit>,
    ) -> Result<Self, DraftError> {
        Ok(Self {
            tag,
            draft: GalleryDraft::new(items)?,
            edits,
        })
    }

    pub fn into_parts(self) -> (GalleryTag, GalleryDraft, Vec<DraftEdit>) {
        (self.tag, self.draft, self.edits)
    }
}

/// Replays editor gestures on a draft without persisting anything.
pub trait PreviewOrderUseCase: Send + Sync {
    fn execute(&self, command: PreviewOrderCommand) -> Result<Vec<OrderEntry>, PreviewOrderError>;
}
