use crate::gallery::application::{
    domain::draft::OrderEntry,
    ports::incoming::use_cases::{PreviewOrderCommand, PreviewOrderError, PreviewOrderUseCase},
};

#[derive(Debug, Clone, Default)]
pub struct PreviewOrderService;

impl PreviewOrderService {
    pub fn new() -> Self {
        Self
    }
}

impl PreviewOrderUseCase for PreviewOrderService {
    fn execute(&self, command: PreviewOrderCommand) -> Result<Vec<OrderEntry>, PreviewOrderError> {
        let (tag, mut draft, edits) = command.into_parts();

        for (index, edit) in edits.into_iter().enumerate() {
            draft
                .apply(edit)
                .map_err(|source| PreviewOrderError::InvalidEdit { index, source })?;
        }

        Ok(draft.to_order_entries(tag))
    }
}
