pub mod draft;
pub mod entities;
pub mod policies;
