use async_trait::async_trait;

use crate::content::application::{
    domain::entities::{NewVisit, VisitSummary},
    ports::outgoing::{SiteVisitQueryError, SiteVisitRepositoryError},
};

pub const MAX_PAGE_PATH_CHARS: usize = 512;
pub const MAX_VISITOR_HASH_CHARS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordVisitCommandError {
    #[error("Page path cannot be empty")]
    EmptyPagePath,

    #[error("Page path must start with '/'")]
    InvalidPagePath,

    #[error("Page path exceeds {MAX_PAGE_PATH_CHARS} characters")]
    PagePathTooLong,

    #[error("Visitor hash cannot be empty")]
    EmptyVisitorHash,

    #[error("Visitor hash exceeds {MAX_VISITOR_HASH_CHARS} characters")]
    VisitorHashTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordVisitError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SiteVisitRepositoryError> for RecordVisitError {
    fn from(err: SiteVisitRepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisitSummaryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SiteVisitQueryError> for VisitSummaryError {
    fn from(err: SiteVisitQueryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

/// One page view reported by the public site.
#[derive(Debug, Clone)]
pub struct RecordVisitCommand {
    visit: NewVisit,
}

impl RecordVisitCommand {
    pub fn new(page_path: &str, visitor_hash: &str) -> Result<Self, RecordVisitCommandError> {
        let page_path = page_path.trim();
        if page_path.is_empty() {
            return Err(RecordVisitCommandError::EmptyPagePath);
        }
        if !page_path.starts_with('/') {
            return Err(RecordVisitCommandError::InvalidPagePath);
        }
        if page_path.chars().count() > MAX_PAGE_PATH_CHARS {
            return Err(RecordVisitCommandError::PagePathTooLong);
        }

        let visitor_hash = visitor_hash.trim();
        if visitor_hash.is_empty() {
            return Err(RecordVisitCommandError::EmptyVisitorHash);
        }
        if visitor_hash.chars().count() > MAX_VISITOR_HASH_CHARS {
            return Err(RecordVisitCommandError::VisitorHashTooLong);
        }

        Ok(Self {
            visit: NewVisit {
                page_path: page_path.to_string(),
                visitor_hash: visitor_hash.to_string(),
            },
        })
    }

    pub fn visit(&self) -> &NewVisit {
        &self.visit
    }

    pub fn into_visit(self) -> NewVisit {
        self.visit
    }
}

#[async_trait]
pub trait RecordVisitUseCase: Send + Sync {
    async fn execute(&self, command: RecordVisitCommand) -> Result<(), RecordVisitError>;
}

#[async_trait]
pub trait GetVisitSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<VisitSummary, VisitSummaryError>;
}
