use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::WeddingPackage,
    ports::outgoing::{ContentQueryError, ContentRepositoryError},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListWeddingPackagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentQueryError> for ListWeddingPackagesError {
    fn from(err: ContentQueryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveWeddingPackagesCommandError {
    #[error("Package at index {0} has an empty name")]
    EmptyPackageName(usize),

    #[error("Package id {0} appears more than once")]
    DuplicatePackageId(Uuid),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveWeddingPackagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentRepositoryError> for SaveWeddingPackagesError {
    fn from(err: ContentRepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

/// One package as sent by the editor. A missing id creates a new package.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct WeddingPackageInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub includes: String,
    #[serde(default)]
    pub images: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone)]
pub struct SaveWeddingPackagesCommand {
    packages: Vec<WeddingPackage>,
}

impl SaveWeddingPackagesCommand {
    /// `sort_order` becomes the array index.
    pub fn new(inputs: Vec<WeddingPackageInput>) -> Result<Self, SaveWeddingPackagesCommandError> {
        let mut seen = std::collections::HashSet::new();
        let mut packages = Vec::with_capacity(inputs.len());

        for (index, input) in inputs.into_iter().enumerate() {
            let name = input.name.trim().to_string();
            if name.is_empty() {
                return Err(SaveWeddingPackagesCommandError::EmptyPackageName(index));
            }

            let id = input.id.unwrap_or_else(Uuid::new_v4);
            if !seen.insert(id) {
                return Err(SaveWeddingPackagesCommandError::DuplicatePackageId(id));
            }

            packages.push(WeddingPackage {
                id,
                name,
                time: input.time.trim().to_string(),
                includes: input.includes.trim().to_string(),
                images: input.images.trim().to_string(),
                price: input.price.trim().to_string(),
                highlight: input.highlight,
                sort_order: index as i32,
            });
        }

        Ok(Self { packages })
    }

    pub fn packages(&self) -> &[WeddingPackage] {
        &self.packages
    }

    pub fn into_packages(self) -> Vec<WeddingPackage> {
        self.packages
    }
}

#[async_trait]
pub trait ListWeddingPackagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<WeddingPackage>, ListWeddingPackagesError>;
}

#[async_trait]
pub trait SaveWeddingPackagesUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SaveWeddingPackagesCommand,
    ) -> Result<Vec<WeddingPackage>, SaveWeddingPackagesError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: Option<Uuid>, name: &str) -> WeddingPackageInput {
        WeddingPackageInput {
            id,
            name: name.to_string(),
            price: "24 000 kr".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn sort_order_follows_array_index() {
        let keep = Uuid::new_v4();
        let cmd =
            SaveWeddingPackagesCommand::new(vec![input(None, "Halvdag"), input(Some(keep), "Heldag")])
                .unwrap();

        let packages = cmd.packages();
        assert_eq!(packages[0].sort_order, 0);
        assert_eq!(packages[1].sort_order, 1);
        assert_eq!(packages[1].id, keep);
        assert_ne!(packages[0].id, keep);
    }

    #[test]
    fn blank_name_reports_its_index() {
        let err = SaveWeddingPackagesCommand::new(vec![input(None, "A"), input(None, "  ")])
            .unwrap_err();
        assert_eq!(err, SaveWeddingPackagesCommandError::EmptyPackageName(1));
    }

    #[test]
    fn repeated_id_is_rejected() {
        let id = Uuid::new_v4();
        let err = SaveWeddingPackagesCommand::new(vec![input(Some(id), "A"), input(Some(id), "B")])
            .unwrap_err();
        assert_eq!(err, SaveWeddingPackagesCommandError::DuplicatePackageId(id));
    }

    #[test]
    fn empty_list_is_allowed() {
        let cmd = SaveWeddingPackagesCommand::new(vec![]).unwrap();
        assert!(cmd.packages().is_empty());
    }
}
