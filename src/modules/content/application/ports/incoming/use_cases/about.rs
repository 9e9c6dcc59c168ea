use async_trait::async_trait;

use crate::content::application::{
    domain::entities::{AboutContent, AboutPage, Credential},
    ports::outgoing::{ContentQueryError, ContentRepositoryError},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetAboutError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentQueryError> for GetAboutError {
    fn from(err: ContentQueryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveAboutCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Credential at index {0} has an empty title")]
    EmptyCredentialTitle(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveAboutError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentRepositoryError> for SaveAboutError {
    fn from(err: ContentRepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

/// Full replacement of the about page. Credential order is kept as given.
#[derive(Debug, Clone)]
pub struct SaveAboutCommand {
    content: AboutContent,
    credentials: Vec<Credential>,
}

impl SaveAboutCommand {
    pub fn new(
        content: AboutContent,
        credentials: Vec<Credential>,
    ) -> Result<Self, SaveAboutCommandError> {
        let content = AboutContent {
            name: content.name.trim().to_string(),
            bio_p1: content.bio_p1.trim().to_string(),
            bio_p2: content.bio_p2.trim().to_string(),
            email: content.email.trim().to_string(),
            phone: content.phone.trim().to_string(),
        };
        if content.name.is_empty() {
            return Err(SaveAboutCommandError::EmptyName);
        }

        let credentials = credentials
            .into_iter()
            .enumerate()
            .map(|(index, c)| {
                let title = c.title.trim().to_string();
                if title.is_empty() {
                    return Err(SaveAboutCommandError::EmptyCredentialTitle(index));
                }
                Ok(Credential {
                    category: c.category.trim().to_string(),
                    title,
                    subtitle: c.subtitle.trim().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            content,
            credentials,
        })
    }

    pub fn content(&self) -> &AboutContent {
        &self.content
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn into_parts(self) -> (AboutContent, Vec<Credential>) {
        (self.content, self.credentials)
    }
}

#[async_trait]
pub trait GetAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<AboutPage, GetAboutError>;
}

#[async_trait]
pub trait SaveAboutUseCase: Send + Sync {
    async fn execute(&self, command: SaveAboutCommand) -> Result<(), SaveAboutError>;
}
