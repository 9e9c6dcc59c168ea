use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::{AboutPage, Article, VisitSummary, WeddingPackage},
    ports::incoming::use_cases::{
        CreateArticleCommand, CreateArticleError, CreateArticleUseCase, DeleteArticleError,
        DeleteArticleUseCase, GetAboutError, GetAboutUseCase, GetArticleError, GetArticleUseCase,
        GetVisitSummaryUseCase, ListArticlesError, ListArticlesUseCase, ListWeddingPackagesError,
        ListWeddingPackagesUseCase, RecordVisitCommand, RecordVisitError, RecordVisitUseCase,
        SaveAboutCommand, SaveAboutError, SaveAboutUseCase, SaveWeddingPackagesCommand,
        SaveWeddingPackagesError, SaveWeddingPackagesUseCase, VisitSummaryError,
    },
};
use crate::gallery::application::{
    domain::entities::GalleryPhoto,
    ports::incoming::use_cases::{
        AddVariantCommand, AddVariantError, AddVariantUseCase, AddedVariant, DeletePhotoCommand,
        DeletePhotoError, DeletePhotoUseCase, DeleteVariantCommand, DeleteVariantError,
        DeleteVariantUseCase, PhotoDeleted, PhotoDescription, ResolveGalleryCommand, ResolveGalleryError,
        ResolveGalleryUseCase, SaveOrderCommand, SaveOrderError, SaveOrderUseCase, SavedOrder,
        UpdateDescriptionCommand, UpdateDescriptionError, UpdateDescriptionUseCase,
        UploadPhotoCommand, UploadPhotoError, UploadPhotoUseCase, UploadedPhoto,
    },
};

// ============================================================
// Gallery
// ============================================================

#[derive(Default, Clone)]
pub struct StubResolveGalleryUseCase;

#[async_trait]
impl ResolveGalleryUseCase for StubResolveGalleryUseCase {
    async fn execute(
        &self,
        _command: ResolveGalleryCommand,
    ) -> Result<Vec<GalleryPhoto>, ResolveGalleryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSaveOrderUseCase;

#[async_trait]
impl SaveOrderUseCase for StubSaveOrderUseCase {
    async fn execute(&self, _command: SaveOrderCommand) -> Result<SavedOrder, SaveOrderError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePhotoUseCase;

#[async_trait]
impl DeletePhotoUseCase for StubDeletePhotoUseCase {
    async fn execute(
        &self,
        _command: DeletePhotoCommand,
    ) -> Result<PhotoDeleted, DeletePhotoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadPhotoUseCase;

#[async_trait]
impl UploadPhotoUseCase for StubUploadPhotoUseCase {
    async fn execute(&self, _command: UploadPhotoCommand) -> Result<UploadedPhoto, UploadPhotoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAddVariantUseCase;

#[async_trait]
impl AddVariantUseCase for StubAddVariantUseCase {
    async fn execute(&self, _command: AddVariantCommand) -> Result<AddedVariant, AddVariantError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteVariantUseCase;

#[async_trait]
impl DeleteVariantUseCase for StubDeleteVariantUseCase {
    async fn execute(&self, _command: DeleteVariantCommand) -> Result<(), DeleteVariantError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateDescriptionUseCase;

#[async_trait]
impl UpdateDescriptionUseCase for StubUpdateDescriptionUseCase {
    async fn execute(
        &self,
        _command: UpdateDescriptionCommand,
    ) -> Result<PhotoDescription, UpdateDescriptionError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================
// Content
// ============================================================

#[derive(Default, Clone)]
pub struct StubListArticlesUseCase;

#[async_trait]
impl ListArticlesUseCase for StubListArticlesUseCase {
    async fn execute(&self) -> Result<Vec<Article>, ListArticlesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetArticleUseCase;

#[async_trait]
impl GetArticleUseCase for StubGetArticleUseCase {
    async fn execute(&self, _slug: &str) -> Result<Article, GetArticleError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateArticleUseCase;

#[async_trait]
impl CreateArticleUseCase for StubCreateArticleUseCase {
    async fn execute(&self, _command: CreateArticleCommand) -> Result<Article, CreateArticleError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteArticleUseCase;

#[async_trait]
impl DeleteArticleUseCase for StubDeleteArticleUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteArticleError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetAboutUseCase;

#[async_trait]
impl GetAboutUseCase for StubGetAboutUseCase {
    async fn execute(&self) -> Result<AboutPage, GetAboutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSaveAboutUseCase;

#[async_trait]
impl SaveAboutUseCase for StubSaveAboutUseCase {
    async fn execute(&self, _command: SaveAboutCommand) -> Result<(), SaveAboutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListWeddingPackagesUseCase;

#[async_trait]
impl ListWeddingPackagesUseCase for StubListWeddingPackagesUseCase {
    async fn execute(&self) -> Result<Vec<WeddingPackage>, ListWeddingPackagesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSaveWeddingPackagesUseCase;

#[async_trait]
impl SaveWeddingPackagesUseCase for StubSaveWeddingPackagesUseCase {
    async fn execute(
        &self,
        _command: SaveWeddingPackagesCommand,
    ) -> Result<Vec<WeddingPackage>, SaveWeddingPackagesError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRecordVisitUseCase;

#[async_trait]
impl RecordVisitUseCase for StubRecordVisitUseCase {
    async fn execute(&self, _command: RecordVisitCommand) -> Result<(), RecordVisitError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetVisitSummaryUseCase;

#[async_trait]
impl GetVisitSummaryUseCase for StubGetVisitSummaryUseCase {
    async fn execute(&self) -> Result<VisitSummary, VisitSummaryError> {
        unimplemented!("Not used in this test")
    }
}
