use actix_web::web;
use std::sync::Arc;

use crate::content::application::{
    content_use_cases::ContentUseCases,
    ports::incoming::use_cases::{
        CreateArticleUseCase, DeleteArticleUseCase, GetAboutUseCase, GetArticleUseCase,
        GetVisitSummaryUseCase, ListArticlesUseCase, ListWeddingPackagesUseCase,
        RecordVisitUseCase, SaveAboutUseCase, SaveWeddingPackagesUseCase,
    },
};
use crate::gallery::application::{
    domain::policies::upload_policy::UploadPolicy,
    gallery_use_cases::GalleryUseCases,
    ports::incoming::use_cases::{
        AddVariantUseCase, DeletePhotoUseCase, DeleteVariantUseCase, PreviewOrderUseCase,
        ResolveGalleryUseCase, SaveOrderUseCase, UpdateDescriptionUseCase, UploadPhotoUseCase,
    },
    services::PreviewOrderService,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case defaults to a stub that panics when called,
/// except preview which has no I/O and uses the real service.
pub struct TestAppStateBuilder {
    gallery: GalleryUseCases,
    content: ContentUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            gallery: GalleryUseCases {
                resolve: Arc::new(StubResolveGalleryUseCase),
                save_order: Arc::new(StubSaveOrderUseCase),
                preview_order: Arc::new(PreviewOrderService::new()),
                delete_photo: Arc::new(StubDeletePhotoUseCase),
                upload_photo: Arc::new(StubUploadPhotoUseCase),
                add_variant: Arc::new(StubAddVariantUseCase),
                delete_variant: Arc::new(StubDeleteVariantUseCase),
                update_description: Arc::new(StubUpdateDescriptionUseCase),
                upload_policy: UploadPolicy::default(),
            },
            content: ContentUseCases {
                list_articles: Arc::new(StubListArticlesUseCase),
                get_article: Arc::new(StubGetArticleUseCase),
                create_article: Arc::new(StubCreateArticleUseCase),
                delete_article: Arc::new(StubDeleteArticleUseCase),
                get_about: Arc::new(StubGetAboutUseCase),
                save_about: Arc::new(StubSaveAboutUseCase),
                list_packages: Arc::new(StubListWeddingPackagesUseCase),
                save_packages: Arc::new(StubSaveWeddingPackagesUseCase),
                record_visit: Arc::new(StubRecordVisitUseCase),
                visit_summary: Arc::new(StubGetVisitSummaryUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Gallery

    pub fn with_resolve_gallery(mut self, uc: impl ResolveGalleryUseCase + 'static) -> Self {
        self.gallery.resolve = Arc::new(uc);
        self
    }

    pub fn with_save_order(mut self, uc: impl SaveOrderUseCase + 'static) -> Self {
        self.gallery.save_order = Arc::new(uc);
        self
    }

    pub fn with_preview_order(mut self, uc: impl PreviewOrderUseCase + 'static) -> Self {
        self.gallery.preview_order = Arc::new(uc);
        self
    }

    pub fn with_delete_photo(mut self, uc: impl DeletePhotoUseCase + 'static) -> Self {
        self.gallery.delete_photo = Arc::new(uc);
        self
    }

    pub fn with_upload_photo(mut self, uc: impl UploadPhotoUseCase + 'static) -> Self {
        self.gallery.upload_photo = Arc::new(uc);
        self
    }

    pub fn with_add_variant(mut self, uc: impl AddVariantUseCase + 'static) -> Self {
        self.gallery.add_variant = Arc::new(uc);
        self
    }

    pub fn with_delete_variant(mut self, uc: impl DeleteVariantUseCase + 'static) -> Self {
        self.gallery.delete_variant = Arc::new(uc);
        self
    }

    pub fn with_update_description(
        mut self,
        uc: impl UpdateDescriptionUseCase + 'static,
    ) -> Self {
        self.gallery.update_description = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.gallery.upload_policy = policy;
        self
    }

    // Content

    pub fn with_list_articles(mut self, uc: impl ListArticlesUseCase + 'static) -> Self {
        self.content.list_articles = Arc::new(uc);
        self
    }

    pub fn with_get_article(mut self, uc: impl GetArticleUseCase + 'static) -> Self {
        self.content.get_article = Arc::new(uc);
        self
    }

    pub fn with_create_article(mut self, uc: impl CreateArticleUseCase + 'static) -> Self {
        self.content.create_article = Arc::new(uc);
        self
    }

    pub fn with_delete_article(mut self, uc: impl DeleteArticleUseCase + 'static) -> Self {
        self.content.delete_article = Arc::new(uc);
        self
    }

    pub fn with_get_about(mut self, uc: impl GetAboutUseCase + 'static) -> Self {
        self.content.get_about = Arc::new(uc);
        self
    }

    pub fn with_save_about(mut self, uc: impl SaveAboutUseCase + 'static) -> Self {
        self.content.save_about = Arc::new(uc);
        self
    }

    pub fn with_list_packages(mut self, uc: impl ListWeddingPackagesUseCase + 'static) -> Self {
        self.content.list_packages = Arc::new(uc);
        self
    }

    pub fn with_save_packages(mut self, uc: impl SaveWeddingPackagesUseCase + 'static) -> Self {
        self.content.save_packages = Arc::new(uc);
        self
    }

    pub fn with_record_visit(mut self, uc: impl RecordVisitUseCase + 'static) -> Self {
        self.content.record_visit = Arc::new(uc);
        self
    }

    pub fn with_visit_summary(mut self, uc: impl GetVisitSummaryUseCase + 'static) -> Self {
        self.content.visit_summary = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            gallery: self.gallery,
            content: self.content,
        })
    }
}
