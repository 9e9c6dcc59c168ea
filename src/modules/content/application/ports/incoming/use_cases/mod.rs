mod about;
mod analytics;
mod articles;
mod wedding_packages;

pub use about::{
    GetAboutError, GetAboutUseCase, SaveAboutCommand, SaveAboutCommandError, SaveAboutError,
    SaveAboutUseCase,
};
pub use analytics::{
    GetVisitSummaryUseCase, RecordVisitCommand, RecordVisitCommandError, RecordVisitError,
    RecordVisitUseCase, VisitSummaryError, MAX_PAGE_PATH_CHARS, MAX_VISITOR_HASH_CHARS,
};
pub use articles::{
    ArticleFields, CreateArticleCommand, CreateArticleCommandError, CreateArticleError,
    CreateArticleUseCase, DeleteArticleError, DeleteArticleUseCase, GetArticleError,
    GetArticleUseCase, ListArticlesError, ListArticlesUseCase, MAX_TITLE_CHARS,
};
pub use wedding_packages::{
    ListWeddingPackagesError, ListWeddingPackagesUseCase, SaveWeddingPackagesCommand,
    SaveWeddingPackagesCommandError, SaveWeddingPackagesError, SaveWeddingPackagesUseCase,
    WeddingPackageInput,
};
