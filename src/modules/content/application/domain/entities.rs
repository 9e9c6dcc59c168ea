use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::slug::Slug;

/// Press feature or reportage entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Article {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub publisher: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    /// Free-form, as printed by the publisher.
    pub published_date: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub slug: Slug,
    pub title: String,
    pub publisher: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub published_date: Option<String>,
    pub position: i32,
}

/// Singleton bio block of the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AboutContent {
    pub name: String,
    pub bio_p1: String,
    pub bio_p2: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Credential {
    /// e.g. "education", "award", "exhibition".
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct AboutPage {
    /// `None` until the owner saves the page once.
    pub content: Option<AboutContent>,
    pub credentials: Vec<Credential>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeddingPackage {
    pub id: Uuid,
    pub name: String,
    pub time: String,
    pub includes: String,
    pub images: String,
    pub price: String,
    pub highlight: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub page_path: String,
    pub visitor_hash: String,
}

/// Owner dashboard counters over `site_visits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct VisitSummary {
    pub total_visits: u64,
    /// Distinct `visitor_hash` values.
    pub unique_visitors: u64,
    pub last_24h: u64,
}
