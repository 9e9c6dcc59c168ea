pub mod app_state_builder;
pub mod auth_helper;
pub mod content_fakes;
pub mod gallery_fakes;
pub mod stubs;
