pub mod about_content;
pub mod about_credentials;
pub mod articles;
pub mod site_visits;
pub mod wedding_packages;
