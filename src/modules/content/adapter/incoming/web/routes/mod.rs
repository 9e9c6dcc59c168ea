mod about;
mod analytics;
mod articles;
mod wedding_packages;

pub use about::*;
pub use analytics::*;
pub use articles::*;
pub use wedding_packages::*;
