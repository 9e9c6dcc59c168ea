pub mod db;
pub mod media_host;
