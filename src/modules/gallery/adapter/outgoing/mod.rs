pub mod cloudinary;
pub mod db;
