pub mod clip;
pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod media;
pub mod store;
pub mod timeline;
