pub mod app;
pub mod interaction;
pub mod message;
pub mod scene;
pub mod sidebar;
pub mod ticker;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
