pub mod analytics;
pub mod preview;
