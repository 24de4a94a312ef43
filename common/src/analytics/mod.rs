//! Analytics source scope: which slice of analytics data the dashboards query,
//! derived from the user's role and persisted across reloads.

pub mod context;
pub mod repository;
pub mod source;
pub mod state;

pub use context::require_context;
pub use repository::SourceRepository;
pub use source::{AnalyticsSource, SourceOption, source_options};
pub use state::{ALL_TEMPLATES, AnalyticsQuery, AnalyticsSourceState};
