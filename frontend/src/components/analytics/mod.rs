//! Analytics source scope for the dashboards of one tab.
//!
//! `AnalyticsSourceProvider` owns the state and publishes it as a Yew context;
//! dashboards subscribe with `expect_analytics_source`, which fails fast when
//! no provider is mounted above them.

mod dashboard;
mod provider;

pub use dashboard::AnalyticsDashboard;
pub use provider::{expect_analytics_source, AnalyticsSourceContext, AnalyticsSourceProvider};
