//! Live template preview: cross-document message acceptance and the preview
//! state a single preview route owns.
//!
//! The browser side (event subscription, rendering) lives in the frontend;
//! everything here is plain data and runs natively in tests.

pub mod bridge;
pub mod filter;
pub mod message;
pub mod state;

pub use bridge::PreviewBridge;
pub use filter::{Inbound, RouteScope};
pub use message::{PREVIEW_MESSAGE_TYPE, PreviewMessage};
pub use state::PreviewState;
