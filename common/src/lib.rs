//! Models and browser-independent logic shared by the admin frontend and the
//! dev backend.
//!
//! - `model`: wire types (templates, pages, roles, session user).
//! - `preview`: the live preview acceptance chain and preview state.
//! - `analytics`: analytics source scope derivation and persistence.
//! - `storage`: durable key/value storage interface and its fixed keys.
//! - `requests`: REST paths shared by both sides.

pub mod analytics;
pub mod error;
pub mod model;
pub mod preview;
pub mod requests;
pub mod storage;
