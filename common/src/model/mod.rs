pub mod auth;
pub mod image;
pub mod page;
pub mod role;
pub mod template;
pub mod user;
