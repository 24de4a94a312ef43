//! Build-time frontend configuration.

/// Prefix for REST calls. Empty means same origin as the admin app, which is
/// how the backend serves it; set `ADMIN_API_BASE` at build time to point a
/// Trunk dev server at another host.
pub const API_BASE: &str = match option_env!("ADMIN_API_BASE") {
    Some(base) => base,
    None => "",
};

/// How long toast notifications stay on screen.
pub const TOAST_MILLIS: u32 = 3000;
