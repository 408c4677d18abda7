//! Backend Configuration

/// Path the backend mounts its routes under
pub const API_PREFIX: &str = "/api/v2.0.0";

/// API base URL: `GRAVITA_API_BASE` at build time, else the page origin
/// plus [`API_PREFIX`]
pub fn api_base() -> String {
    if let Some(base) = option_env!("GRAVITA_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let origin = web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, API_PREFIX)
}
