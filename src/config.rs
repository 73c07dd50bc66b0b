
// BACKEND_URL is baked in at build time, e.g. `BACKEND_URL=https://api.example.com trunk build --release`
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("http://localhost:3001")  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")  // Same origin in production
}

/// Joins the base URL and an endpoint path with exactly one slash between them.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
