#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    "http://localhost:8888/"  // Netlify dev form handler when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    "/"  // Host form handler in production
}
