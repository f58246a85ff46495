use web_sys::Window;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

/// Full page navigation; the current document is unloaded.
pub fn navigate_to(url: &str) -> Result<(), String> {
    window()?
        .location()
        .set_href(url)
        .map_err(|_| format!("Failed to navigate to {}", url))
}
