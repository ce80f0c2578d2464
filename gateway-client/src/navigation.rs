/// Surface able to leave the console for another page
pub trait Navigator: Send + Sync {
    /// Location the user is currently looking at
    fn current_href(&self) -> String;

    /// Move the user to `url`
    fn navigate(&self, url: &str);
}

/// Build the login page URL that returns to `current_href` after login
///
/// The current location is appended as-is.
pub fn login_redirect_url(login_url: &str, current_href: &str) -> String {
    format!("{}/?c_url={}", login_url.trim_end_matches('/'), current_href)
}
