//! Home page served at `GET /` by the HTTP transport.
//!
//! The page is a bundled HTML template with a single placeholder for the
//! chat webhook URL. Substitution is a literal text replace with no
//! escaping.

/// Placeholder replaced with the configured webhook URL.
pub const WEBHOOK_PLACEHOLDER: &str = "{{CHAT_WEBHOOK_URL}}";

/// Bundled home page template.
pub const HOME_TEMPLATE: &str = include_str!("../../../static/index.html");

/// Substitute every `{{CHAT_WEBHOOK_URL}}` in `template` with `webhook_url`.
///
/// A template without the placeholder is returned unchanged.
pub fn render_home_page(template: &str, webhook_url: &str) -> String {
    template.replace(WEBHOOK_PLACEHOLDER, webhook_url)
}
