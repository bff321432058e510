use crate::utils::error::{CatalogError, Result};
use url::Url;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Detail page route for a slug, mounted under the site's base path.
///
/// `None`, `""` and `"/"` all mount at the root; a trailing slash on the base
/// path is ignored.
pub fn detail_route(base_path: Option<&str>, slug: &str) -> String {
    let base = base_path.unwrap_or("").trim_end_matches('/');
    format!("{}/projects/{}", base, slug)
}

/// Click-to-chat link with the message pre-filled.
///
/// The phone number may carry a leading `+` and the usual separators
/// (spaces, dashes, dots, parentheses); only the digits end up in the link.
/// The message is form-encoded into the `text` query parameter.
pub fn whatsapp_link(phone: &str, message: Option<&str>) -> Result<String> {
    let digits: String = phone
        .trim()
        .trim_start_matches('+')
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CatalogError::InvalidConfigValueError {
            field: "site.contact.whatsapp_phone".to_string(),
            value: phone.to_string(),
            reason: "Phone number must contain only digits after an optional '+'".to_string(),
        });
    }

    let base = format!("{}/{}", WHATSAPP_BASE, digits);
    let url = match message {
        Some(text) if !text.is_empty() => Url::parse_with_params(&base, &[("text", text)]),
        _ => Url::parse(&base),
    }
    .map_err(|e| CatalogError::InvalidConfigValueError {
        field: "site.contact.whatsapp_phone".to_string(),
        value: phone.to_string(),
        reason: format!("Invalid link: {}", e),
    })?;

    Ok(url.into())
}
