//! Validation of server settings before anything binds or connects.

use std::net::SocketAddr;

/// Largest accepted upscale factor. A 12x12 avatar at 64x is 768x768.
pub const MAX_SCALE: u32 = 64;

/// Validate the upscale factor.
///
/// # Errors
///
/// Returns an error if the scale is outside `1..=MAX_SCALE`.
pub fn validate_scale(scale: u32) -> Result<(), String> {
    if (1..=MAX_SCALE).contains(&scale) {
        Ok(())
    } else {
        Err(format!("Unsupported scale {scale}. Valid: 1 to {MAX_SCALE}"))
    }
}

/// Validate and normalize the skin API base URL (trailing `/` removed).
///
/// # Errors
///
/// Returns an error if the URL is not `http://` or `https://`.
pub fn normalize_upstream(url: &str) -> Result<String, String> {
    let trimmed = url.trim().trim_end_matches('/');
    let host = trimmed.strip_prefix("https://").or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(h) if !h.is_empty() => Ok(trimmed.to_string()),
        _ => Err(format!("Unsupported upstream URL '{url}'. Expected http:// or https://")),
    }
}

/// Parse the listen address.
///
/// # Errors
///
/// Returns an error if the address is not `host:port`.
pub fn parse_bind(bind: &str) -> Result<SocketAddr, String> {
    bind.parse().map_err(|e| format!("Invalid bind address '{bind}': {e}"))
}
