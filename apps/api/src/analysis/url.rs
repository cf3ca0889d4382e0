use crate::errors::AppError;

/// Normalizes the user-entered site address.
///
/// Inputs that do not start with `http` get `https://` prepended; anything
/// already starting with `http` passes through unchanged.
pub fn normalize_target_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    if trimmed.starts_with("http") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("https://{trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_https() {
        assert_eq!(normalize_target_url("example.com").unwrap(), "https://example.com");
        assert_eq!(
            normalize_target_url("  shop.example.com/blog ").unwrap(),
            "https://shop.example.com/blog"
        );
    }

    #[test]
    fn test_http_prefixed_input_is_unchanged() {
        assert_eq!(normalize_target_url("http://example.com").unwrap(), "http://example.com");
        assert_eq!(normalize_target_url("https://example.com").unwrap(), "https://example.com");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(normalize_target_url("   "), Err(AppError::Validation(_))));
    }
}
