//! Input validation for chat messages and settings

use crate::session::PLATFORMS;

/// Validates a message before it is sent
pub fn validate_message(msg: &str) -> Result<(), String> {
    if msg.trim().is_empty() {
        return Err("Message cannot be empty".to_string());
    }

    if msg.contains('\0') {
        return Err("Message contains invalid characters".to_string());
    }

    Ok(())
}

/// Trims a message and drops characters that should never reach the server
pub fn sanitize_message(msg: &str) -> String {
    msg.trim()
        .chars()
        .filter(|&c| c != '\r' && c != '\0')
        .collect()
}

/// Validates the chat endpoint URL (http or https, non-empty host)
pub fn validate_endpoint(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("Endpoint cannot be empty".to_string());
    }

    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| format!("Endpoint must start with http:// or https://: {}", url))?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() || host.starts_with(':') {
        return Err("Endpoint host cannot be empty".to_string());
    }

    if url.contains(char::is_whitespace) {
        return Err("Endpoint cannot contain whitespace".to_string());
    }

    Ok(())
}

/// Normalises a platform name, rejecting unknown ones
pub fn validate_platform(name: &str) -> Result<String, String> {
    let platform = name.trim().to_lowercase();
    if PLATFORMS.contains(&platform.as_str()) {
        Ok(platform)
    } else {
        Err(format!(
            "Unknown platform '{}' (expected one of: {})",
            name.trim(),
            PLATFORMS.join(", ")
        ))
    }
}

/// Validates a highlighted term from the settings file
pub fn validate_keyword(term: &str) -> Result<(), String> {
    if term.trim().is_empty() {
        return Err("Keyword cannot be empty".to_string());
    }

    if term.contains(|c: char| c.is_control()) {
        return Err("Keyword contains control characters".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_message() {
        assert!(validate_message("Hello, BUDDY!").is_ok());
        assert!(validate_message("Line1\nLine2").is_ok());
        assert!(validate_message("Test message with 日本語").is_ok());

        assert!(validate_message("").is_err());
        assert!(validate_message("   \n\t").is_err());
        assert!(validate_message("nul\0byte").is_err());
    }

    #[test]
    fn test_sanitize_message() {
        assert_eq!(sanitize_message("  Hello, world!  "), "Hello, world!");
        assert_eq!(sanitize_message("Line1\r\nLine2"), "Line1\nLine2");
        assert_eq!(sanitize_message("a\0b"), "ab");
    }

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("http://127.0.0.1:5005/api/chat").is_ok());
        assert!(validate_endpoint("https://buddy.example").is_ok());

        assert!(validate_endpoint("").is_err());
        assert!(validate_endpoint("127.0.0.1:5005").is_err());
        assert!(validate_endpoint("http://").is_err());
        assert!(validate_endpoint("http://:5005/api").is_err());
        assert!(validate_endpoint("http://host/a b").is_err());
    }

    #[test]
    fn test_validate_platform() {
        assert_eq!(validate_platform("Instagram").unwrap(), "instagram");
        assert_eq!(validate_platform(" youtube ").unwrap(), "youtube");
        assert!(validate_platform("myspace").is_err());
        assert!(validate_platform("").is_err());
    }

    #[test]
    fn test_validate_keyword() {
        assert!(validate_keyword("engagement").is_ok());
        assert!(validate_keyword("social media").is_ok());
        assert!(validate_keyword(" ").is_err());
        assert!(validate_keyword("tab\there").is_err());
    }
}
