//! Newsletter signup input checks

/// Reasons a newsletter address is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsletterError {
    #[error("Please enter your email address")]
    Empty,

    #[error("Please enter a valid email address")]
    Invalid,
}

/// Trims the address and checks that it has the shape `local@domain.tld`.
pub fn validate_email(input: &str) -> Result<String, NewsletterError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(NewsletterError::Empty);
    }

    let (local, domain) = email.split_once('@').ok_or(NewsletterError::Invalid)?;
    let well_formed = !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty() && !tld.ends_with('.'));

    if well_formed {
        Ok(email.to_string())
    } else {
        Err(NewsletterError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert_eq!(
            validate_email("  jane@example.com "),
            Ok("jane@example.com".to_string())
        );
        assert!(validate_email("a.b+news@mail.example.co.uk").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_email(""), Err(NewsletterError::Empty));
        assert_eq!(validate_email("   "), Err(NewsletterError::Empty));
    }

    #[test]
    fn test_rejects_malformed() {
        for input in [
            "jane",
            "@example.com",
            "jane@",
            "jane@example",
            "jane@.com",
            "jane@example.",
            "jane@@example.com",
            "ja ne@example.com",
        ] {
            assert_eq!(validate_email(input), Err(NewsletterError::Invalid), "{}", input);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NewsletterError::Invalid.to_string(),
            "Please enter a valid email address"
        );
    }
}
