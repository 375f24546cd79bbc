//! Email format validation backed by a compiled pattern.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::ports::{EmailValidator, PortError};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .unwrap()
});

/// [`EmailValidator`] backed by the WHATWG HTML email pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEmailValidator;

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool, PortError> {
        Ok(EMAIL_RE.is_match(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_addresses() {
        for email in [
            "jane@x.com",
            "jane.doe+tag@sub.gravitalia.com",
            "j_d-42@mail.co",
        ] {
            assert!(
                RegexEmailValidator.is_valid(email).unwrap(),
                "{email} should be accepted"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for email in [
            "",
            "jane",
            "jane@",
            "@x.com",
            "jane doe@x.com",
            "jane@x..com",
            "jane@-x.com",
        ] {
            assert!(
                !RegexEmailValidator.is_valid(email).unwrap(),
                "{email} should be rejected"
            );
        }
    }
}
