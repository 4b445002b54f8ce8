//! Phone and email values with their derived link forms

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProfileError;

/// A North American phone number stored as its ten national digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    /// Parse any common punctuation of a NANP number into the canonical form.
    ///
    /// Accepts ten digits, or eleven with a leading country code `1`.
    pub fn parse(input: &str) -> Result<Self, ProfileError> {
        let invalid = |reason: &str| ProfileError::InvalidPhone {
            value: input.to_string(),
            reason: reason.to_string(),
        };

        if let Some(c) = input
            .chars()
            .find(|c| !c.is_ascii_digit() && !matches!(c, ' ' | '-' | '.' | '(' | ')' | '+'))
        {
            return Err(invalid(&format!("unexpected character '{}'", c)));
        }

        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        let national = match digits.len() {
            10 => digits,
            11 if digits.starts_with('1') => digits[1..].to_string(),
            n => return Err(invalid(&format!("expected 10 digits, found {}", n))),
        };

        // Area code and exchange never start with 0 or 1
        if national.starts_with(['0', '1']) || national[3..].starts_with(['0', '1']) {
            return Err(invalid("area code and exchange must start with 2-9"));
        }

        Ok(Self { digits: national })
    }

    /// Display form, e.g. `724-972-3957`
    pub fn display(&self) -> String {
        format!(
            "{}-{}-{}",
            &self.digits[0..3],
            &self.digits[3..6],
            &self.digits[6..]
        )
    }

    /// E.164 form, e.g. `+17249723957`
    pub fn e164(&self) -> String {
        format!("+1{}", self.digits)
    }

    /// `tel:` URI derived from the E.164 form
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.e164())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ProfileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.display()
    }
}

/// An email address with a dotted domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(input: &str) -> Result<Self, ProfileError> {
        let value = input.trim();
        let invalid = || ProfileError::InvalidEmail {
            value: input.to_string(),
        };

        if value.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
            return Err(invalid());
        }

        Ok(Self(value.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `mailto:` URI for the address
    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.0)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ProfileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
