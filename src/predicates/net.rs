//! Format checks: email addresses and URLs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::Predicate;
use crate::value::Value;

// Length caps checked before the pattern ever runs.
const EMAIL_LOCAL_MAX: usize = 64;
const EMAIL_DOMAIN_MAX: usize = 255;
const EMAIL_LABEL_MAX: usize = 63;

// Structural shape only; lengths are enforced separately above. Anchored,
// case-insensitive, dotted-atom local part and a dotted domain with at
// least two labels.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([a-z0-9]([a-z0-9-]*[a-z0-9])?\.)+[a-z]([a-z0-9-]*[a-z])?$",
    )
    .unwrap()
});

fn email_shaped(s: &str) -> bool {
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.chars().count() > EMAIL_LOCAL_MAX {
        return false;
    }
    if domain.chars().count() > EMAIL_DOMAIN_MAX {
        return false;
    }
    if domain.split('.').any(|label| label.chars().count() > EMAIL_LABEL_MAX) {
        return false;
    }
    EMAIL_RE.is_match(s)
}

pub fn is_email() -> Predicate {
    Predicate::new(|v| v.as_str().is_some_and(email_shaped))
}

/// Well-formed per a trailing parse; nothing is checked beyond that.
pub fn is_url() -> Predicate {
    Predicate::new(|v| v.as_str().is_some_and(|s| url::Url::parse(s).is_ok()))
}
