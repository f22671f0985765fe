//! Boilerplate strings that leak into metadata responses from the sites the
//! metadata service scrapes. They are treated as absent values.

pub const DENYLIST: &[&str] = &[
    "a.k.a. Cartoon",
    "IMDbPro",
    "See full cast & crew",
    "See more",
];

/// Returns true if `value` is a known noise string.
pub fn is_denylisted(value: &str) -> bool {
    let trimmed = value.trim();
    DENYLIST.iter().any(|d| *d == trimmed)
}

/// Pass a decoded string leaf through the denylist.
///
/// Blank and denylisted values come back as `None`.
pub fn scrub(value: &str) -> Option<&str> {
    if value.trim().is_empty() || is_denylisted(value) {
        None
    } else {
        Some(value)
    }
}
