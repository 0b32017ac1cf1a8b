use crate::DomainError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A domain name compared in canonical fully-qualified form.
///
/// Canonical form is trimmed, ASCII lower-cased and carries exactly one
/// trailing dot, so `"Host.Orbital"`, `"host.orbital."` and
/// `" host.orbital.. "` all compare and hash equal. The casing the name was
/// given with is kept separately as its presentation form and is what goes
/// back on the wire.
#[derive(Debug, Clone)]
pub struct DomainName {
    canonical: Arc<str>,
    presentation: Arc<str>,
}

impl DomainName {
    /// Normalizes `name` without checking label syntax.
    ///
    /// Storage and lookup both compare through the canonical form so they
    /// can never disagree on casing or trailing dots.
    pub fn new(name: &str) -> Self {
        let trimmed = name.trim().trim_end_matches('.');
        if trimmed.is_empty() {
            return Self::root();
        }

        let mut presentation = String::with_capacity(trimmed.len() + 1);
        presentation.push_str(trimmed);
        presentation.push('.');

        if presentation.bytes().any(|b| b.is_ascii_uppercase()) {
            let canonical = presentation.to_ascii_lowercase();
            Self {
                canonical: canonical.into(),
                presentation: presentation.into(),
            }
        } else {
            let shared: Arc<str> = presentation.into();
            Self {
                canonical: shared.clone(),
                presentation: shared,
            }
        }
    }

    /// Normalizes `name` and rejects anything that is not a usable host name.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let normalized = Self::new(name);
        if normalized.is_root() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is empty or the root name",
                name.trim()
            )));
        }

        let bare = normalized.without_trailing_dot();
        if bare.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' exceeds {} characters",
                bare, MAX_NAME_LEN
            )));
        }

        for label in bare.split('.') {
            validate_label(label).map_err(|reason| {
                DomainError::InvalidDomainName(format!("'{}': {}", bare, reason))
            })?;
        }

        Ok(normalized)
    }

    pub fn root() -> Self {
        let root: Arc<str> = Arc::from(".");
        Self {
            canonical: root.clone(),
            presentation: root,
        }
    }

    pub fn is_root(&self) -> bool {
        &*self.canonical == "."
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// The name with the casing it arrived in, e.g. `HeLLo.OrBiTaL.`.
    pub fn presentation(&self) -> &str {
        &self.presentation
    }

    /// The name as most people write it, e.g. `hello.orbital`.
    pub fn without_trailing_dot(&self) -> &str {
        if self.is_root() {
            &self.canonical
        } else {
            self.canonical.trim_end_matches('.')
        }
    }
}

impl PartialEq for DomainName {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for DomainName {}

impl Hash for DomainName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for DomainName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DomainName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

fn validate_label(label: &str) -> Result<(), &'static str> {
    if label.is_empty() {
        return Err("empty label");
    }
    if label.len() > MAX_LABEL_LEN {
        return Err("label longer than 63 characters");
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err("label starts or ends with a hyphen");
    }
    if !label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err("label contains invalid characters");
    }
    Ok(())
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl From<&str> for DomainName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DomainName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases_and_appends_dot() {
        assert_eq!(DomainName::new("Hello.Orbital").as_str(), "hello.orbital.");
    }

    #[test]
    fn test_new_collapses_trailing_dots() {
        assert_eq!(DomainName::new("hello.orbital..").as_str(), "hello.orbital.");
    }

    #[test]
    fn test_empty_is_root() {
        assert!(DomainName::new("").is_root());
        assert!(DomainName::new("  .  ").is_root());
    }

    #[test]
    fn test_presentation_keeps_casing() {
        let name = DomainName::new("HeLLo.OrBiTaL");
        assert_eq!(name.presentation(), "HeLLo.OrBiTaL.");
        assert_eq!(name.as_str(), "hello.orbital.");
        assert_eq!(name, DomainName::new("hello.orbital"));
    }

    #[test]
    fn test_parse_rejects_hyphen_edges() {
        assert!(DomainName::parse("-bad.orbital").is_err());
        assert!(DomainName::parse("bad-.orbital").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_label() {
        assert!(DomainName::parse("a..orbital").is_err());
    }
}
