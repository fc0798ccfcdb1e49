//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string with the largest supported digit count.
#[must_use]
pub fn full_version() -> String {
    format!(
        "palsel {} (i32, up to {} digits)",
        version(),
        palsel_core::MAX_DIGITS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_mentions_domain() {
        let v = full_version();
        assert!(v.starts_with("palsel "));
        assert!(v.contains("10 digits"));
    }
}
