//! Process-wide template filename prefix.

use std::sync::OnceLock;

/// Environment variable holding the template filename prefix.
pub const PREFIX_ENV: &str = "FLEXLOC_TEMPLATE_PREFIX";

static TEMPLATE_PREFIX: OnceLock<String> = OnceLock::new();

/// The template filename prefix, read from [`PREFIX_ENV`] on first use.
///
/// Later changes to the environment are not observed.
pub fn template_prefix() -> &'static str {
    TEMPLATE_PREFIX.get_or_init(|| read_prefix(std::env::var(PREFIX_ENV).ok()))
}

/// Turn a raw environment value into a prefix. Unset means empty.
pub fn read_prefix(raw: Option<String>) -> String {
    raw.map(|value| value.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_prefix_is_empty() {
        assert_eq!(read_prefix(None), "");
    }

    #[test]
    fn prefix_is_trimmed() {
        assert_eq!(read_prefix(Some(" theme- \n".into())), "theme-");
    }

    #[test]
    fn prefix_is_memoized() {
        let first = template_prefix();
        let second = template_prefix();
        assert!(std::ptr::eq(first, second));
    }
}
