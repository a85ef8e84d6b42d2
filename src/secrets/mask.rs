//! Display masking for secret values.
//!
//! Values are shortened to a visible prefix followed by an ellipsis. This
//! keeps a secret recognisable in a report without printing it in full; it is
//! not a redaction scheme.

/// Number of leading characters left visible by default.
pub const DEFAULT_VISIBLE_CHARS: usize = 10;

/// Marker appended to a shortened value.
pub const ELLIPSIS: &str = "...";

/// Shorten `value` to its first `visible` characters plus [`ELLIPSIS`].
///
/// Values no longer than `visible` characters are returned unchanged.
/// Counting is by `char`, so multi-byte values are never split mid-character.
///
/// # Example
///
/// ```
/// use adw_health::secrets::mask_value;
///
/// assert_eq!(mask_value("sk-ant-0123456789abcdef", 10), "sk-ant-012...");
/// assert_eq!(mask_value("short", 10), "short");
/// ```
pub fn mask_value(value: &str, visible: usize) -> String {
    match value.char_indices().nth(visible) {
        Some((cut, _)) => format!("{}{}", &value[..cut], ELLIPSIS),
        None => value.to_string(),
    }
}

/// Masks values for display, using a fixed visible prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueMasker {
    visible: usize,
}

impl ValueMasker {
    /// Create a masker that keeps `visible` leading characters.
    pub fn new(visible: usize) -> Self {
        Self { visible }
    }

    /// Mask a value for display.
    pub fn mask(&self, value: &str) -> String {
        mask_value(value, self.visible)
    }
}

impl Default for ValueMasker {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_are_verbatim() {
        assert_eq!(mask_value("", 10), "");
        assert_eq!(mask_value("abc", 10), "abc");
    }

    #[test]
    fn value_of_exactly_visible_length_is_verbatim() {
        assert_eq!(mask_value("0123456789", 10), "0123456789");
    }

    #[test]
    fn long_values_keep_prefix_and_hide_rest() {
        let key = "sk-ant-0123456789abcdef";
        let masked = mask_value(key, 10);

        assert_eq!(masked, "sk-ant-012...");
        assert!(!masked.contains(key));
    }

    #[test]
    fn eleven_characters_are_masked() {
        assert_eq!(mask_value("0123456789A", 10), "0123456789...");
    }

    #[test]
    fn masking_counts_characters_not_bytes() {
        let value = "é".repeat(11);
        assert_eq!(mask_value(&value, 10), format!("{}...", "é".repeat(10)));
        assert_eq!(mask_value("éééé", 10), "éééé");
    }

    #[test]
    fn default_masker_keeps_ten_characters() {
        let masker = ValueMasker::default();
        assert_eq!(masker.mask("0123456789"), "0123456789");
        assert_eq!(
            masker.mask("https://github.com/x/y"),
            "https://gi..."
        );
    }

    #[test]
    fn custom_masker_width() {
        let masker = ValueMasker::new(4);
        assert_eq!(masker.mask("ghp_abcdef"), "ghp_...");
    }
}
