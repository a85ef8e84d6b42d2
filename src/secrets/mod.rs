//! Secret detection and display masking.
//!
//! - [`SecretMatcher`] - Matches environment variable names against secret patterns
//! - [`ValueMasker`] / [`mask_value`] - Shortens values for display
//! - [`BUILTIN_PATTERNS`] - Built-in patterns for common secrets
//!
//! # Example
//!
//! ```
//! use adw_health::secrets::{SecretMatcher, ValueMasker};
//!
//! let matcher = SecretMatcher::with_builtins();
//! let masker = ValueMasker::default();
//!
//! let name = "GITHUB_PAT";
//! let value = "ghp_0123456789abcdefghij";
//! let shown = if matcher.is_secret(name) { masker.mask(value) } else { value.to_string() };
//! assert_eq!(shown, "ghp_012345...");
//! ```

pub mod mask;
pub mod pattern;

pub use mask::{mask_value, ValueMasker, DEFAULT_VISIBLE_CHARS, ELLIPSIS};
pub use pattern::{SecretMatcher, SecretPattern, BUILTIN_PATTERNS};
