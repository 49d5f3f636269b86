//! Domain Services
//!
//! Pure functions over domain types. No I/O.

pub mod html_rewriter;
pub mod key_suggestion;

pub use html_rewriter::{
    RewriteOutcome, RewriteRule, RewriteRules, DEFAULT_LOADER, DEFAULT_MINIFIED_LOADER,
};
pub use key_suggestion::suggest_key;
