#![forbid(unsafe_code)]
//! Serialize localization resource bundles to script-loadable JS files.
//!
//! A build-time code-generation step: given a resource bundle (named groups of
//! key→localized-string entries, keyed by culture), write one deterministic
//! `.js` file per configured culture, each containing one object literal per
//! group for consumption by client-side code.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resjs::GlobalizationTask;
//!
//! let summary = GlobalizationTask::new(
//!     "Resources.bundle.json",
//!     "wwwroot/scripts",
//!     vec!["en".to_string(), "pt-BR".to_string()],
//! )
//! .run()?;
//! # Ok::<(), resjs::Error>(())
//! ```
//!
//! This produces `Globalizations.en.js` and `Globalizations.pt-BR.js`, each
//! assigning one object per discovered group:
//!
//! ```js
//! globalization.common = {
//!   'ok': 'Yes',
//!   'cancel': 'No'
//! };
//! ```
//!
//! # Behavior
//!
//! - Groups are discovered once per run and reused across all cultures;
//!   output ordering follows the bundle's declaration order and is
//!   byte-reproducible across runs.
//! - A key with no value for a culture is emitted with a visible not-found
//!   sentinel — never silently substituted from another culture.
//! - Values are newline-escaped and, by default, HTML entity-encoded.

pub mod bundle;
pub mod discovery;
pub mod error;
pub mod normalize;
pub mod resx;
pub mod serializer;
pub mod task;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    bundle::{ResourceBundle, ResourceEntry, ResourceGroup},
    discovery::{GroupFilter, KeyPolicy, RESERVED_KEYS, discover},
    error::Error,
    normalize::{normalize_key, normalize_value},
    serializer::{SerializeOptions, write_culture},
    task::{GlobalizationTask, RunSummary},
};
