//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestCatalog, TRACK_POP_ID};
//!
//! #[test]
//! fn test_catalog_is_written() {
//!     let catalog = TestCatalog::create().unwrap();
//!     assert!(catalog.catalog_path.exists());
//! }
//! ```

mod constants;
mod fixtures;

// Public API - this is what tests import
pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::{reference_submission, test_catalog_entries, TestCatalog};
