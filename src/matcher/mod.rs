// Prefix matching and donor selection for front coding.
//
// This module provides:
// - The longest-common-prefix primitive (char- and byte-measured)
// - The best-donor scan over previously processed lines

pub mod prefix;
pub mod selector;

// Re-export key types for convenience.
pub use prefix::{PrefixLen, common_prefix, longest_common_prefix, prefix_end};
pub use selector::{Donor, select_donor};
