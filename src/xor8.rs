//! An XOR filter with 8-bit fingerprints, also usable as a perfect-hash
//! index when built with [`Config::with_index`](crate::Config::with_index).
//!
//! Uses <10 bits per entry and has a false positive rate of roughly 0.4%.
//!
//! ```
//! use xor_index::{Config, Xor8};
//!
//! let keys: Vec<u64> = (0..1000).collect();
//! let filter = Xor8::from_keys_with_config(&keys, Config::new().with_index(true)).unwrap();
//!
//! // no false negatives, and every key gets a distinct index
//! let mut seen = std::collections::HashSet::new();
//! for key in &keys {
//!     assert!(filter.contains(key));
//!     let idx = filter.index(key).expect("member key must have an index");
//!     assert!(seen.insert(idx), "index must be unique per key");
//! }
//! ```

use crate::filter_macro::xor_filter_impl;

xor_filter_impl!(Xor8, u8);
