//! `xor-index`: an XOR filter that doubles as a minimal-ish perfect hash
//! index over a static set of 64-bit keys.
//!
//! Construction runs a randomized 3-wise (by default) hypergraph peeling
//! algorithm, retrying with a rehashed seed on failure, then encodes a
//! fingerprint array via a single reverse pass over the peeling order. The
//! resulting filter supports:
//!
//! - [`Xor8::contains`]/[`Xor16::contains`]/[`Xor32::contains`]: probabilistic
//!   membership with no false negatives and a false-positive rate of roughly
//!   `2^-W` for a `W`-bit fingerprint.
//! - [`Xor8::index`]/[`Xor16::index`]/[`Xor32::index`]: a perfect hash into
//!   `[0, len())`, available when the filter was built with
//!   [`Config::with_index`]. Each member key gets a distinct slot; absence
//!   and fingerprint collisions both return `None`, so callers that need
//!   certainty should follow up with an equality check against whatever
//!   payload they store at the returned index.
//!
//! This crate consumes only `u64` keys and assumes the caller has
//! deduplicated them; it does not support inserting or removing keys after
//! construction, and construction is single-threaded.
//!
//! ```
//! use xor_index::Xor8;
//!
//! let keys: Vec<u64> = (0..10_000).collect();
//! let filter = Xor8::from_keys(&keys).unwrap();
//! assert!(keys.iter().all(|k| filter.contains(k)));
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
mod filter_macro;
mod hash;
mod peel;
mod sizing;
mod splitmix64;
mod util;
mod xor16;
mod xor32;
mod xor8;

pub use config::Config;
pub use error::{Error, Result};
pub use sizing::fingerprint_array_len;
pub use xor16::Xor16;
pub use xor32::Xor32;
pub use xor8::Xor8;
