//! An XOR filter with 16-bit fingerprints, also usable as a perfect-hash
//! index when built with [`Config::with_index`](crate::Config::with_index).
//!
//! Uses <20 bits per entry and has a false positive rate of roughly 0.002%.

use crate::filter_macro::xor_filter_impl;

xor_filter_impl!(Xor16, u16);
