//! Generates one non-generic filter type per fingerprint width. Mirrors the
//! teacher's `xor_from_impl!`/`xor_contains_impl!` macro pair, generalized
//! to a runtime segment count and extended with the origin-tag bookkeeping
//! `index` needs.

/// Stamps out `$name`, a filter storing `$fpty`-wide fingerprints.
macro_rules! xor_filter_impl {
    ($name:ident, $fpty:ty) => {
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
        #[derive(Debug, Clone)]
        pub struct $name {
            pub(crate) seed: u64,
            pub(crate) segments: usize,
            pub(crate) block_length: usize,
            pub(crate) fingerprints: alloc::boxed::Box<[$fpty]>,
            pub(crate) origin_tag: Option<alloc::boxed::Box<[u8]>>,
        }

        impl $name {
            /// Builds a filter from a slice of unique keys using
            /// [`Config::default`]: 3 segments, a random seed, no attempt
            /// budget, `contains`-only (no `index`).
            pub fn from_keys(keys: &[u64]) -> crate::error::Result<Self> {
                Self::from_keys_with_config(keys, crate::config::Config::default())
            }

            /// Builds a filter from a slice of unique keys using an explicit
            /// [`Config`](crate::config::Config).
            pub fn from_keys_with_config(
                keys: &[u64],
                config: crate::config::Config,
            ) -> crate::error::Result<Self> {
                #[cfg(debug_assertions)]
                debug_assert!(
                    crate::util::all_distinct(keys.iter().copied()),
                    concat!(
                        stringify!($name),
                        " filters must be constructed from a collection containing all distinct keys."
                    )
                );

                let peeled = crate::peel::peel(keys, &config)?;
                let segments = config.segments;
                let block_length = peeled.block_length;
                let m = block_length * segments;

                let mut fingerprints = Self::make_fingerprint_block(m, peeled.seed);
                let mut origin_tag: Option<alloc::boxed::Box<[u8]>> = if config.with_index {
                    Some(alloc::vec![0u8; m].into_boxed_slice())
                } else {
                    None
                };

                // Algorithm 4: walk the peeling order in reverse so that,
                // by the time a slot is assigned, every other slot its key
                // touches already holds its final value (peeled earlier in
                // forward order, hence later here) or is still the XOR
                // identity 0 (belongs to a key not yet processed).
                for ki in peeled.stack.iter().rev() {
                    let i = ki.index / block_length;
                    let mut acc = crate::hash::fold(ki.hash) as $fpty;
                    for other in (0..segments).filter(|&o| o != i) {
                        let idx = other * block_length
                            + crate::hash::segment_index(ki.hash, other, segments, block_length);
                        acc ^= fingerprints[idx];
                    }
                    fingerprints[ki.index] = acc;
                    if let Some(tags) = origin_tag.as_mut() {
                        tags[ki.index] = i as u8;
                    }
                }

                Ok(Self {
                    seed: peeled.seed,
                    segments,
                    block_length,
                    fingerprints,
                    origin_tag,
                })
            }

            fn make_fingerprint_block(size: usize, seed: u64) -> alloc::boxed::Box<[$fpty]> {
                // Unused fingerprint slots are never compared against by a
                // real key, but a uniformly-random filler keeps the
                // false-positive rate for probe values that happen to
                // fingerprint to 0 from being skewed upward. Seeded from the
                // resolved construction seed (rather than `thread_rng`) so
                // that a fixed `Config::seed` yields byte-identical filters.
                #[cfg(feature = "uniform-random")]
                {
                    use rand::{Rng, SeedableRng};
                    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
                    (0..size).map(|_| rng.gen()).collect()
                }
                #[cfg(not(feature = "uniform-random"))]
                {
                    let _ = seed;
                    alloc::vec![0 as $fpty; size].into_boxed_slice()
                }
            }

            /// Candidate absolute slot for each segment, plus the target
            /// fingerprint. Shared by `contains` and `index`.
            #[inline]
            fn candidates(&self, key: &u64) -> ([usize; crate::util::MAX_SEGMENTS], $fpty) {
                let hash = crate::hash::mix(*key, self.seed);
                let fp = crate::hash::fold(hash) as $fpty;
                let mut slots = [0usize; crate::util::MAX_SEGMENTS];
                for i in 0..self.segments {
                    slots[i] = i * self.block_length
                        + crate::hash::segment_index(hash, i, self.segments, self.block_length);
                }
                (slots, fp)
            }

            /// Returns `true` if the filter likely contains `key`. No false
            /// negatives for keys the filter was built from; false
            /// positives occur at roughly the rate implied by this type's
            /// fingerprint width.
            pub fn contains(&self, key: &u64) -> bool {
                let (slots, fp) = self.candidates(key);
                let mut acc: $fpty = 0;
                for &slot in slots.iter().take(self.segments) {
                    acc ^= self.fingerprints[slot];
                }
                fp == acc
            }

            /// Returns the unique slot in `[0, len())` that `key` was
            /// assigned during construction, or `None` if `key` was not a
            /// member (or, rarely, if a non-member's fingerprint collides
            /// with another key's slot — callers that need certainty should
            /// follow up with an equality check against the payload stored
            /// at the returned index).
            ///
            /// Always returns `None` if the filter was built without
            /// [`Config::with_index`](crate::config::Config::with_index).
            pub fn index(&self, key: &u64) -> Option<usize> {
                let tags = self.origin_tag.as_ref()?;
                let (slots, fp) = self.candidates(key);

                let mut acc: $fpty = 0;
                for &slot in slots.iter().take(self.segments) {
                    acc ^= self.fingerprints[slot];
                }
                if fp != acc {
                    return None;
                }

                for i in 0..self.segments {
                    let slot = slots[i];
                    if tags[slot] == i as u8 {
                        return Some(slot);
                    }
                }
                None
            }

            /// Number of fingerprint slots, `m`.
            pub fn len(&self) -> usize {
                self.fingerprints.len()
            }

            /// `true` only for a filter built from zero keys, which this
            /// crate's constructors reject — provided for API symmetry with
            /// [`len`](Self::len).
            pub fn is_empty(&self) -> bool {
                self.fingerprints.is_empty()
            }

            /// The seed the filter settled on. Needed to persist and later
            /// reconstruct the filter (see [`Self::to_bytes`]).
            pub fn seed(&self) -> u64 {
                self.seed
            }

            /// The number of hash segments `s` this filter was built with.
            pub fn segments(&self) -> usize {
                self.segments
            }

            /// Raw fingerprint slice, for callers doing their own
            /// serialization.
            pub fn fingerprints(&self) -> &[$fpty] {
                &self.fingerprints
            }

            /// Raw origin-tag slice, if this filter was built
            /// `with_index(true)`.
            pub fn origin_tag(&self) -> Option<&[u8]> {
                self.origin_tag.as_deref()
            }

            const SIGNATURE: [u8; 4] = *b"XPHF";
            const FORMAT_VERSION: u8 = 1;
            const HEADER_LEN: usize = 4 + 1 + 1 + 1 + 8 + 4 + 1;

            /// Serializes the filter to the format documented at the crate
            /// root: a 4-byte signature, a version byte, a fingerprint-width
            /// byte, the segment count, the seed, the fingerprint count, a
            /// has-origin-tag byte, the little-endian fingerprint array, and
            /// (if present) the origin-tag array.
            pub fn to_bytes(&self) -> alloc::vec::Vec<u8> {
                let fp_bytes = core::mem::size_of::<$fpty>();
                let mut buf = alloc::vec::Vec::with_capacity(
                    Self::HEADER_LEN
                        + self.fingerprints.len() * fp_bytes
                        + self.origin_tag.as_ref().map_or(0, |t| t.len()),
                );
                buf.extend_from_slice(&Self::SIGNATURE);
                buf.push(Self::FORMAT_VERSION);
                buf.push((fp_bytes * 8) as u8);
                buf.push(self.segments as u8);
                buf.extend_from_slice(&self.seed.to_le_bytes());
                buf.extend_from_slice(&(self.fingerprints.len() as u32).to_le_bytes());
                buf.push(self.origin_tag.is_some() as u8);
                for fp in self.fingerprints.iter() {
                    buf.extend_from_slice(&fp.to_le_bytes());
                }
                if let Some(tags) = &self.origin_tag {
                    buf.extend_from_slice(tags);
                }
                buf
            }

            /// Deserializes a filter previously written by
            /// [`Self::to_bytes`].
            pub fn from_bytes(buf: &[u8]) -> crate::error::Result<Self> {
                if buf.len() < Self::HEADER_LEN {
                    return Err(crate::error::Error::InvalidConfiguration(
                        "buffer too short for header",
                    ));
                }
                if buf[0..4] != Self::SIGNATURE {
                    return Err(crate::error::Error::InvalidConfiguration(
                        "signature mismatch",
                    ));
                }
                if buf[4] != Self::FORMAT_VERSION {
                    return Err(crate::error::Error::InvalidConfiguration(
                        "unsupported format version",
                    ));
                }
                let fp_bytes = core::mem::size_of::<$fpty>();
                if buf[5] as usize != fp_bytes * 8 {
                    return Err(crate::error::Error::InvalidConfiguration(
                        "fingerprint width mismatch",
                    ));
                }

                let segments = buf[6] as usize;
                if !(2..=crate::util::MAX_SEGMENTS).contains(&segments) {
                    return Err(crate::error::Error::InvalidConfiguration(
                        "segment count out of supported range",
                    ));
                }
                let seed = u64::from_le_bytes(buf[7..15].try_into().unwrap());
                let m = u32::from_le_bytes(buf[15..19].try_into().unwrap()) as usize;
                let has_tags = buf[19] != 0;

                let mut offset = Self::HEADER_LEN;
                let fp_section_len = m * fp_bytes;
                if buf.len() < offset + fp_section_len {
                    return Err(crate::error::Error::InvalidConfiguration(
                        "buffer too short for fingerprints",
                    ));
                }
                let mut fingerprints = alloc::vec::Vec::with_capacity(m);
                for chunk in buf[offset..offset + fp_section_len].chunks_exact(fp_bytes) {
                    fingerprints.push(<$fpty>::from_le_bytes(chunk.try_into().unwrap()));
                }
                offset += fp_section_len;

                let origin_tag = if has_tags {
                    if buf.len() < offset + m {
                        return Err(crate::error::Error::InvalidConfiguration(
                            "buffer too short for origin tags",
                        ));
                    }
                    Some(buf[offset..offset + m].to_vec().into_boxed_slice())
                } else {
                    None
                };

                let block_length = m / segments;

                Ok(Self {
                    seed,
                    segments,
                    block_length,
                    fingerprints: fingerprints.into_boxed_slice(),
                    origin_tag,
                })
            }
        }
    };
}

pub(crate) use xor_filter_impl;
