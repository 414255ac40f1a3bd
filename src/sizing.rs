//! Fingerprint array sizing policy.

/// `m(n, s) = ((32 + ceil(1.23 * n)) / s) * s`: the smallest multiple of `s`
/// at least `32 + ceil(1.23 * n)`, the published safety margin for 3-wise
/// peeling to succeed with high probability.
pub fn fingerprint_array_len(num_keys: usize, segments: usize) -> usize {
    let scaled = (1.23 * num_keys as f64).ceil() as usize;
    let capacity = 32 + scaled;
    (capacity + segments - 1) / segments * segments
}
