//! Stateless hash helpers shared by the vertex and edge model.
//!
//! All functions are deterministic across runs: they use a `DefaultHasher`
//! created with fixed keys rather than a randomly seeded `RandomState`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hashes a single value
pub fn make_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Folds `hash` into `seed` (the boost `hash_combine` mixing step)
pub fn hash_combine(seed: u64, hash: u64) -> u64 {
    seed ^ hash
        .wrapping_add(0x9e37_79b9)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Combines the hashes of a sequence of values. Order matters.
pub fn make_hash_seq<I>(values: I) -> u64
where
    I: IntoIterator,
    I::Item: Hash,
{
    values
        .into_iter()
        .fold(0, |seed, value| hash_combine(seed, make_hash(&value)))
}

/// Combines the hashes of two values so that swapping them yields the same result
pub fn make_symmetric_hash<A: Hash + ?Sized, B: Hash + ?Sized>(first: &A, second: &B) -> u64 {
    let h1 = make_hash(first);
    let h2 = make_hash(second);
    hash_combine(h1.min(h2), h1.max(h2))
}

/// Order-sensitive hash over heterogeneous values.
///
/// ```
/// use graph_toolkit::make_hash;
///
/// let a = make_hash!("Hello", 42u32);
/// let b = make_hash!(42u32, "Hello");
/// assert_ne!(a, b);
/// ```
#[macro_export]
macro_rules! make_hash {
    ($value:expr) => {
        $crate::hash::make_hash(&$value)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let mut seed = $crate::hash::make_hash(&$first);
        $(
            seed = $crate::hash::hash_combine(seed, $crate::hash::make_hash(&$rest));
        )+
        seed
    }};
}
