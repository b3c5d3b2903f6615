use rand::Rng;

/// In-place Fisher–Yates (Durstenfeld) shuffle.
///
/// Walks `i` from the last index down to `1`, drawing `j` uniformly from `0..=i`
/// and swapping. Every permutation is equally likely given a uniform RNG, and the
/// pass is linear in the slice length.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
