use rand::Rng;

/// In-place uniform shuffle (Fisher–Yates).
///
/// Walks the slice from the back, swapping each position with a
/// uniformly chosen index at or below it. Every permutation is equally
/// likely given a uniform generator.
pub trait Shuffle {
    /// Shuffle with the thread-local generator.
    fn shuffle(&mut self);

    /// Shuffle with a caller-supplied generator.
    ///
    /// Deterministic for a seeded generator, which is what tests use.
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

impl<T> Shuffle for [T] {
    fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut n = self.len();
        while n > 1 {
            let k = rng.gen_range(0..n);
            n -= 1;
            self.swap(k, n);
        }
    }
}
