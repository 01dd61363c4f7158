//! Uniform selection from an insertion-ordered set.
//!
//! Randomness comes from a [`RandomSource`], so tests can swap the thread
//! RNG for fixed or seeded values and get reproducible draws.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use indexmap::IndexSet;

use crate::quiz::error::DrawError;

/// Produces values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// The thread-local system generator.
#[derive(Debug, Clone, Default)]
pub struct SystemRandom(ThreadRng);

impl SystemRandom {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl RandomSource for SystemRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// A generator seeded up front, for sittings that must be replayable.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a list of values, starting over after the last one.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        // An empty sequence behaves like a constant 0.
        let Some(&value) = self.values.get(self.next) else {
            return 0.0;
        };
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

pub struct UniformSetDrawer<R> {
    source: R,
}

impl UniformSetDrawer<SystemRandom> {
    pub fn system() -> Self {
        Self::new(SystemRandom::new())
    }
}

impl<R: RandomSource> UniformSetDrawer<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Picks one member of `candidates`, each with probability `1 / len`.
    ///
    /// The member is taken at index `floor(r * len)` in insertion order,
    /// where `r` is the next value of the source.
    pub fn draw<'a, T>(&mut self, candidates: &'a IndexSet<T>) -> Result<&'a T, DrawError> {
        if candidates.is_empty() {
            return Err(DrawError::EmptySet);
        }

        let r = self.source.next_unit();
        if !(0.0..1.0).contains(&r) {
            return Err(DrawError::SourceOutOfRange(r));
        }

        let index = (r * candidates.len() as f64).floor() as usize;
        log::trace!("Drew index {} of {} with r = {}", index, candidates.len(), r);
        candidates
            .get_index(index)
            .ok_or(DrawError::SourceOutOfRange(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_two_three() -> IndexSet<u32> {
        IndexSet::from([1, 2, 3])
    }

    #[test]
    fn draw_maps_source_value_to_index() {
        let set = one_two_three();
        assert_eq!(UniformSetDrawer::new(FixedRandom(0.0)).draw(&set), Ok(&1));
        assert_eq!(UniformSetDrawer::new(FixedRandom(0.5)).draw(&set), Ok(&2));
        assert_eq!(UniformSetDrawer::new(FixedRandom(0.999_999)).draw(&set), Ok(&3));
    }

    #[test]
    fn draw_from_empty_set_fails() {
        let empty: IndexSet<u32> = IndexSet::new();
        assert_eq!(
            UniformSetDrawer::new(FixedRandom(0.0)).draw(&empty),
            Err(DrawError::EmptySet)
        );
    }

    #[test]
    fn draw_rejects_values_outside_unit_interval() {
        let set = one_two_three();
        assert_eq!(
            UniformSetDrawer::new(FixedRandom(1.0)).draw(&set),
            Err(DrawError::SourceOutOfRange(1.0))
        );
        assert_eq!(
            UniformSetDrawer::new(FixedRandom(-0.1)).draw(&set),
            Err(DrawError::SourceOutOfRange(-0.1))
        );
        assert!(UniformSetDrawer::new(FixedRandom(f64::NAN)).draw(&set).is_err());
    }

    #[test]
    fn fixed_source_draw_is_idempotent() {
        let set = one_two_three();
        let mut drawer = UniformSetDrawer::new(FixedRandom(0.4));
        let first = *drawer.draw(&set).unwrap();
        for _ in 0..10 {
            assert_eq!(drawer.draw(&set), Ok(&first));
        }
    }

    #[test]
    fn closures_are_random_sources() {
        let set = one_two_three();
        let mut calls = 0;
        let mut drawer = UniformSetDrawer::new(|| {
            calls += 1;
            0.7
        });
        assert_eq!(drawer.draw(&set), Ok(&3));
        drop(drawer);
        assert_eq!(calls, 1);
    }

    #[test]
    fn sequence_source_cycles() {
        let set = one_two_three();
        let mut drawer = UniformSetDrawer::new(SequenceRandom::new(vec![0.0, 0.5]));
        assert_eq!(drawer.draw(&set), Ok(&1));
        assert_eq!(drawer.draw(&set), Ok(&2));
        assert_eq!(drawer.draw(&set), Ok(&1));
    }

    #[test]
    fn seeded_sources_agree() {
        let set: IndexSet<u32> = (0..50).collect();
        let mut left = UniformSetDrawer::new(SeededRandom::new(7));
        let mut right = UniformSetDrawer::new(SeededRandom::new(7));
        for _ in 0..20 {
            assert_eq!(left.draw(&set), right.draw(&set));
        }
    }

    #[test]
    fn system_source_stays_in_range() {
        let set = one_two_three();
        let mut drawer = UniformSetDrawer::system();
        for _ in 0..100 {
            assert!(set.contains(drawer.draw(&set).unwrap()));
        }
    }
}
