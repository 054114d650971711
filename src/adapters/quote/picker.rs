use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use std::sync::Mutex;

/// Chooses which catalog entry to serve. `len` is always non-zero.
pub trait QuotePicker: Send + Sync + Debug {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl QuotePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform but reproducible: the same seed yields the same sequence.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl QuotePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Always returns the same index; the adapter rejects it if out of range.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl QuotePicker for FixedPicker {
    fn pick(&self, _len: usize) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_picker_stays_in_range() {
        let picker = RandomPicker;
        for _ in 0..1000 {
            assert!(picker.pick(10) < 10);
        }
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn seeded_pickers_agree() {
        let a = SeededPicker::new(42);
        let b = SeededPicker::new(42);
        let left: Vec<_> = (0..50).map(|_| a.pick(10)).collect();
        let right: Vec<_> = (0..50).map(|_| b.pick(10)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn seeded_picker_covers_range_roughly_uniformly() {
        let picker = SeededPicker::new(7);
        let mut counts = [0usize; 10];
        let draws = 20_000;
        for _ in 0..draws {
            counts[picker.pick(10)] += 1;
        }
        // expected 2000 per bucket
        for (index, count) in counts.iter().enumerate() {
            assert!(
                (1700..=2300).contains(count),
                "index {index} drawn {count} times"
            );
        }
    }

    #[test]
    fn fixed_picker_ignores_len() {
        assert_eq!(FixedPicker(3).pick(10), 3);
        assert_eq!(FixedPicker(3).pick(2), 3);
    }
}
