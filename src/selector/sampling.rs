//! Truncation of a data list to the requested sample size

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

/// How entries are chosen when the list is longer than the requested count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum SamplingMode {
    /// Keep the first `num` entries in discovery order
    #[default]
    Prefix,
    /// Shuffle with a seeded generator, then keep the first `num`
    Shuffle { seed: u64 },
}

impl SamplingMode {
    /// Reduce `entries` to at most `num` items. `num == 0` means no limit.
    ///
    /// Lists that already fit are returned untouched, whatever the mode.
    pub fn apply(&self, mut entries: Vec<String>, num: usize) -> Vec<String> {
        if num == 0 || num >= entries.len() {
            return entries;
        }

        if let SamplingMode::Shuffle { seed } = *self {
            let mut rng = StdRng::seed_from_u64(seed);
            entries.shuffle(&mut rng);
        }
        entries.truncate(num);
        entries
    }
}
