use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::question::QuizItem;
use crate::models::session::RulesError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    #[error("cannot build a pack from an empty question bank")]
    EmptyBank,
    #[error("a pack needs at least one item")]
    ZeroCount,
    #[error("invalid session rules: {0}")]
    InvalidRules(#[from] RulesError),
}

/// Source of random permutations for pack building.
pub trait Permuter: Send {
    fn permute<T>(&mut self, items: &mut [T]);
}

/// Uniform shuffle driven by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngPermuter<R> {
    rng: R,
}

impl<R: Rng + Send> RngPermuter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPermuter<StdRng> {
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RngPermuter<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng + Send> Permuter for RngPermuter<R> {
    fn permute<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Fixed-length, order-randomized items for one session. Never changes once built.
#[derive(Debug, Clone)]
pub struct Pack<I> {
    items: Vec<I>,
}

impl<I: QuizItem> Pack<I> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&I> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &I> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.id()).collect()
    }
}

/// Samples `count` items from `bank`.
///
/// A bank at least `count` long is shuffled and truncated (no repeats). A
/// shorter bank is cycled in its original order up to `count` items and the
/// result shuffled, so items repeat.
pub fn build_pack<I, P>(bank: &[I], count: usize, permuter: &mut P) -> Result<Pack<I>, PackError>
where
    I: QuizItem,
    P: Permuter,
{
    if bank.is_empty() {
        return Err(PackError::EmptyBank);
    }
    if count == 0 {
        return Err(PackError::ZeroCount);
    }

    let items = if bank.len() >= count {
        let mut items = bank.to_vec();
        permuter.permute(&mut items);
        items.truncate(count);
        items
    } else {
        tracing::debug!(
            "Bank of {} {} items is smaller than pack size {}, repeating items",
            bank.len(),
            I::MODE.as_str(),
            count
        );
        let mut items: Vec<I> = (0..count).map(|i| bank[i % bank.len()].clone()).collect();
        permuter.permute(&mut items);
        items
    };

    Ok(Pack { items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::TrueFalseItem;
    use std::collections::{HashMap, HashSet};

    /// Leaves the order untouched.
    struct Identity;

    impl Permuter for Identity {
        fn permute<T>(&mut self, _items: &mut [T]) {}
    }

    struct Reverse;

    impl Permuter for Reverse {
        fn permute<T>(&mut self, items: &mut [T]) {
            items.reverse();
        }
    }

    fn bank(size: u32) -> Vec<TrueFalseItem> {
        (1..=size)
            .map(|id| TrueFalseItem::new(id, format!("statement {}", id), id % 2 == 0).unwrap())
            .collect()
    }

    #[test]
    fn empty_bank_is_an_error() {
        let err = build_pack::<TrueFalseItem, _>(&[], 10, &mut Identity).unwrap_err();
        assert_eq!(err, PackError::EmptyBank);
    }

    #[test]
    fn zero_count_is_an_error() {
        let err = build_pack(&bank(5), 0, &mut Identity).unwrap_err();
        assert_eq!(err, PackError::ZeroCount);
    }

    #[test]
    fn large_bank_gives_distinct_items() {
        let bank = bank(20);
        let pack = build_pack(&bank, 10, &mut RngPermuter::seeded(7)).unwrap();

        assert_eq!(pack.len(), 10);
        let ids: HashSet<u32> = pack.ids().into_iter().collect();
        assert_eq!(ids.len(), 10);
        assert!(ids.iter().all(|id| (1..=20).contains(id)));
    }

    #[test]
    fn large_bank_takes_prefix_of_permutation() {
        let bank = bank(20);
        let pack = build_pack(&bank, 10, &mut Reverse).unwrap();
        assert_eq!(pack.ids(), vec![20, 19, 18, 17, 16, 15, 14, 13, 12, 11]);
    }

    #[test]
    fn small_bank_cycles_in_original_order_before_shuffle() {
        let bank = bank(3);
        let pack = build_pack(&bank, 10, &mut Identity).unwrap();
        assert_eq!(pack.ids(), vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn small_bank_still_fills_the_pack() {
        let bank = bank(3);
        let pack = build_pack(&bank, 10, &mut RngPermuter::default()).unwrap();

        assert_eq!(pack.len(), 10);
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for id in pack.ids() {
            *counts.entry(id).or_default() += 1;
        }
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|n| *n >= 3));
    }

    #[test]
    fn single_item_bank_repeats_it() {
        let bank = bank(1);
        let pack = build_pack(&bank, 10, &mut Identity).unwrap();
        assert_eq!(pack.ids(), vec![1; 10]);
    }
}
