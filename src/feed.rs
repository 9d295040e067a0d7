//! Seeded delivery feed
//!
//! Generates plausible ball-by-ball outcomes for demos and soak runs.
//! Same seed, same innings.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::engine::BallEvent;

/// Relative weights per outcome, out of 100
const OUTCOME_WEIGHTS: [(Draw, u32); 10] = [
    (Draw::Runs(0), 34),
    (Draw::Runs(1), 28),
    (Draw::Runs(2), 9),
    (Draw::Runs(3), 2),
    (Draw::Runs(4), 10),
    (Draw::Runs(6), 4),
    (Draw::Wicket, 5),
    (Draw::Wide, 5),
    (Draw::NoBall, 2),
    (Draw::Runs(5), 1),
];

#[derive(Debug, Clone, Copy)]
enum Draw {
    Runs(u32),
    Wicket,
    Wide,
    NoBall,
}

impl Draw {
    fn to_event(self) -> BallEvent {
        match self {
            Draw::Runs(n) => BallEvent::run(n),
            Draw::Wicket => BallEvent::wicket(),
            Draw::Wide => BallEvent::wide(),
            Draw::NoBall => BallEvent::no_ball(),
        }
    }
}

/// Deterministic stream of ball events
#[derive(Debug, Clone)]
pub struct DeliveryFeed {
    seed: u64,
    rng: Pcg32,
}

impl DeliveryFeed {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next delivery
    pub fn next_ball(&mut self) -> BallEvent {
        let total: u32 = OUTCOME_WEIGHTS.iter().map(|(_, w)| w).sum();
        let mut roll = self.rng.random_range(0..total);
        for (outcome, weight) in OUTCOME_WEIGHTS {
            if roll < weight {
                return outcome.to_event();
            }
            roll -= weight;
        }
        // Unreachable while weights sum to `total`
        BallEvent::run(0)
    }

    /// Draw `n` deliveries
    pub fn take(&mut self, n: usize) -> Vec<BallEvent> {
        (0..n).map(|_| self.next_ball()).collect()
    }
}
