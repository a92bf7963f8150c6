use binpack::entities::Item;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rand_distr::{Distribution, Exp};

pub const N_ITEMS: [usize; 3] = [1_000, 10_000, 50_000];

/// Exponentially distributed weights with mean 1.0
pub fn create_items(n_items: usize, seed: u64) -> Vec<Item> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let distr = Exp::new(1.0).expect("valid rate");
    let weights = (0..n_items).map(|_| distr.sample(&mut rng)).collect::<Vec<f64>>();
    Item::from_weights(&weights).expect("sampled weights are finite and non-negative")
}
