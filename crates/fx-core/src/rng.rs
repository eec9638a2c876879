use rand::rngs::StdRng;
use rand::SeedableRng;

pub type FxRng = StdRng;

/// Deterministic when a seed is given, entropy-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> FxRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Derive an independent stream from a base seed.
pub fn derive_seed(seed: u64, stream: u64) -> u64 {
    seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
