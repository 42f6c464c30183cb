//! RNG streams for fuzzing sessions.
//!
//! A run is reproducible from its `u64` seed alone. Shard `n` draws from the
//! ChaCha8 stream keyed by `seed + n` (wrapping), so shard 0 of a sharded run
//! generates the same candidates as an unsharded run with the same seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn shard_rng(global_seed: u64, shard_id: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(global_seed.wrapping_add(shard_id))
}
