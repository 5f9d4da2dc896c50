//! Static backdrop: the star field and the cloud layer.
//!
//! Both are sampled once at startup. The same seed always produces the
//! same sky.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skyline_types::{Cloud, CloudSize, Star};

use crate::config::SceneConfig;

const STAR_SALT: u64 = 0x5354_4152;
const CLOUD_SALT: u64 = 0x434c_4f55;

const TWINKLE_MAX_DELAY_SECONDS: f64 = 3.0;
const TWINKLE_MIN_DURATION_SECONDS: f64 = 2.0;
const TWINKLE_MAX_DURATION_SECONDS: f64 = 4.0;

/// Sample `config.star_count` stars scattered over the upper sky.
pub fn star_field(config: &SceneConfig, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed ^ STAR_SALT);
    (0..config.star_count)
        .map(|_| Star {
            x_percent: rng.random_range(0.0..100.0),
            y_percent: rng.random_range(0.0..config.star_max_top_percent),
            twinkle_delay_seconds: rng.random_range(0.0..TWINKLE_MAX_DELAY_SECONDS),
            twinkle_duration_seconds: rng
                .random_range(TWINKLE_MIN_DURATION_SECONDS..TWINKLE_MAX_DURATION_SECONDS),
        })
        .collect()
}

/// Sample `config.cloud_count` clouds of mixed sizes.
pub fn cloud_layer(config: &SceneConfig, seed: u64) -> Vec<Cloud> {
    let mut rng = StdRng::seed_from_u64(seed ^ CLOUD_SALT);
    (0..config.cloud_count)
        .map(|_| {
            let size_idx = rng.random_range(0..CloudSize::ALL.len());
            Cloud {
                size: CloudSize::ALL
                    .get(size_idx)
                    .copied()
                    .unwrap_or(CloudSize::Medium),
                top_percent: rng.random_range(0.0..config.cloud_max_top_percent),
                drift_delay_seconds: rng.random_range(0.0..config.cloud_max_delay_seconds),
            }
        })
        .collect()
}
