//! Street traffic: cars and pedestrians crossing the viewport.
//!
//! The planner keeps a list of active participants keyed by the elapsed
//! time at which they leave the scene. Every few simulated seconds it rolls
//! for a new car and, during pedestrian hours, a new pedestrian, subject to
//! per-kind caps. The opening cars are scheduled at fixed delays so the
//! street is never empty for long after startup.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skyline_types::{CarColor, DayState, Heading, TrafficKind, TrafficSpawn};
use tracing::debug;

use crate::config::SceneConfig;

const TRAFFIC_SALT: u64 = 0x5452_4146;

/// Extra distance past the viewport edges an element travels before removal.
const OFFSCREEN_MARGIN_PX: f64 = 100.0;

/// Seeded planner for cars and pedestrians.
#[derive(Debug, Clone)]
pub struct TrafficPlanner {
    config: SceneConfig,
    rng: StdRng,
    active: Vec<TrafficSpawn>,
    scheduled_cars: VecDeque<f64>,
    next_check_at: f64,
}

impl TrafficPlanner {
    /// Create a planner with the opening cars scheduled.
    pub fn new(config: &SceneConfig, seed: u64) -> Self {
        let mut scheduled: Vec<f64> = config.initial_car_delays_seconds.clone();
        scheduled.sort_by(f64::total_cmp);
        Self {
            config: config.clone(),
            rng: StdRng::seed_from_u64(seed ^ TRAFFIC_SALT),
            active: Vec::new(),
            scheduled_cars: scheduled.into(),
            next_check_at: 0.0,
        }
    }

    /// Participants still crossing the scene.
    pub fn active(&self) -> &[TrafficSpawn] {
        &self.active
    }

    /// Number of active cars.
    pub fn active_cars(&self) -> usize {
        self.active
            .iter()
            .filter(|spawn| matches!(spawn.kind, TrafficKind::Car { .. }))
            .count()
    }

    /// Number of active pedestrians.
    pub fn active_pedestrians(&self) -> usize {
        self.active
            .iter()
            .filter(|spawn| matches!(spawn.kind, TrafficKind::Pedestrian { .. }))
            .count()
    }

    /// Advance to `elapsed` and return the participants that enter now.
    ///
    /// Participants whose crossing has finished are dropped first, so caps
    /// apply to what is actually on screen.
    pub fn plan(&mut self, elapsed: f64, day: &DayState) -> Vec<TrafficSpawn> {
        self.active.retain(|spawn| spawn.despawn_at() > elapsed);

        let mut spawns = Vec::new();

        while self
            .scheduled_cars
            .front()
            .is_some_and(|&at| at <= elapsed)
        {
            self.scheduled_cars.pop_front();
            spawns.push(self.spawn_car(elapsed));
        }

        if elapsed >= self.next_check_at {
            let gap = self.rng.random_range(
                self.config.traffic_check_min_seconds..self.config.traffic_check_max_seconds,
            );
            self.next_check_at = elapsed + gap;

            if below_cap(self.active_cars(), self.config.max_cars)
                && self.rng.random_bool(self.config.car_spawn_probability)
            {
                spawns.push(self.spawn_car(elapsed));
            }

            if day.pedestrian_hours()
                && below_cap(self.active_pedestrians(), self.config.max_pedestrians)
                && self.rng.random_bool(self.config.pedestrian_spawn_probability)
            {
                spawns.push(self.spawn_pedestrian(elapsed));
            }
        }

        for spawn in &spawns {
            debug!(
                kind = ?spawn.kind,
                speed = spawn.speed_px_per_second,
                despawn_at = spawn.despawn_at(),
                "Traffic spawned"
            );
        }

        spawns
    }

    fn spawn_car(&mut self, elapsed: f64) -> TrafficSpawn {
        let color_idx = self.rng.random_range(0..CarColor::ALL.len());
        let color = CarColor::ALL
            .get(color_idx)
            .copied()
            .unwrap_or(CarColor::Default);
        let speed = self
            .rng
            .random_range(self.config.car_speed_min_px..self.config.car_speed_max_px);
        self.admit(TrafficKind::Car { color }, elapsed, speed)
    }

    fn spawn_pedestrian(&mut self, elapsed: f64) -> TrafficSpawn {
        let heading = if self.rng.random_bool(0.5) {
            Heading::Right
        } else {
            Heading::Left
        };
        let speed = self.rng.random_range(
            self.config.pedestrian_speed_min_px..self.config.pedestrian_speed_max_px,
        );
        self.admit(TrafficKind::Pedestrian { heading }, elapsed, speed)
    }

    fn admit(&mut self, kind: TrafficKind, elapsed: f64, speed: f64) -> TrafficSpawn {
        let spawn = TrafficSpawn {
            kind,
            spawned_at: elapsed,
            speed_px_per_second: speed,
            crossing_seconds: (self.config.viewport_width_px + OFFSCREEN_MARGIN_PX) / speed,
        };
        self.active.push(spawn);
        spawn
    }
}

fn below_cap(count: usize, cap: u32) -> bool {
    usize::try_from(cap).is_ok_and(|cap| count < cap)
}
