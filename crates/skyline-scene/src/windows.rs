//! Building window occupancy.
//!
//! Each window is either occupied or empty. Occupied windows show the lit
//! style at night; during the day nothing is lit. While it is night, each
//! update has a small chance to flip one random window so the skyline
//! flickers as people come and go.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skyline_types::WindowUpdate;
use tracing::trace;

use crate::config::SceneConfig;

const WINDOW_SALT: u64 = 0x5749_4e44;

/// Per-window occupancy with its own seeded generator.
#[derive(Debug, Clone)]
pub struct WindowGrid {
    occupied: Vec<bool>,
    toggle_probability: f64,
    rng: StdRng,
}

impl WindowGrid {
    /// Sample initial occupancy for `config.window_count` windows.
    pub fn new(config: &SceneConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed ^ WINDOW_SALT);
        let occupied = (0..config.window_count)
            .map(|_| rng.random_bool(config.window_lit_probability))
            .collect();
        Self {
            occupied,
            toggle_probability: config.window_toggle_probability,
            rng,
        }
    }

    /// Number of windows in the grid.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// Whether the grid has no windows.
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Whether window `index` is currently occupied.
    pub fn is_occupied(&self, index: u32) -> bool {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.occupied.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Advance one tick and report which windows are lit.
    pub fn update(&mut self, is_night: bool) -> WindowUpdate {
        if !is_night {
            return WindowUpdate {
                lit: Vec::new(),
                toggled: None,
            };
        }

        let mut toggled = None;
        if !self.occupied.is_empty() && self.rng.random_bool(self.toggle_probability) {
            let idx = self.rng.random_range(0..self.occupied.len());
            if let Some(slot) = self.occupied.get_mut(idx) {
                *slot = !*slot;
                toggled = u32::try_from(idx).ok();
                trace!(window = idx, occupied = *slot, "Window toggled");
            }
        }

        let lit = self
            .occupied
            .iter()
            .zip(0_u32..)
            .filter_map(|(occupied, idx)| occupied.then_some(idx))
            .collect();

        WindowUpdate { lit, toggled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lit: f64, toggle: f64) -> WindowGrid {
        let config = SceneConfig {
            window_lit_probability: lit,
            window_toggle_probability: toggle,
            ..SceneConfig::default()
        };
        WindowGrid::new(&config, 11)
    }

    #[test]
    fn nothing_is_lit_during_the_day() {
        let mut windows = grid(1.0, 1.0);
        let update = windows.update(false);
        assert!(update.lit.is_empty());
        assert_eq!(update.toggled, None);
    }

    #[test]
    fn fully_occupied_grid_lights_every_window_at_night() {
        let mut windows = grid(1.0, 0.0);
        let update = windows.update(true);
        assert_eq!(update.lit.len(), 48);
        assert_eq!(update.toggled, None);
    }

    #[test]
    fn certain_toggle_flips_exactly_one_window() {
        let mut windows = grid(1.0, 1.0);
        let update = windows.update(true);
        let flipped = update.toggled.unwrap_or(u32::MAX);
        assert!(!windows.is_occupied(flipped));
        assert_eq!(update.lit.len(), 47);
        assert!(!update.lit.contains(&flipped));
    }

    #[test]
    fn day_updates_do_not_toggle() {
        let mut windows = grid(0.5, 1.0);
        let before: Vec<bool> = (0..48).map(|i| windows.is_occupied(i)).collect();
        for _ in 0..20 {
            windows.update(false);
        }
        let after: Vec<bool> = (0..48).map(|i| windows.is_occupied(i)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn empty_grid_is_quiet() {
        let config = SceneConfig {
            window_count: 0,
            window_toggle_probability: 1.0,
            ..SceneConfig::default()
        };
        let mut windows = WindowGrid::new(&config, 1);
        assert!(windows.is_empty());
        assert_eq!(windows.update(true), WindowUpdate { lit: Vec::new(), toggled: None });
    }
}
