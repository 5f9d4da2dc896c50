//! Frame callback that drives the scene samplers and emits output.
//!
//! For every published frame the callback advances the window and traffic
//! samplers, logs a periodic summary, and (when enabled) writes one JSON
//! line per frame to stdout for a renderer to consume. The static backdrop
//! is written once, ahead of the first frame, and every season change is
//! announced with the style class the renderer should switch to.

use std::io::Write;

use serde::Serialize;
use skyline_core::runner::FrameCallback;
use skyline_scene::{Scene, SceneUpdate};
use skyline_types::{Cloud, Month, Season, SkyFrame, Star};
use tracing::{debug, info, trace, warn};

/// One line of JSON output.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputRecord<'a> {
    /// Star field and cloud layer, written once.
    Backdrop {
        stars: &'a [Star],
        clouds: &'a [Cloud],
    },
    /// The season changed; the renderer swaps its season class.
    SeasonChanged {
        tick: u64,
        season: Season,
        month: Month,
        season_class: &'static str,
    },
    /// One composed frame with its scene changes.
    Frame {
        frame: &'a SkyFrame,
        scene: &'a SceneUpdate,
    },
}

/// Callback that bridges the tick loop to the scene and the output stream.
pub struct SceneCallback {
    scene: Scene,
    json_frames: bool,
    summary_every_ticks: u64,
    backdrop_written: bool,
}

impl SceneCallback {
    /// Create a callback around a sampled scene.
    pub const fn new(scene: Scene, json_frames: bool, summary_every_ticks: u64) -> Self {
        Self {
            scene,
            json_frames,
            summary_every_ticks,
            backdrop_written: false,
        }
    }

    fn emit(&self, record: &OutputRecord<'_>) {
        let mut out = std::io::stdout().lock();
        let written = serde_json::to_writer(&mut out, record)
            .map_err(std::io::Error::from)
            .and_then(|()| out.write_all(b"\n"))
            .and_then(|()| out.flush());
        if let Err(e) = written {
            warn!(error = %e, "Failed to write output record");
        }
    }
}

/// The season-change record for `frame`, if its season just changed.
fn season_change(frame: &SkyFrame) -> Option<OutputRecord<'static>> {
    frame.season.changed.then_some(OutputRecord::SeasonChanged {
        tick: frame.tick,
        season: frame.season.season,
        month: frame.season.month,
        season_class: frame.season.season.css_class(),
    })
}

impl FrameCallback for SceneCallback {
    fn on_frame(&mut self, frame: &SkyFrame) {
        let update = self.scene.update(frame);

        trace!(
            tick = frame.tick,
            clock = frame.clock_label,
            bucket = frame.sky.bucket.css_class(),
            lit_windows = update.windows.lit.len(),
            "Frame composed"
        );

        if let Some(window) = update.windows.toggled {
            debug!(tick = frame.tick, window, "Window flickered");
        }

        if frame.tick.checked_rem(self.summary_every_ticks) == Some(0) {
            info!(
                tick = frame.tick,
                clock = frame.clock_label,
                season = frame.season_label,
                bucket = frame.sky.bucket.css_class(),
                sun_opacity = frame.celestial.sun.opacity,
                moon_opacity = frame.celestial.moon.opacity,
                cars = self.scene.traffic().active_cars(),
                pedestrians = self.scene.traffic().active_pedestrians(),
                "Sky summary"
            );
        }

        if self.json_frames {
            if !self.backdrop_written {
                self.emit(&OutputRecord::Backdrop {
                    stars: &self.scene.stars,
                    clouds: &self.scene.clouds,
                });
                self.backdrop_written = true;
            }
            if let Some(record) = season_change(frame) {
                self.emit(&record);
            }
            self.emit(&OutputRecord::Frame {
                frame,
                scene: &update,
            });
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use skyline_core::TimeModel;
    use skyline_scene::SceneConfig;
    use skyline_types::WindowUpdate;

    #[test]
    fn frame_record_is_tagged() {
        let frame = TimeModel::default().frame(0, 0.0, None).unwrap();
        let update = SceneUpdate {
            windows: WindowUpdate {
                lit: Vec::new(),
                toggled: None,
            },
            spawns: Vec::new(),
        };
        let value = serde_json::to_value(OutputRecord::Frame {
            frame: &frame,
            scene: &update,
        })
        .unwrap();
        assert_eq!(value["type"], "frame");
        assert_eq!(value["frame"]["clock_label"], "06:00");
        assert_eq!(value["scene"]["spawns"], serde_json::json!([]));
    }

    #[test]
    fn season_change_carries_style_class() {
        let model = TimeModel::default();
        let first = model.frame(0, 0.0, None).unwrap();
        let value = serde_json::to_value(season_change(&first).unwrap()).unwrap();
        assert_eq!(value["type"], "season_changed");
        assert_eq!(value["season"], "Spring");
        assert_eq!(value["season_class"], "sky-spring");

        let summer = model.frame(1500, 150.0, Some(Season::Spring)).unwrap();
        let value = serde_json::to_value(season_change(&summer).unwrap()).unwrap();
        assert_eq!(value["season_class"], "sky-summer");
        assert_eq!(value["month"], "June");
    }

    #[test]
    fn unchanged_season_emits_nothing() {
        let frame = TimeModel::default()
            .frame(1, 0.1, Some(Season::Spring))
            .unwrap();
        assert!(season_change(&frame).is_none());
    }

    #[test]
    fn callback_advances_scene_without_output() {
        let scene = Scene::new(&SceneConfig::default(), 3).unwrap();
        let mut callback = SceneCallback::new(scene, false, 0);
        let model = TimeModel::default();
        for tick in 0..40_u32 {
            let frame = model
                .frame(u64::from(tick), f64::from(tick) * 0.1, None)
                .unwrap();
            callback.on_frame(&frame);
        }
        // The first opening car is due at 1.0 s.
        assert!(callback.scene.traffic().active_cars() >= 1);
    }
}
