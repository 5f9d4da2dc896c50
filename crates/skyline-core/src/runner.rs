//! Driver loop with run bounds and stop control.
//!
//! [`run_simulation`] wraps [`run_tick`] with:
//!
//! - **Bounded runs**: stop after `max_ticks` or `max_real_time_seconds`
//! - **Fixed-period ticking**: sleep `tick_interval_ms` between ticks
//! - **Clean stop**: the owner can request a stop at any time
//!
//! Ticks are strictly serialized; the clock is never advanced concurrently.
//!
//! [`run_tick`]: crate::tick::run_tick

use chrono::{DateTime, Utc};
use skyline_types::SkyFrame;
use tracing::info;

use crate::operator::{DriverControls, RunEndReason};
use crate::tick::{self, SkyState, TickError};

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: TickError,
    },
}

/// Outcome of a run.
#[derive(Debug)]
pub struct RunResult {
    /// Why the run ended.
    pub end_reason: RunEndReason,
    /// The last frame published (the initial frame if no tick ran).
    pub final_frame: SkyFrame,
    /// Number of ticks executed.
    pub total_ticks: u64,
    /// Wall-clock time the run started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock time the run ended.
    pub ended_at: DateTime<Utc>,
}

/// Receives every frame the loop publishes.
pub trait FrameCallback: Send {
    /// Called after a frame has been composed.
    fn on_frame(&mut self, frame: &SkyFrame);
}

/// A callback that discards frames.
pub struct NoOpCallback;

impl FrameCallback for NoOpCallback {
    fn on_frame(&mut self, _frame: &SkyFrame) {}
}

/// Run the tick loop until a termination condition is met.
///
/// The initial frame (tick 0) is published before the first tick so the
/// renderer starts from a fully populated scene.
pub async fn run_simulation(
    state: &mut SkyState,
    controls: &DriverControls,
    callback: &mut dyn FrameCallback,
) -> Result<RunResult, RunnerError> {
    let mut last_frame = state.current_frame()?;
    callback.on_frame(&last_frame);
    let mut total_ticks: u64 = 0;

    info!(
        max_ticks = controls.max_ticks(),
        max_real_time_seconds = controls.max_real_time_seconds(),
        tick_interval_ms = controls.tick_interval_ms(),
        "Run starting"
    );

    loop {
        if controls.is_stop_requested() {
            info!("Stop requested");
            return Ok(finish(controls, RunEndReason::OperatorStop, last_frame, total_ticks));
        }

        if controls.time_limit_reached() {
            info!(
                max_seconds = controls.max_real_time_seconds(),
                elapsed = controls.elapsed_seconds(),
                "Real-time limit reached"
            );
            return Ok(finish(
                controls,
                RunEndReason::MaxRealTimeReached,
                last_frame,
                total_ticks,
            ));
        }

        let frame = tick::run_tick(state)?;
        total_ticks = total_ticks.saturating_add(1);
        callback.on_frame(&frame);

        if controls.tick_limit_reached(frame.tick) {
            info!(
                tick = frame.tick,
                max_ticks = controls.max_ticks(),
                "Tick limit reached"
            );
            return Ok(finish(controls, RunEndReason::MaxTicksReached, frame, total_ticks));
        }
        last_frame = frame;

        let interval_ms = controls.tick_interval_ms();
        if interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
        }
    }
}

fn finish(
    controls: &DriverControls,
    end_reason: RunEndReason,
    frame: SkyFrame,
    total_ticks: u64,
) -> RunResult {
    RunResult {
        end_reason,
        final_frame: frame,
        total_ticks,
        started_at: controls.started_at(),
        ended_at: Utc::now(),
    }
}

/// Log the end of a run.
pub fn log_run_end(result: &RunResult) {
    let wall_ms = result
        .ended_at
        .signed_duration_since(result.started_at)
        .num_milliseconds();
    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        started_at = %result.started_at,
        wall_ms,
        "Run ended"
    );

    let frame = &result.final_frame;
    info!(
        tick = frame.tick,
        clock = frame.clock_label,
        season = frame.season_label,
        bucket = frame.sky.bucket.css_class(),
        "Final frame"
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{SimulationBoundsConfig, TimeConfig};

    struct Collect(Vec<u64>);

    impl FrameCallback for Collect {
        fn on_frame(&mut self, frame: &SkyFrame) {
            self.0.push(frame.tick);
        }
    }

    fn bounded(max_ticks: u64) -> DriverControls {
        DriverControls::new(
            0,
            &SimulationBoundsConfig {
                max_ticks,
                max_real_time_seconds: 0,
            },
        )
    }

    #[tokio::test]
    async fn stops_at_tick_limit() {
        let mut state = SkyState::new(&TimeConfig::default()).unwrap();
        let controls = bounded(5);
        let mut collect = Collect(Vec::new());

        let result = run_simulation(&mut state, &controls, &mut collect)
            .await
            .unwrap();

        assert_eq!(result.end_reason, RunEndReason::MaxTicksReached);
        assert_eq!(result.total_ticks, 5);
        assert_eq!(collect.0, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(result.final_frame.tick, 5);
    }

    #[tokio::test]
    async fn stop_before_first_tick() {
        let mut state = SkyState::new(&TimeConfig::default()).unwrap();
        let controls = bounded(0);
        controls.request_stop();

        let result = run_simulation(&mut state, &controls, &mut NoOpCallback)
            .await
            .unwrap();

        assert_eq!(result.end_reason, RunEndReason::OperatorStop);
        assert_eq!(result.total_ticks, 0);
        assert_eq!(result.final_frame.tick, 0);
        assert_eq!(result.started_at, controls.started_at());
        assert!(result.ended_at >= result.started_at);
    }
}
