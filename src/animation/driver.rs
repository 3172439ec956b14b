// src/animation/driver.rs
//
// Repeating tick that walks the chain while a step is in flight.
// The driver doesn't own a timer: the host calls `should_tick`
// once per frame and `tick` when it returns true.

use std::time::Duration;

use crate::models::{Chain, ChainStep};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DriverState {
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Clone)]
pub struct AnimationDriver {
    state: DriverState,
    frame_timer: f32,
    tick_interval: f32,
    first_tick_pending: bool,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl AnimationDriver {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            state: DriverState::Idle,
            frame_timer: 0.0,
            tick_interval: tick_interval.as_secs_f32(),
            first_tick_pending: false,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Returns true when the driver was idle, meaning the host should redraw now.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = DriverState::Running;
        // first tick lands on the next frame, the cadence starts from there
        self.frame_timer = 0.0;
        self.first_tick_pending = true;
        log::debug!("Animation driver started");
        true
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            self.state = DriverState::Idle;
            self.frame_timer = 0.0;
            self.first_tick_pending = false;
            log::debug!("Animation driver stopped");
        }
    }

    /// Accumulates frame time, true once a tick is due.
    pub fn should_tick(&mut self, dt: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.first_tick_pending {
            // frame time spent idle doesn't count towards the next tick
            self.first_tick_pending = false;
            self.frame_timer = 0.0;
            return true;
        }
        self.frame_timer += dt;
        if self.frame_timer >= self.tick_interval {
            // drop backlog beyond one interval so a stalled frame doesn't burst
            self.frame_timer = (self.frame_timer - self.tick_interval).min(self.tick_interval);
            true
        } else {
            false
        }
    }

    /// Advances the current node once. Stops on the tick its step completes.
    pub fn tick(&mut self, chain: &mut Chain) -> Option<ChainStep> {
        if !self.is_running() {
            return None;
        }
        let step = chain.advance_current();
        match step {
            ChainStep::Completed { index, scale } => {
                log::debug!("Node {} settled at {}", index, scale);
                self.stop();
            }
            // nothing left to animate
            ChainStep::Idle => self.stop(),
            ChainStep::Continuing => {}
        }
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::StepTuning;

    #[test]
    fn test_start_and_stop_transitions() {
        let mut driver = AnimationDriver::default();
        assert_eq!(driver.state(), DriverState::Idle);
        assert!(driver.start());
        assert_eq!(driver.state(), DriverState::Running);
        assert!(!driver.start());
        driver.stop();
        assert_eq!(driver.state(), DriverState::Idle);
        driver.stop();
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn test_tick_is_ignored_while_idle() {
        let mut driver = AnimationDriver::default();
        let mut chain = Chain::new(3, StepTuning::default());
        chain.start_current();
        assert_eq!(driver.tick(&mut chain), None);
        assert_eq!(chain.current().scale(), 0.0);
        assert!(!driver.should_tick(1.0));
    }

    #[test]
    fn test_driver_stops_on_completion() {
        let mut driver = AnimationDriver::default();
        let mut chain = Chain::new(5, StepTuning::default());
        assert!(chain.start_current());
        assert!(driver.start());

        let mut ticks = 0;
        while driver.is_running() {
            ticks += 1;
            assert!(ticks < 1000, "driver never stopped");
            if let Some(ChainStep::Completed { index, scale }) = driver.tick(&mut chain) {
                assert_eq!(index, 0);
                assert_eq!(scale, 1.0);
            }
        }
        assert_eq!(chain.node(0).map(|n| n.state.dir), Some(0.0));
        assert_eq!(chain.cursor().position, 1);
        assert_eq!(driver.tick(&mut chain), None);
    }

    #[test]
    fn test_driver_stops_when_nothing_animates() {
        let mut driver = AnimationDriver::default();
        let mut chain = Chain::new(2, StepTuning::default());
        driver.start();
        assert_eq!(driver.tick(&mut chain), Some(ChainStep::Idle));
        assert!(!driver.is_running());
    }

    #[test]
    fn test_tick_cadence() {
        let mut driver = AnimationDriver::new(Duration::from_millis(50));
        driver.start();
        // due right away after start
        assert!(driver.should_tick(0.0));
        assert!(!driver.should_tick(0.02));
        assert!(!driver.should_tick(0.02));
        assert!(driver.should_tick(0.02));
        // a long stall yields at most one catch-up tick
        assert!(driver.should_tick(1.0));
        assert!(driver.should_tick(0.0));
        assert!(!driver.should_tick(0.0));
    }

    #[test]
    fn test_long_idle_frame_yields_single_first_tick() {
        let mut driver = AnimationDriver::new(Duration::from_millis(50));
        driver.start();
        // the frame after a wait-mode idle carries a large dt
        assert!(driver.should_tick(5.0));
        assert!(!driver.should_tick(0.0));
        assert!(!driver.should_tick(0.049));
        assert!(driver.should_tick(0.002));
    }

    #[test]
    fn test_restart_begins_with_fresh_first_tick() {
        let mut driver = AnimationDriver::new(Duration::from_millis(50));
        driver.start();
        driver.stop();
        assert!(!driver.should_tick(1.0));
        driver.start();
        assert!(driver.should_tick(0.0));
        assert!(!driver.should_tick(0.01));
    }
}
