//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for the NEXUS splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Logo held in the centre
    Display,
    /// Logo sliding off the top
    ScrollUp,
    Complete,
}

#[derive(Debug)]
pub struct SplashState {
    pub start_time: Instant,
    pub phase: SplashPhase,
    /// Rows the logo has moved up from centre
    pub scroll_offset: f32,
}

impl SplashState {
    const DISPLAY_DURATION: Duration = Duration::from_millis(1100);
    const ANIMATION_DURATION: Duration = Duration::from_millis(700);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Advance the animation from the wall clock
    pub fn update(&mut self, terminal_height: u16) {
        self.update_at(self.start_time.elapsed(), terminal_height);
    }

    fn update_at(&mut self, elapsed: Duration, terminal_height: u16) {
        if self.is_complete() {
            return;
        }
        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let progress = (elapsed - Self::DISPLAY_DURATION).as_secs_f32()
                / Self::ANIMATION_DURATION.as_secs_f32();
            self.scroll_offset = simple_easing::cubic_out(progress) * terminal_height as f32;
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Jump to the end (any key pressed)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}
