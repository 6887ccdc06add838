/// Game steps per second, independent of the display's refresh rate.
const STEPS_PER_SECOND: f32 = 60.0;

const STEP: f32 = 1.0 / STEPS_PER_SECOND;

/// Most steps run for a single frame. A long stall (window drag, breakpoint)
/// drops the excess instead of fast-forwarding.
const MAX_STEPS_PER_FRAME: usize = 4;

/// Turns variable frame times into a whole number of fixed steps.
#[derive(Debug, Default)]
pub struct FrameClock {
    pending: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt` seconds of elapsed time, returning how many steps are due.
    pub fn advance(&mut self, dt: f32) -> usize {
        self.pending += dt.max(0.0);

        let mut steps = 0;
        while self.pending >= STEP && steps < MAX_STEPS_PER_FRAME {
            self.pending -= STEP;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_FRAME {
            self.pending = self.pending.min(STEP);
        }
        steps
    }
}
