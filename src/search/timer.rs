use std::time::{Duration, Instant};

/// Default safety margin, in milliseconds, below which a search gives up.
pub const DEFAULT_TIMER_THRESHOLD_MS: f64 = 15.0;

/// A per-turn time oracle: milliseconds left before the move is due.
pub trait TimeLeft {
    fn time_left_ms(&self) -> f64;
}

impl<F: Fn() -> f64> TimeLeft for F {
    fn time_left_ms(&self) -> f64 { self() }
}

/// Wall-clock deadline for one turn.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self { Self { end: Instant::now() + budget } }

    pub fn after_ms(ms: u64) -> Self { Self::after(Duration::from_millis(ms)) }
}

impl TimeLeft for Deadline {
    fn time_left_ms(&self) -> f64 {
        let now = Instant::now();
        if now >= self.end {
            -((now - self.end).as_secs_f64() * 1000.0)
        } else {
            (self.end - now).as_secs_f64() * 1000.0
        }
    }
}

/// Raised when the remaining time drops under the threshold. Always caught
/// by the engine's `get_move`; it is the normal end of iterative deepening.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("search timed out with {remaining_ms:.1} ms left")]
pub struct SearchTimeout {
    pub remaining_ms: f64,
}

/// Threshold check shared by every recursive entry point of a search.
pub struct SearchTimer<'a> {
    time_left: &'a dyn TimeLeft,
    threshold_ms: f64,
}

impl<'a> SearchTimer<'a> {
    pub fn new(time_left: &'a dyn TimeLeft, threshold_ms: f64) -> Self {
        Self { time_left, threshold_ms }
    }

    pub fn check(&self) -> Result<(), SearchTimeout> {
        let remaining_ms = self.time_left.time_left_ms();
        if remaining_ms < self.threshold_ms {
            return Err(SearchTimeout { remaining_ms });
        }
        Ok(())
    }
}
