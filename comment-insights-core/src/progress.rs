// Not using indicatif here: progress goes to the log, which also works without a tty.
use {
    std::time::{Duration, Instant},
    tracing::info,
};

const REPORT_INTERVAL: Duration = Duration::from_secs(10);

pub struct Progress {
    message: String,
    started_at: Instant,
    reported_at: Instant,
    total_processed: u64,
}

impl Progress {
    pub fn new(message: String) -> Self {
        Self {
            message,
            started_at: Instant::now(),
            reported_at: Instant::now(),
            total_processed: 0,
        }
    }

    pub fn update(&mut self) -> bool {
        self.total_processed += 1;

        let now = Instant::now();
        if now - self.reported_at >= REPORT_INTERVAL {
            self.reported_at = now;
            self.report(now);
            true
        } else {
            false
        }
    }

    pub fn total_processed(&self) -> u64 {
        self.total_processed
    }

    pub fn finish(self) {
        self.report(Instant::now());
    }

    fn report(&self, now: Instant) {
        let rate = (self.total_processed as f32) / (now - self.started_at).as_secs_f32().max(f32::EPSILON);
        info!("{}: {} total ({:.2}/second)", self.message, self.total_processed, rate);
    }
}
