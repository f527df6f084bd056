//! Summary statistics for a batch of scored attempts

use std::time::{Duration, Instant};

#[derive(Clone, Default)]
pub struct BatchStats {
    pub scored: Vec<Sample>,
    /// Attempts rejected before scoring (missing input, upstream failure)
    pub rejected: usize,
}

#[derive(Clone)]
pub struct Sample {
    pub duration: Duration,
    pub similarity: u8,
    pub passed: bool,
    pub mismatches: usize,
}

impl BatchStats {
    pub fn passed(&self) -> usize {
        self.scored.iter().filter(|s| s.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.rejected == 0 && self.scored.iter().all(|s| s.passed)
    }

    pub fn mean_similarity(&self) -> Option<f64> {
        if self.scored.is_empty() {
            return None;
        }
        let total: f64 = self.scored.iter().map(|s| f64::from(s.similarity)).sum();
        Some(total / self.scored.len() as f64)
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();

        if let Some(mean) = self.mean_similarity() {
            let (avg, max, total) = Self::calc(&self.scored);
            let mismatches: usize = self.scored.iter().map(|s| s.mismatches).sum();
            out.push_str(&format!(
                "Scored (n={}): passed={} failed={} mean similarity={:.1} mismatched syllables={}\n",
                self.scored.len(),
                self.passed(),
                self.scored.len() - self.passed(),
                mean,
                mismatches
            ));
            out.push_str(&format!(
                "Timing: avg={}us max={}us total={:.3}ms\n",
                avg.as_micros(),
                max.as_micros(),
                total.as_secs_f64() * 1000.0
            ));
        }

        if self.rejected > 0 {
            out.push_str(&format!("Rejected: {}\n", self.rejected));
        }

        if out.is_empty() {
            out.push_str("No attempts scored.\n");
        }
        out
    }

    fn calc(samples: &[Sample]) -> (Duration, Duration, Duration) {
        let total: Duration = samples.iter().map(|s| s.duration).sum();
        let avg = total / samples.len() as u32;
        let max = samples.iter().map(|s| s.duration).max().unwrap_or_default();
        (avg, max, total)
    }
}

/// Measures one attempt and records it into the batch
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn finish(self, stats: &mut BatchStats, similarity: u8, passed: bool, mismatches: usize) {
        stats.scored.push(Sample {
            duration: self.start.elapsed(),
            similarity,
            passed,
            mismatches,
        });
    }
}
