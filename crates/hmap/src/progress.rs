//! Progress sinks used while rendering.

use std::{
    io::{self, Stderr},
    time::Instant,
};

use clap::ValueEnum;
use hilbertmap::{NoProgress, Progress};
use log::info;
use pbr::ProgressBar;

/// How render progress is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ProgressStyle {
    /// A terminal progress bar on stderr.
    #[default]
    Bar,
    /// Periodic log lines with a throughput estimate.
    Log,
    /// No progress output.
    None,
}

/// Progress bar created on the first update, once the total is known.
#[derive(Default)]
struct BarProgress {
    /// The bar, if any update has arrived.
    bar: Option<ProgressBar<Stderr>>,
}

impl Progress for BarProgress {
    fn update(&mut self, done: u64, total: u64, _at: Instant) {
        let bar = self.bar.get_or_insert_with(|| {
            let mut pb = ProgressBar::on(io::stderr(), total);
            pb.format("╢▌▌░╟");
            pb
        });
        bar.set(done);
    }

    fn finish(&mut self, total: u64, _at: Instant) {
        if let Some(bar) = self.bar.as_mut() {
            bar.set(total);
            bar.finish();
        }
    }
}

/// Logs each update with the rate since the previous one.
#[derive(Default)]
struct LogProgress {
    /// Units and time of the previous update.
    last: Option<(u64, Instant)>,
}

/// Thousands of units per second between two updates, if measurable.
fn rate(prev: (u64, Instant), done: u64, at: Instant) -> Option<f64> {
    let secs = at.duration_since(prev.1).as_secs_f64();
    (secs > 0.0 && done >= prev.0).then(|| (done - prev.0) as f64 / secs / 1000.0)
}

impl Progress for LogProgress {
    fn update(&mut self, done: u64, total: u64, at: Instant) {
        let pct = if total == 0 {
            100.0
        } else {
            done as f64 * 100.0 / total as f64
        };
        match self.last.and_then(|prev| rate(prev, done, at)) {
            Some(r) => info!("{done}/{total} ({pct:.2}%). rate: {r:.1}k/s"),
            None => info!("{done}/{total} ({pct:.2}%)"),
        }
        self.last = Some((done, at));
    }

    fn finish(&mut self, total: u64, _at: Instant) {
        info!("{total}/{total} done");
    }
}

/// A fresh sink for one render.
pub fn sink(style: ProgressStyle) -> Box<dyn Progress> {
    match style {
        ProgressStyle::Bar => Box::new(BarProgress::default()),
        ProgressStyle::Log => Box::new(LogProgress::default()),
        ProgressStyle::None => Box::new(NoProgress),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn rate_from_consecutive_updates() {
        let start = Instant::now();
        let later = start + Duration::from_secs(2);
        let r = rate((0, start), 10_000, later).unwrap();
        assert!((r - 5.0).abs() < 1e-9);
        assert!(rate((0, start), 10_000, start).is_none());
    }

    #[test]
    fn log_sink_tracks_last_update() {
        let mut sink = LogProgress::default();
        let at = Instant::now();
        sink.update(0, 100, at);
        sink.update(50, 100, at + Duration::from_millis(10));
        assert_eq!(sink.last.map(|(done, _)| done), Some(50));
    }
}
