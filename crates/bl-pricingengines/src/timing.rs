//! Wall-clock instrumentation for pricing calls.
//!
//! Timing sits outside the pricing contract: wrapping an engine in [`Timed`]
//! or a call in [`timed`] never changes the returned values.

use std::time::{Duration, Instant};

use bl_core::errors::Result;
use bl_methods::LatticeParameters;

use crate::binomial_engine::{LatticePricer, LatticeResults};

/// Logs the time elapsed since construction when dropped.
#[derive(Debug)]
pub struct ScopedTimer {
    label: String,
    start: Instant,
}

impl ScopedTimer {
    /// Start timing a section named `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    /// Label given at construction.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Time elapsed so far.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        tracing::info!(
            label = %self.label,
            elapsed_us = elapsed.as_micros() as u64,
            "timed section finished"
        );
    }
}

/// Run `f` under a [`ScopedTimer`] and return its value with the elapsed time.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let timer = ScopedTimer::new(label);
    let value = f();
    let elapsed = timer.elapsed();
    (value, elapsed)
}

/// An engine wrapper that times every `calculate` call.
#[derive(Debug, Clone)]
pub struct Timed<E> {
    inner: E,
    label: String,
}

impl<E: LatticePricer> Timed<E> {
    /// Wrap `inner`, logging under `label`.
    pub fn new(inner: E, label: impl Into<String>) -> Self {
        Self {
            inner,
            label: label.into(),
        }
    }

    /// The wrapped engine.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: LatticePricer> LatticePricer for Timed<E> {
    fn calculate(&self, params: &LatticeParameters) -> Result<LatticeResults> {
        let _timer = ScopedTimer::new(format!("{} (N = {})", self.label, params.steps()));
        self.inner.calculate(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinomialLatticeEngine;
    use bl_core::{InductionStrategy, OptionType};

    #[test]
    fn timed_returns_closure_value() {
        let (value, elapsed) = timed("sum", || (1..=100).sum::<u32>());
        assert_eq!(value, 5050);
        assert!(elapsed <= Duration::from_secs(5));
    }

    #[test]
    fn scoped_timer_is_monotonic() {
        let timer = ScopedTimer::new("section");
        let first = timer.elapsed();
        let second = timer.elapsed();
        assert!(second >= first);
        assert_eq!(timer.label(), "section");
    }

    #[test]
    fn timed_engine_does_not_change_results() {
        let params =
            LatticeParameters::new(100.0, 100.0, 1.0, 0.06, 3, 1.1, 1.0 / 1.1, OptionType::Call)
                .unwrap();
        let engine = BinomialLatticeEngine::new(InductionStrategy::Reference);
        let timed_engine = Timed::new(engine, "reference");
        assert_eq!(
            timed_engine.calculate(&params).unwrap(),
            engine.calculate(&params).unwrap()
        );
        assert_eq!(timed_engine.inner().strategy(), InductionStrategy::Reference);
    }
}
