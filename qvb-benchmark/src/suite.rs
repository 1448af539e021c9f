//! Parameter-sweep suites
//!
//! The registration convention the external harness consumes: a suite has
//! ordered `param_names` and matching `params` value sets whose cartesian
//! product is swept, benchmarks prefixed `time_` or `peakmem_`, and optional
//! `setup`/`teardown` hooks run around every grid point. The runner times
//! (or memory-profiles) each benchmark per point; a failing benchmark is
//! recorded as failed and the sweep continues.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::hyperparams::{HyperParams, HyperValue};
use crate::memory::current_physical_memory;
use crate::Result;

/// What a benchmark tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    Time,
    PeakMem,
}

impl TrackKind {
    pub fn prefix(self) -> &'static str {
        match self {
            TrackKind::Time => "time_",
            TrackKind::PeakMem => "peakmem_",
        }
    }
}

/// One resolved grid point of a suite's parameter sweep.
#[derive(Debug, Clone)]
pub struct ParamPoint {
    names: Vec<String>,
    values: Vec<HyperValue>,
}

impl ParamPoint {
    pub fn get(&self, name: &str) -> Option<&HyperValue> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.values[i])
    }

    /// The point as a hyperparameter mapping, keyed by parameter name.
    pub fn hyperparams(&self) -> HyperParams {
        let mut hp = HyperParams::new();
        for (name, value) in self.names.iter().zip(self.values.iter()) {
            hp.set(name, value.clone());
        }
        hp
    }

    /// Display label, e.g. `n_wires=2, n_layers=3`.
    pub fn label(&self) -> String {
        self.names
            .iter()
            .zip(self.values.iter())
            .map(|(n, v)| format!("{n}={v}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

type BenchFn = fn(&ParamPoint) -> Result<()>;
type HookFn = fn(&ParamPoint);

/// A registered benchmark: a tracked function with its prefixed name.
#[derive(Clone)]
pub struct Benchmark {
    pub name: String,
    pub kind: TrackKind,
    run: BenchFn,
}

impl Benchmark {
    pub fn time(name: &str, run: BenchFn) -> Self {
        Benchmark {
            name: format!("time_{name}"),
            kind: TrackKind::Time,
            run,
        }
    }

    pub fn peakmem(name: &str, run: BenchFn) -> Self {
        Benchmark {
            name: format!("peakmem_{name}"),
            kind: TrackKind::PeakMem,
            run,
        }
    }
}

/// A benchmark suite: parameter grid plus registered benchmarks.
#[derive(Clone, Default)]
pub struct Suite {
    pub name: String,
    param_names: Vec<String>,
    params: Vec<Vec<HyperValue>>,
    benchmarks: Vec<Benchmark>,
    setup: Option<HookFn>,
    teardown: Option<HookFn>,
}

impl Suite {
    pub fn new(name: &str) -> Self {
        Suite {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Declare the parameter axes: `names[i]` labels the values of
    /// `params[i]`; the runner sweeps the cartesian product.
    pub fn with_params(mut self, names: &[&str], params: Vec<Vec<HyperValue>>) -> Self {
        assert_eq!(names.len(), params.len(), "one name per value axis");
        self.param_names = names.iter().map(|s| s.to_string()).collect();
        self.params = params;
        self
    }

    pub fn with_benchmark(mut self, benchmark: Benchmark) -> Self {
        self.benchmarks.push(benchmark);
        self
    }

    pub fn with_setup(mut self, hook: HookFn) -> Self {
        self.setup = Some(hook);
        self
    }

    pub fn with_teardown(mut self, hook: HookFn) -> Self {
        self.teardown = Some(hook);
        self
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn benchmarks(&self) -> impl Iterator<Item = &Benchmark> {
        self.benchmarks.iter()
    }

    /// All grid points (cartesian product of the value axes). A suite with
    /// no parameters has exactly one, empty, point.
    pub fn grid_points(&self) -> Vec<ParamPoint> {
        let mut points = vec![ParamPoint {
            names: self.param_names.clone(),
            values: Vec::new(),
        }];
        for axis in &self.params {
            let mut next = Vec::with_capacity(points.len() * axis.len());
            for point in &points {
                for value in axis {
                    let mut values = point.values.clone();
                    values.push(value.clone());
                    next.push(ParamPoint {
                        names: self.param_names.clone(),
                        values,
                    });
                }
            }
            points = next;
        }
        points
    }

    /// Run every benchmark over every grid point.
    pub fn run(&self, config: &RunConfig) -> SuiteResult {
        let mut result = SuiteResult::new(&self.name, config);

        for point in self.grid_points() {
            if let Some(setup) = self.setup {
                setup(&point);
            }

            for benchmark in &self.benchmarks {
                self.run_one(benchmark, &point, config, &mut result);
            }

            if let Some(teardown) = self.teardown {
                teardown(&point);
            }
        }

        result.compute_summary();
        result
    }

    fn run_one(
        &self,
        benchmark: &Benchmark,
        point: &ParamPoint,
        config: &RunConfig,
        result: &mut SuiteResult,
    ) {
        match benchmark.kind {
            TrackKind::Time => {
                for _ in 0..config.warmup {
                    if let Err(err) = (benchmark.run)(point) {
                        result.add(Measurement::failed(benchmark, point, &err.to_string()));
                        return;
                    }
                }
                for _ in 0..config.trials {
                    let start = Instant::now();
                    let outcome = (benchmark.run)(point);
                    let elapsed = start.elapsed();
                    match outcome {
                        Ok(()) => result.add(Measurement::timed(
                            benchmark,
                            point,
                            elapsed.as_nanos() as u64,
                        )),
                        Err(err) => {
                            result.add(Measurement::failed(benchmark, point, &err.to_string()));
                            return;
                        }
                    }
                }
            }
            TrackKind::PeakMem => {
                let before = current_physical_memory();
                let outcome = (benchmark.run)(point);
                let after = current_physical_memory();
                match outcome {
                    Ok(()) => {
                        let delta = match (before, after) {
                            (Some(b), Some(a)) => Some(a.saturating_sub(b)),
                            _ => None,
                        };
                        result.add(Measurement::memory(benchmark, point, delta));
                    }
                    Err(err) => {
                        result.add(Measurement::failed(benchmark, point, &err.to_string()))
                    }
                }
            }
        }
    }
}

/// Trials and warmup per (benchmark, grid point).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub trials: usize,
    pub warmup: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            trials: 5,
            warmup: 1,
        }
    }
}

/// One recorded measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub benchmark: String,
    pub params: String,
    pub duration_ns: Option<u64>,
    pub peak_memory_bytes: Option<u64>,
    pub error: Option<String>,
}

impl Measurement {
    fn timed(benchmark: &Benchmark, point: &ParamPoint, duration_ns: u64) -> Self {
        Measurement {
            benchmark: benchmark.name.clone(),
            params: point.label(),
            duration_ns: Some(duration_ns),
            peak_memory_bytes: None,
            error: None,
        }
    }

    fn memory(benchmark: &Benchmark, point: &ParamPoint, bytes: Option<u64>) -> Self {
        Measurement {
            benchmark: benchmark.name.clone(),
            params: point.label(),
            duration_ns: None,
            peak_memory_bytes: bytes,
            error: None,
        }
    }

    fn failed(benchmark: &Benchmark, point: &ParamPoint, error: &str) -> Self {
        Measurement {
            benchmark: benchmark.name.clone(),
            params: point.label(),
            duration_ns: None,
            peak_memory_bytes: None,
            error: Some(error.to_string()),
        }
    }
}

/// Summary statistics over the timed measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub mean_duration_ns: f64,
    pub std_duration_ns: f64,
    pub min_duration_ns: u64,
    pub max_duration_ns: u64,
    pub median_duration_ns: u64,
}

/// All measurements of one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub name: String,
    pub timestamp: String,
    pub config: RunConfig,
    pub measurements: Vec<Measurement>,
    pub summary: Option<Summary>,
}

impl SuiteResult {
    fn new(name: &str, config: &RunConfig) -> Self {
        SuiteResult {
            name: name.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            config: config.clone(),
            measurements: Vec::new(),
            summary: None,
        }
    }

    fn add(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    pub fn failures(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().filter(|m| m.error.is_some())
    }

    pub fn compute_summary(&mut self) {
        let durations: Vec<u64> = self
            .measurements
            .iter()
            .filter_map(|m| m.duration_ns)
            .collect();
        if durations.is_empty() {
            return;
        }

        let n = durations.len() as f64;
        let mean = durations.iter().sum::<u64>() as f64 / n;
        let variance = durations
            .iter()
            .map(|&d| (d as f64 - mean).powi(2))
            .sum::<f64>()
            / n;

        let mut sorted = durations;
        sorted.sort_unstable();

        self.summary = Some(Summary {
            mean_duration_ns: mean,
            std_duration_ns: variance.sqrt(),
            min_duration_ns: sorted[0],
            max_duration_ns: *sorted.last().expect("non-empty"),
            median_duration_ns: sorted[sorted.len() / 2],
        });
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &ParamPoint) -> Result<()> {
        Ok(())
    }

    fn failing(_: &ParamPoint) -> Result<()> {
        Err(crate::BenchError::UnknownInterface("nope".into()))
    }

    fn suite() -> Suite {
        Suite::new("TestSuite")
            .with_params(
                &["n_wires", "n_layers"],
                vec![
                    vec![HyperValue::Int(2), HyperValue::Int(5)],
                    vec![HyperValue::Int(3)],
                ],
            )
            .with_benchmark(Benchmark::time("noop", noop))
    }

    #[test]
    fn test_grid_is_cartesian_product() {
        let points = suite().grid_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label(), "n_wires=2, n_layers=3");
        assert_eq!(points[1].label(), "n_wires=5, n_layers=3");
    }

    #[test]
    fn test_parameterless_suite_has_one_point() {
        let s = Suite::new("Bare").with_benchmark(Benchmark::time("noop", noop));
        assert_eq!(s.grid_points().len(), 1);
        assert_eq!(s.grid_points()[0].label(), "");
    }

    #[test]
    fn test_run_records_trials_per_point() {
        let config = RunConfig {
            trials: 3,
            warmup: 1,
        };
        let result = suite().run(&config);
        assert_eq!(result.measurements.len(), 2 * 3);
        assert!(result.summary.is_some());
        assert_eq!(result.failures().count(), 0);
    }

    #[test]
    fn test_failures_are_recorded_not_raised() {
        let s = Suite::new("Failing").with_benchmark(Benchmark::time("broken", failing));
        let result = s.run(&RunConfig::default());
        assert_eq!(result.failures().count(), 1);
        let failure = result.failures().next().unwrap();
        assert_eq!(failure.benchmark, "time_broken");
        assert!(failure.error.as_deref().unwrap().contains("nope"));
    }

    #[test]
    fn test_benchmark_names_carry_prefix() {
        assert_eq!(Benchmark::time("circuit", noop).name, "time_circuit");
        assert_eq!(Benchmark::peakmem("state", noop).name, "peakmem_state");
    }

    #[test]
    fn test_hooks_run_once_per_grid_point() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static SETUPS: AtomicUsize = AtomicUsize::new(0);
        static TEARDOWNS: AtomicUsize = AtomicUsize::new(0);

        fn count_setup(_: &ParamPoint) {
            SETUPS.fetch_add(1, Ordering::SeqCst);
        }
        fn count_teardown(_: &ParamPoint) {
            TEARDOWNS.fetch_add(1, Ordering::SeqCst);
        }

        let result = suite()
            .with_setup(count_setup)
            .with_teardown(count_teardown)
            .run(&RunConfig {
                trials: 2,
                warmup: 0,
            });

        // 2 grid points, hooks once each regardless of trial count
        assert_eq!(SETUPS.load(Ordering::SeqCst), 2);
        assert_eq!(TEARDOWNS.load(Ordering::SeqCst), 2);
        assert_eq!(result.measurements.len(), 4);
    }
}
