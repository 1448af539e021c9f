//! Report generation
//!
//! Renders suite results as Markdown and JSON.

use std::io::Write;

use crate::suite::SuiteResult;
use crate::Result;

pub fn generate_markdown_report(results: &[SuiteResult]) -> String {
    let mut report = String::new();

    report.push_str("# qvb Benchmark Results\n\n");
    report.push_str(&format!(
        "**Generated:** {}\n\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for result in results {
        report.push_str(&format!("## {}\n\n", result.name));
        report.push_str(&format!("**Timestamp:** {}\n\n", result.timestamp));

        report.push_str("### Configuration\n\n");
        report.push_str("| Parameter | Value |\n");
        report.push_str("|-----------|-------|\n");
        report.push_str(&format!("| Trials | {} |\n", result.config.trials));
        report.push_str(&format!("| Warmup | {} |\n\n", result.config.warmup));

        if let Some(ref summary) = result.summary {
            report.push_str("### Summary Statistics\n\n");
            report.push_str("| Metric | Value |\n");
            report.push_str("|--------|-------|\n");
            report.push_str(&format!(
                "| Mean Duration | {:.3} ms |\n",
                summary.mean_duration_ns / 1_000_000.0
            ));
            report.push_str(&format!(
                "| Std Deviation | {:.3} ms |\n",
                summary.std_duration_ns / 1_000_000.0
            ));
            report.push_str(&format!(
                "| Min Duration | {:.3} ms |\n",
                summary.min_duration_ns as f64 / 1_000_000.0
            ));
            report.push_str(&format!(
                "| Max Duration | {:.3} ms |\n",
                summary.max_duration_ns as f64 / 1_000_000.0
            ));
            report.push_str(&format!(
                "| Median Duration | {:.3} ms |\n\n",
                summary.median_duration_ns as f64 / 1_000_000.0
            ));
        }

        if !result.measurements.is_empty() {
            report.push_str("### Measurements\n\n");
            report.push_str("| Benchmark | Params | Duration (ms) | Memory (MB) | Error |\n");
            report.push_str("|-----------|--------|---------------|-------------|-------|\n");

            for m in result.measurements.iter().take(20) {
                let duration = m
                    .duration_ns
                    .map(|ns| format!("{:.3}", ns as f64 / 1_000_000.0))
                    .unwrap_or_else(|| "-".to_string());
                let memory = m
                    .peak_memory_bytes
                    .map(|b| format!("{:.2}", b as f64 / 1_048_576.0))
                    .unwrap_or_else(|| "-".to_string());
                let error = m.error.as_deref().unwrap_or("-");

                report.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    m.benchmark, m.params, duration, memory, error
                ));
            }

            if result.measurements.len() > 20 {
                report.push_str(&format!(
                    "\n*... and {} more measurements*\n",
                    result.measurements.len() - 20
                ));
            }
            report.push('\n');
        }

        report.push_str("---\n\n");
    }

    report
}

pub fn save_markdown_report(results: &[SuiteResult], path: &str) -> Result<()> {
    let report = generate_markdown_report(results);
    let mut file = std::fs::File::create(path)?;
    file.write_all(report.as_bytes())?;
    Ok(())
}

pub fn save_combined_json(results: &[SuiteResult], path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::{Benchmark, RunConfig, Suite};

    fn sample_result() -> SuiteResult {
        let suite = Suite::new("SampleSuite")
            .with_benchmark(Benchmark::time("noop", |_| Ok(())));
        suite.run(&RunConfig {
            trials: 2,
            warmup: 0,
        })
    }

    #[test]
    fn test_markdown_structure() {
        let report = generate_markdown_report(&[sample_result()]);
        assert!(report.contains("# qvb Benchmark Results"));
        assert!(report.contains("## SampleSuite"));
        assert!(report.contains("time_noop"));
    }

    #[test]
    fn test_json_roundtrip() {
        let results = vec![sample_result()];
        let json = serde_json::to_string(&results).unwrap();
        let parsed: Vec<SuiteResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].name, "SampleSuite");
        assert_eq!(parsed[0].measurements.len(), 2);
    }
}
