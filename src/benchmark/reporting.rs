use super::types::{BenchmarkResult, SuiteReport};
use crate::Algorithm;
use crate::error::Result;
use std::fmt::Write;
use std::path::Path;

/// Pick the fastest non-skipped result.
///
/// A later result replaces the current best when it is faster by more than
/// `epsilon_ms`, or when the times are within `epsilon_ms` and it made fewer
/// comparisons. Exact ties keep the earlier result. Returns `None` when every
/// result was skipped.
pub fn find_best_performer(results: &[BenchmarkResult], epsilon_ms: f64) -> Option<&BenchmarkResult> {
    results
        .iter()
        .filter(|r| !r.skipped)
        .fold(None, |best: Option<&BenchmarkResult>, candidate| match best {
            None => Some(candidate),
            Some(current) => {
                let time = candidate.elapsed_ms();
                let best_time = current.elapsed_ms();
                let faster = time + epsilon_ms < best_time;
                let tie = (time - best_time).abs() <= epsilon_ms
                    && candidate.comparisons < current.comparisons;
                if faster || tie {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        })
}

/// Elapsed milliseconds with three decimals
pub fn format_elapsed_ms(result: &BenchmarkResult) -> String {
    format!("{:.3}", result.elapsed_ms())
}

fn format_values(values: &[i32]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Print the per-dataset results table followed by the best pick
pub fn print_suite_report(report: &SuiteReport) {
    println!("\n=== Dataset: {} (n={}) ===", report.dataset_name, report.size);
    if let Some(values) = &report.preview {
        println!("Original: {}", format_values(values));
    }
    if report.any_skipped() {
        println!("Skipping Bubble Sort and Insertion Sort because n is above the threshold.");
    }

    let name_width = report
        .results
        .iter()
        .map(|r| r.name.len())
        .chain(std::iter::once("Algorithm".len()))
        .max()
        .unwrap_or(0)
        + 2;
    let comp_width = ("Comparisons".len() + 2).max(12);
    let time_width = ("Time (ms)".len() + 2).max(12);

    println!(
        "{:<name_width$}{:<comp_width$}{:<time_width$}",
        "Algorithm", "Comparisons", "Time (ms)"
    );
    println!("{}", "-".repeat(name_width + comp_width + time_width));

    for result in &report.results {
        if result.skipped {
            println!(
                "{:<name_width$}{:<comp_width$}{:<time_width$}",
                result.name, "skipped", "skipped"
            );
        } else {
            println!(
                "{:<name_width$}{:<comp_width$}{:<time_width$}{}",
                result.name,
                result.comparisons,
                format_elapsed_ms(result),
                if result.verified { "" } else { "UNSORTED" }
            );
        }
    }

    if let Some(best) = report.best() {
        println!(
            "Actual best: {} (time={} ms, comparisons={})",
            best.name,
            format_elapsed_ms(best),
            best.comparisons
        );
    }
}

/// Advisor prediction paired with the measured winner for one dataset
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionOutcome {
    pub dataset_name: String,
    pub predicted: Algorithm,
    pub actual: Option<String>,
}

impl PredictionOutcome {
    pub fn new(report: &SuiteReport, predicted: Algorithm) -> Self {
        Self {
            dataset_name: report.dataset_name.clone(),
            predicted,
            actual: report.best().map(|r| r.name.clone()),
        }
    }

    /// Labels are shared, so a match is plain string equality.
    pub fn is_match(&self) -> bool {
        self.actual.as_deref() == Some(self.predicted.name())
    }
}

pub fn print_prediction(outcome: &PredictionOutcome) {
    println!("Predicted best: {}", outcome.predicted);
    match &outcome.actual {
        Some(actual) => println!(
            "Prediction {} (actual: {})",
            if outcome.is_match() { "correct" } else { "incorrect" },
            actual
        ),
        None => println!("No result available to check the prediction against"),
    }
}

/// Fraction of outcomes whose prediction matched the measured winner.
pub fn advisor_accuracy(outcomes: &[PredictionOutcome]) -> Option<f64> {
    let scored: Vec<&PredictionOutcome> = outcomes.iter().filter(|o| o.actual.is_some()).collect();
    if scored.is_empty() {
        return None;
    }
    let matched = scored.iter().filter(|o| o.is_match()).count();
    Some(matched as f64 / scored.len() as f64)
}

pub fn print_advisor_accuracy(advisor_name: &str, outcomes: &[PredictionOutcome]) {
    println!("\n=== ADVISOR ACCURACY ({}) ===", advisor_name);
    for outcome in outcomes {
        println!(
            "{:<16} predicted={:<16} actual={:<16} {}",
            outcome.dataset_name,
            outcome.predicted.name(),
            outcome.actual.as_deref().unwrap_or("n/a"),
            if outcome.is_match() { "match" } else { "miss" }
        );
    }
    match advisor_accuracy(outcomes) {
        Some(accuracy) => println!("Accuracy: {:.1}%", accuracy * 100.0),
        None => println!("Accuracy: n/a"),
    }
}

/// Print a compact one-line summary for each dataset
pub fn print_compact_summary(reports: &[SuiteReport]) {
    println!("\n=== COMPACT SUMMARY ===");
    for report in reports {
        match report.best() {
            Some(best) => println!(
                "{} (n={}): {} in {} ms, {} comparisons",
                report.dataset_name,
                report.size,
                best.name,
                format_elapsed_ms(best),
                best.comparisons
            ),
            None => println!("{} (n={}): no result available", report.dataset_name, report.size),
        }
    }
}

/// Generate a CSV of every result, one row per (dataset, algorithm)
pub fn benchmark_results_to_csv(reports: &[SuiteReport]) -> String {
    let mut csv = String::from("dataset,size,algorithm,skipped,comparisons,time_ms,verified,best\n");

    for report in reports {
        let best = report.best().map(|r| r.name.as_str());
        for result in &report.results {
            let (comparisons, time_ms) = if result.skipped {
                (String::new(), String::new())
            } else {
                (result.comparisons.to_string(), format_elapsed_ms(result))
            };
            // Writing to a String cannot fail
            let _ = writeln!(
                csv,
                "{},{},{},{},{},{},{},{}",
                report.dataset_name,
                report.size,
                result.name,
                result.skipped,
                comparisons,
                time_ms,
                result.verified,
                best == Some(result.name.as_str())
            );
        }
    }

    csv
}

pub fn write_csv_report(path: impl AsRef<Path>, reports: &[SuiteReport]) -> Result<()> {
    std::fs::write(path, benchmark_results_to_csv(reports))?;
    Ok(())
}
