//! `relurl bench`: compares memoized and uncached classification on a
//! synthetic workload and logs the results.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use relurl::{CacheStats, Classifier, ClassifierConfig, ClassifyOptions, ResultCache};

/// Templates cycled through to build the workload. `{}` is replaced by an index.
const TEMPLATES: [&str; 10] = [
    "https://example.com/page/{}",
    "http://cdn{}.example.com/asset.js",
    "/static/img/{}.png",
    "../docs/chapter-{}.html",
    "//media{}.example.net/video.mp4",
    "mailto:user{}@example.com",
    "C:\\Users\\user{}\\file.txt",
    "data:text/plain,{}",
    "tel:+1555{}",
    "path/segment-{}",
];

/// Timing of one run over the workload.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Run label
    pub name: &'static str,
    /// Wall-clock time
    pub elapsed_ms: f64,
    /// Average cost per classification
    pub ns_per_call: f64,
    /// Inputs classified as relative
    pub relative: usize,
}

/// Full benchmark result.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    /// Classifications per run
    pub count: usize,
    /// Distinct inputs in the workload
    pub distinct: usize,
    /// Individual runs
    pub runs: Vec<RunReport>,
    /// Cache counters after the cached run
    pub cache: CacheStats,
}

/// Builds `distinct` inputs by cycling the templates.
pub fn workload(distinct: usize) -> Vec<String> {
    (0..distinct)
        .map(|i| TEMPLATES[i % TEMPLATES.len()].replace("{}", &i.to_string()))
        .collect()
}

pub fn run(config: ClassifierConfig, count: usize, distinct: usize, json: bool) -> Result<()> {
    ensure!(count > 0, "--count must be at least 1");
    ensure!(distinct > 0, "--distinct must be at least 1");

    let inputs = workload(distinct);
    let options = config.defaults;

    if !json {
        println!(
            "{} {} calls over {} distinct inputs",
            "📊 Benchmarking".cyan().bold(),
            count,
            distinct
        );
    }

    let uncached = Classifier::uncached();
    let uncached_run = time_run("uncached", &uncached, &inputs, count, &options, json)?;

    let cache: Arc<ResultCache> = Arc::new(ResultCache::with_config(config.cache)?);
    let cached = Classifier::with_cache(cache.clone());
    let cached_run = time_run("cached", &cached, &inputs, count, &options, json)?;

    ensure!(
        uncached_run.relative == cached_run.relative,
        "cached and uncached runs disagree ({} vs {} relative)",
        cached_run.relative,
        uncached_run.relative
    );

    let report = BenchReport {
        count,
        distinct,
        runs: vec![uncached_run, cached_run],
        cache: cache.stats(),
    };

    for run in &report.runs {
        info!(
            run = run.name,
            elapsed_ms = run.elapsed_ms,
            ns_per_call = run.ns_per_call,
            "benchmark run finished"
        );
    }
    info!(
        hits = report.cache.hits,
        misses = report.cache.misses,
        evictions = report.cache.evictions,
        hit_rate = report.cache.hit_rate(),
        "cache statistics"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn time_run(
    name: &'static str,
    classifier: &Classifier,
    inputs: &[String],
    count: usize,
    options: &ClassifyOptions,
    quiet: bool,
) -> Result<RunReport> {
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("   {msg:>8} [{bar:40.cyan/blue}] {pos}/{len}")?
                .progress_chars("#>-"),
        );
        pb.set_message(name);
        pb
    };

    let step = (count / 100).max(1);
    let mut relative = 0usize;
    let mut elapsed = Duration::ZERO;

    for (i, input) in inputs.iter().cycle().take(count).enumerate() {
        let start = Instant::now();
        let verdict = classifier.is_relative(input, options);
        elapsed += start.elapsed();

        if verdict {
            relative += 1;
        }
        if (i + 1) % step == 0 {
            pb.inc(step as u64);
        }
    }
    pb.finish_and_clear();

    Ok(RunReport {
        name,
        elapsed_ms: elapsed.as_secs_f64() * 1e3,
        ns_per_call: elapsed.as_nanos() as f64 / count as f64,
        relative,
    })
}

fn print_report(report: &BenchReport) {
    println!("\n{}", "📈 Results:".green().bold());
    for run in &report.runs {
        println!(
            "   {:<8} {:>10.2} ms  {:>8.1} ns/call  ({} relative)",
            run.name, run.elapsed_ms, run.ns_per_call, run.relative
        );
    }

    if let [uncached, cached] = report.runs.as_slice() {
        if cached.elapsed_ms > 0.0 {
            println!(
                "   {} {:.2}x",
                "Speedup:".dimmed(),
                uncached.elapsed_ms / cached.elapsed_ms
            );
        }
    }

    let stats = &report.cache;
    println!(
        "   {} {}/{} entries, {} hits, {} misses, {} evictions ({:.1}% hit rate)",
        "Cache:".dimmed(),
        stats.entries,
        stats.capacity,
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.hit_rate() * 100.0
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use relurl::is_relative_uncached;

    #[test]
    fn test_workload_is_distinct() {
        let inputs = workload(25);
        let unique: std::collections::HashSet<_> = inputs.iter().collect();
        assert_eq!(inputs.len(), 25);
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn test_workload_mixes_verdicts() {
        let inputs = workload(10);
        let relative = inputs
            .iter()
            .filter(|s| is_relative_uncached(s.as_str(), &ClassifyOptions::default()))
            .count();
        // static, ../, //, drive path, bare path
        assert_eq!(relative, 5);
    }

    #[test]
    fn test_time_run_counts_relative() {
        let inputs = workload(10);
        let classifier = Classifier::new();
        let run = time_run("t", &classifier, &inputs, 20, &ClassifyOptions::default(), true).unwrap();
        assert_eq!(run.relative, 10);
        assert_eq!(classifier.cache().len(), 10);
    }

    #[test]
    fn test_run_rejects_empty_workload() {
        assert!(run(ClassifierConfig::default(), 10, 0, true).is_err());
        assert!(run(ClassifierConfig::default(), 0, 10, true).is_err());
    }
}
