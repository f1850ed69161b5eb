//! CSV and console output of dimension reports.

use crate::bench::{DimensionReport, FunctionReport};
use crate::error::Result;
use crate::ranking::ScoredBatch;
use crate::stats::AggregateStats;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const STAT_COLUMNS: [&str; 6] = [
    "Average Fitness",
    "Standard Deviation",
    "Range(min)",
    "Range(max)",
    "Median",
    "Time(ms)",
];

const SEARCH_GROUPS: [&str; 3] = ["Blind Search", "Local Search", "Iterative Local Search"];

/// `{stem}-Analysis-{D}DimensionResults.csv`
pub fn analysis_file_name(stem: &str, dimensions: usize) -> String {
    format!("{stem}-Analysis-{dimensions}DimensionResults.csv")
}

/// `{stem}-SearchAlgorithmAnalysis-{D}DimensionResults.csv`
pub fn search_analysis_file_name(stem: &str, dimensions: usize) -> String {
    format!("{stem}-SearchAlgorithmAnalysis-{dimensions}DimensionResults.csv")
}

/// `{stem}-{D}Dimensional-{FunctionStem}.csv`
pub fn batch_file_name(stem: &str, dimensions: usize, function_stem: &str) -> String {
    format!("{stem}-{dimensions}Dimensional-{function_stem}.csv")
}

fn stat_fields(stats: &AggregateStats) -> [String; 6] {
    let s = &stats.summary;
    [
        s.average.to_string(),
        s.std_dev.to_string(),
        s.min.to_string(),
        s.max.to_string(),
        s.median.to_string(),
        format!("{:.3}", stats.elapsed_ms()),
    ]
}

/// Writes one row per report with the statistics of its raw sample.
pub fn write_function_analysis<W: Write>(writer: W, reports: &[FunctionReport]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(std::iter::once("Function ID").chain(STAT_COLUMNS))?;
    for report in reports {
        let mut row = vec![report.function_id.to_string()];
        row.extend(stat_fields(&report.fitness_stats));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the blind, local and iterative local search statistics side by
/// side, under a row naming the three column groups.
///
/// Returns `false`, writing nothing, when `reports` is empty.
pub fn write_search_analysis<W: Write>(writer: W, reports: &[FunctionReport]) -> Result<bool> {
    if reports.is_empty() {
        return Ok(false);
    }

    let mut wtr = csv::Writer::from_writer(writer);

    let mut groups = vec![""];
    for group in SEARCH_GROUPS {
        groups.push(group);
        groups.extend([""; 5]);
    }
    wtr.write_record(&groups)?;

    let mut header = vec!["Function ID"];
    for _ in SEARCH_GROUPS {
        header.extend(STAT_COLUMNS);
    }
    wtr.write_record(&header)?;

    for report in reports {
        let mut row = vec![report.function_id.to_string()];
        for stats in report.search_stats() {
            row.extend(stat_fields(stats));
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(true)
}

/// Writes a ranked sample: each row is the fitness followed by the vector.
pub fn write_batch<W: Write>(writer: W, batch: &ScoredBatch) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);
    wtr.write_record(["Fitness", "Vector"])?;
    for record in batch.records() {
        wtr.write_record(
            std::iter::once(record.fitness)
                .chain(record.vector.iter().copied())
                .map(|v| v.to_string()),
        )?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes every CSV file of `report` into `dir` and returns their paths.
///
/// The search analysis file is skipped when the report has no completed
/// runs. Per-function sample files are written only with `save_batches`.
pub fn save_dimension(
    report: &DimensionReport,
    dir: &Path,
    stem: &str,
    save_batches: bool,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let path = dir.join(analysis_file_name(stem, report.dimensions));
    write_function_analysis(File::create(&path)?, &report.reports)?;
    written.push(path);

    if report.is_empty() {
        tracing::info!(dimensions = report.dimensions, "no search results to save");
    } else {
        let path = dir.join(search_analysis_file_name(stem, report.dimensions));
        write_search_analysis(File::create(&path)?, &report.reports)?;
        written.push(path);
    }

    if save_batches {
        for function in &report.reports {
            let path = dir.join(batch_file_name(stem, report.dimensions, &function.file_stem));
            write_batch(File::create(&path)?, &function.batch)?;
            written.push(path);
        }
    }

    for path in &written {
        tracing::debug!(path = %path.display(), "report written");
    }
    Ok(written)
}

/// Formats the raw-sample statistics of `report` as an aligned text table.
pub fn format_analysis_table(report: &DimensionReport) -> String {
    let mut out = format!("Dimensions: {}\n", report.dimensions);
    out.push_str(&format!(
        "{:>11}  {:>16}  {:>18}  {:>16}  {:>16}  {:>16}  {:>10}\n",
        "Function ID",
        STAT_COLUMNS[0],
        STAT_COLUMNS[1],
        STAT_COLUMNS[2],
        STAT_COLUMNS[3],
        STAT_COLUMNS[4],
        STAT_COLUMNS[5]
    ));
    for r in &report.reports {
        let s = &r.fitness_stats.summary;
        out.push_str(&format!(
            "{:>11}  {:>16.6}  {:>18.6}  {:>16.6}  {:>16.6}  {:>16.6}  {:>10.3}\n",
            r.function_id,
            s.average,
            s.std_dev,
            s.min,
            s.max,
            s.median,
            r.fitness_stats.elapsed_ms()
        ));
    }
    for skipped in &report.skipped {
        out.push_str(&format!(
            "{:>11}  skipped: {}\n",
            skipped.function_id, skipped.error
        ));
    }
    out
}
