//! Text configuration files.
//!
//! Two plain-text formats drive the binary:
//!
//! - the benchmark plan: line 1 lists dimensionalities separated by commas,
//!   every following non-blank line is `function_id,min,max`;
//! - the search config: line 1 holds the iteration count, line 2 alpha.
//!
//! Numeric tokens accept `pi` and `-pi` for ±π.

use crate::bench::FunctionRunConfig;
use crate::error::{BenchError, Result};
use crate::search::SearchConfig;
use std::f64::consts::PI;
use std::path::Path;
use std::str::FromStr;

/// One `function_id,min,max` line of a benchmark plan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionEntry {
    pub id: i64,
    pub min: f64,
    pub max: f64,
}

/// Dimensionalities and function entries to benchmark.
///
/// # Examples
///
/// ```
/// use u_benchsearch::config::BenchmarkPlan;
///
/// let plan: BenchmarkPlan = "10,20\n1,-512,512\n11,-pi,pi\n".parse().unwrap();
/// assert_eq!(plan.dimensions, vec![10, 20]);
/// assert_eq!(plan.functions.len(), 2);
/// assert_eq!(plan.runs(30).len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkPlan {
    pub dimensions: Vec<usize>,
    pub functions: Vec<FunctionEntry>,
}

impl BenchmarkPlan {
    /// Reads a plan from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        std::fs::read_to_string(path)?.parse()
    }

    /// One [`FunctionRunConfig`] per entry, drawing `samples` candidates.
    ///
    /// Dimensionality is left at its default; callers set it per dimension.
    pub fn runs(&self, samples: usize) -> Vec<FunctionRunConfig> {
        self.functions
            .iter()
            .map(|e| FunctionRunConfig::new(e.id, e.min, e.max).with_samples(samples))
            .collect()
    }
}

impl FromStr for BenchmarkPlan {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

        let (first_no, first) = lines
            .by_ref()
            .find(|(_, line)| !line.is_empty())
            .ok_or_else(|| malformed(1, "missing dimension line"))?;

        let dimensions = split_tokens(first)
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| malformed(first_no, format!("bad dimension `{token}`")))
            })
            .collect::<Result<Vec<_>>>()?;
        if dimensions.is_empty() {
            return Err(malformed(first_no, "no dimensions listed"));
        }

        let functions = lines
            .filter(|(_, line)| !line.is_empty())
            .map(|(no, line)| parse_entry(no, line))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            dimensions,
            functions,
        })
    }
}

fn parse_entry(line_no: usize, line: &str) -> Result<FunctionEntry> {
    let tokens: Vec<&str> = split_tokens(line).collect();
    let [id, min, max, ..] = tokens[..] else {
        return Err(malformed(
            line_no,
            format!("expected `id,min,max`, got `{line}`"),
        ));
    };

    let id = id
        .parse::<i64>()
        .map_err(|_| malformed(line_no, format!("bad function ID `{id}`")))?;
    Ok(FunctionEntry {
        id,
        min: parse_real(line_no, min)?,
        max: parse_real(line_no, max)?,
    })
}

/// Parses the two-line search config: iterations, then alpha.
///
/// Fields not present in the file keep their [`SearchConfig`] defaults.
pub fn parse_search_config(s: &str) -> Result<SearchConfig> {
    let mut lines = s
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (iter_no, iterations) = lines
        .next()
        .ok_or_else(|| malformed(1, "missing iteration count"))?;
    let iterations = iterations
        .parse::<usize>()
        .map_err(|_| malformed(iter_no, format!("bad iteration count `{iterations}`")))?;

    let (alpha_no, alpha) = lines
        .next()
        .ok_or_else(|| malformed(iter_no + 1, "missing alpha"))?;
    let alpha = parse_real(alpha_no, alpha)?;

    let config = SearchConfig::default()
        .with_iterations(iterations)
        .with_alpha(alpha);
    config.validate()?;
    Ok(config)
}

/// Reads the search config from `path`.
pub fn load_search_config(path: impl AsRef<Path>) -> Result<SearchConfig> {
    parse_search_config(&std::fs::read_to_string(path)?)
}

fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim).filter(|t| !t.is_empty())
}

fn parse_real(line_no: usize, token: &str) -> Result<f64> {
    match token.to_ascii_lowercase().as_str() {
        "pi" | "+pi" => Ok(PI),
        "-pi" => Ok(-PI),
        other => other
            .parse::<f64>()
            .map_err(|_| malformed(line_no, format!("bad number `{token}`"))),
    }
}

fn malformed(line: usize, message: impl Into<String>) -> BenchError {
    BenchError::MalformedConfig {
        line,
        message: message.into(),
    }
}
