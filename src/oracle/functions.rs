//! The 18 standard benchmark functions.
//!
//! Every function accepts any dimension `D >= 1`. Functions built on
//! neighboring pairs sum over `(x[i], x[i + 1])` for `i in 0..D - 1`, so they
//! evaluate to zero for a single coordinate.

use std::f64::consts::{E, PI};

/// Signature shared by all standard functions.
pub type ScoreFn = fn(&[f64]) -> f64;

/// `(id, name, function)` for every standard benchmark function.
pub const STANDARD_FUNCTIONS: [(u32, &str, ScoreFn); 18] = [
    (1, "Schwefel", schwefel),
    (2, "De Jong 1", de_jong),
    (3, "Rosenbrock", rosenbrock),
    (4, "Rastrigin", rastrigin),
    (5, "Griewangk", griewangk),
    (6, "Sine Envelope Sine Wave", sine_envelope_sine_wave),
    (7, "Stretched V Sine Wave", stretched_v_sine_wave),
    (8, "Ackley One", ackley_one),
    (9, "Ackley Two", ackley_two),
    (10, "Egg Holder", egg_holder),
    (11, "Rana", rana),
    (12, "Pathological", pathological),
    (13, "Michalewicz", michalewicz),
    (14, "Masters Cosine Wave", masters_cosine_wave),
    (15, "Quartic", quartic),
    (16, "Levy", levy),
    (17, "Step", step),
    (18, "Alpine", alpine),
];

fn pairs(x: &[f64]) -> impl Iterator<Item = (f64, f64)> + '_ {
    x.windows(2).map(|w| (w[0], w[1]))
}

/// Schwefel: `418.9829 D - sum x_i sin(sqrt|x_i|)`, minimum near 420.9687.
pub fn schwefel(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|&v| v * v.abs().sqrt().sin()).sum();
    418.9829 * x.len() as f64 - sum
}

/// First De Jong (sphere): `sum x_i^2`.
pub fn de_jong(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

pub fn rosenbrock(x: &[f64]) -> f64 {
    pairs(x)
        .map(|(a, b)| {
            let t = a * a - b;
            100.0 * t * t + (1.0 - a) * (1.0 - a)
        })
        .sum()
}

pub fn rastrigin(x: &[f64]) -> f64 {
    let sum: f64 = x
        .iter()
        .map(|&v| v * v - 10.0 * (2.0 * PI * v).cos())
        .sum();
    10.0 * x.len() as f64 + sum
}

pub fn griewangk(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|v| v * v / 4000.0).sum();
    let product: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &v)| (v / ((i + 1) as f64).sqrt()).cos())
        .product();
    1.0 + sum - product
}

pub fn sine_envelope_sine_wave(x: &[f64]) -> f64 {
    -pairs(x)
        .map(|(a, b)| {
            let r2 = a * a + b * b;
            let s = (r2 - 0.5).sin();
            let d = 1.0 + 0.001 * r2;
            0.5 + s * s / (d * d)
        })
        .sum::<f64>()
}

pub fn stretched_v_sine_wave(x: &[f64]) -> f64 {
    pairs(x)
        .map(|(a, b)| {
            let r2 = a * a + b * b;
            let s = (50.0 * r2.powf(0.1)).sin();
            r2.powf(0.25) * s * s + 1.0
        })
        .sum()
}

pub fn ackley_one(x: &[f64]) -> f64 {
    let scale = (-0.2f64).exp();
    pairs(x)
        .map(|(a, b)| {
            scale * (a * a + b * b).sqrt() + 3.0 * ((2.0 * a).cos() + (2.0 * b).sin())
        })
        .sum()
}

pub fn ackley_two(x: &[f64]) -> f64 {
    pairs(x)
        .map(|(a, b)| {
            let radial = (-0.2 * ((a * a + b * b) / 2.0).sqrt()).exp();
            let periodic = (0.5 * ((2.0 * PI * a).cos() + (2.0 * PI * b).cos())).exp();
            20.0 + E - 20.0 * radial - periodic
        })
        .sum()
}

/// Egg holder; the 2-D minimum is about -959.6407 at (512, 404.2319).
pub fn egg_holder(x: &[f64]) -> f64 {
    pairs(x)
        .map(|(a, b)| {
            -a * (a - b - 47.0).abs().sqrt().sin()
                - (b + 47.0) * (b + 47.0 + a / 2.0).abs().sqrt().sin()
        })
        .sum()
}

pub fn rana(x: &[f64]) -> f64 {
    pairs(x)
        .map(|(a, b)| {
            let p = (b - a + 1.0).abs().sqrt();
            let q = (b + a + 1.0).abs().sqrt();
            a * p.sin() * q.cos() + (b + 1.0) * p.cos() * q.sin()
        })
        .sum()
}

pub fn pathological(x: &[f64]) -> f64 {
    pairs(x)
        .map(|(a, b)| {
            let s = (100.0 * a * a + b * b).sqrt().sin();
            let d = a * a - 2.0 * a * b + b * b;
            0.5 + (s * s - 0.5) / (1.0 + 0.001 * d * d)
        })
        .sum()
}

/// Michalewicz with steepness `m = 10`.
pub fn michalewicz(x: &[f64]) -> f64 {
    -x.iter()
        .enumerate()
        .map(|(i, &v)| v.sin() * ((i + 1) as f64 * v * v / PI).sin().powi(20))
        .sum::<f64>()
}

pub fn masters_cosine_wave(x: &[f64]) -> f64 {
    -pairs(x)
        .map(|(a, b)| {
            let r = a * a + b * b + 0.5 * a * b;
            (-r / 8.0).exp() * (4.0 * r.sqrt()).cos()
        })
        .sum::<f64>()
}

pub fn quartic(x: &[f64]) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &v)| (i + 1) as f64 * v.powi(4))
        .sum()
}

/// Levy, minimum 0 at `x = (1, ..., 1)`.
pub fn levy(x: &[f64]) -> f64 {
    let w: Vec<f64> = x.iter().map(|&v| 1.0 + (v - 1.0) / 4.0).collect();
    let (Some(&first), Some(&last)) = (w.first(), w.last()) else {
        return 0.0;
    };
    let head = (PI * first).sin().powi(2);
    let body: f64 = w[..w.len() - 1]
        .iter()
        .map(|&wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
        .sum();
    let tail = (last - 1.0).powi(2) * (1.0 + (2.0 * PI * last).sin().powi(2));
    head + body + tail
}

pub fn step(x: &[f64]) -> f64 {
    x.iter().map(|&v| (v + 0.5).floor().powi(2)).sum()
}

pub fn alpine(x: &[f64]) -> f64 {
    x.iter().map(|&v| (v * v.sin() + 0.1 * v).abs()).sum()
}
