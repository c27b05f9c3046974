//! Interactive timing comparisons.
//!
//! Each mode times two implementations of the same operation over growing
//! inputs and opens a plot window of time against input size. Green markers
//! show the sizes where both implementations returned the same result.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- sort
//! cargo run --example plot --features plot -- sum
//! RUST_LOG=debug cargo run --example plot --features plot -- sort
//! ```
//!
//! # Modes
//!
//! - **sort** — Bubble sort vs. the standard library sort on reversed
//!   vectors. Both always agree, so every size is marked.
//!
//! - **sum** — Summing `0.1` repeatedly vs. multiplying `0.1` by the count.
//!   The results drift apart by rounding, so most sizes go unmarked.

use std::{convert::Infallible, error::Error};

use tandem_compare::compare::{self, Candidate, Config};
use tandem_core::Model;
use tandem_observers::{PlotSurface, ShowConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "sort".into());
    match mode.as_str() {
        "sort" => sort(),
        "sum" => sum(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [sort|sum]");
            std::process::exit(1);
        }
    }
}

/// Input sizes from 100 to 3000 in steps of 100.
fn sizes() -> impl Iterator<Item = i32> {
    (1..=30).map(|i| i * 100)
}

// --- Sort --------------------------------------------------------------------

/// Sorts with repeated adjacent swaps.
struct BubbleSort;

impl Model for BubbleSort {
    type Input = Vec<i32>;
    type Output = Vec<i32>;
    type Error = Infallible;

    fn call(&self, input: &Vec<i32>) -> Result<Vec<i32>, Infallible> {
        let mut v = input.clone();
        for end in (1..v.len()).rev() {
            for i in 0..end {
                if v[i] > v[i + 1] {
                    v.swap(i, i + 1);
                }
            }
        }
        Ok(v)
    }
}

/// Sorts with [`slice::sort_unstable`].
struct StdSort;

impl Model for StdSort {
    type Input = Vec<i32>;
    type Output = Vec<i32>;
    type Error = Infallible;

    fn call(&self, input: &Vec<i32>) -> Result<Vec<i32>, Infallible> {
        let mut v = input.clone();
        v.sort_unstable();
        Ok(v)
    }
}

fn sort() -> Result<(), Box<dyn Error>> {
    let first = Candidate::new("bubble_sort", BubbleSort);
    let second = Candidate::new("std_sort", StdSort);
    let data = sizes().map(|n| (n, (0..n).rev().collect::<Vec<_>>()));

    let surface = compare::timer(&first, &second, data, &Config::default(), PlotSurface::new())?;
    surface.show(ShowConfig::new())?;

    Ok(())
}

// --- Sum ---------------------------------------------------------------------

/// Adds `0.1` once per count.
struct RepeatedAdd;

impl Model for RepeatedAdd {
    type Input = u32;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, count: &u32) -> Result<f64, Infallible> {
        Ok((0..*count).fold(0.0, |acc, _| acc + 0.1))
    }
}

/// Multiplies `0.1` by the count.
struct Multiply;

impl Model for Multiply {
    type Input = u32;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, count: &u32) -> Result<f64, Infallible> {
        Ok(f64::from(*count) * 0.1)
    }
}

fn sum() -> Result<(), Box<dyn Error>> {
    let first = Candidate::new("repeated_add", RepeatedAdd);
    let second = Candidate::new("multiply", Multiply);
    let data = sizes().map(|n| (n, n.unsigned_abs() * 1000));

    let surface = compare::timer(&first, &second, data, &Config::default(), PlotSurface::new())?;
    surface.show(ShowConfig::new())?;

    Ok(())
}
