// File: crates/weather-core/src/grid.rs
// Summary: Evenly spaced positions for chart ticks and points.

/// `steps` evenly spaced values from `start` to `end`, both endpoints exact.
/// A single step yields `[start]`; zero steps yields nothing.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (steps - 1) as f64;
            (0..steps).map(|i| start + (end - start) * i as f64 / last).collect()
        }
    }
}
