// File: crates/closeline-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f32, end: f32, steps: usize) -> Vec<f32> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f32 - 1.0);
    (0..steps).map(|i| start + step * i as f32).collect()
}
