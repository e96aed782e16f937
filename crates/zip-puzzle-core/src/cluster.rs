use log::warn;

/// Collapse near-duplicate 1-D coordinates into representative boundary
/// positions.
///
/// Positions are sorted ascending and scanned once: a value joins the open
/// cluster when its distance to the *last value added* to that cluster is
/// strictly below `eps`, otherwise the cluster is closed and a new one
/// starts. Each cluster is emitted as its mean, truncated to an integer;
/// the output is therefore sorted and duplicate-free.
///
/// Comparing against the last-added value rather than the running mean
/// means a chain of mutually close points can span far more than `eps` in
/// total. That tolerance for gradual drift (thick or slightly skewed grid
/// lines) is intended and must not be tightened to a mean-distance test.
///
/// Returns `None` for empty input; at least one position is required.
pub fn cluster_positions(positions: &[f32], eps: f32) -> Option<Vec<i32>> {
    if positions.is_empty() {
        warn!("cluster_positions called with no positions");
        return None;
    }

    let mut sorted = positions.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut clusters = Vec::new();
    let mut current = vec![sorted[0]];
    let mut last = sorted[0];

    for &position in &sorted[1..] {
        if (position - last).abs() < eps {
            current.push(position);
        } else {
            clusters.push(truncated_mean(&current));
            current.clear();
            current.push(position);
        }
        last = position;
    }
    clusters.push(truncated_mean(&current));

    Some(clusters)
}

fn truncated_mean(values: &[f32]) -> i32 {
    let sum: f64 = values.iter().map(|&v| f64::from(v)).sum();
    (sum / values.len() as f64) as i32
}
