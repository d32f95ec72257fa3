//! Seeded k-means clustering in 3-D color space
//!
//! Compact Lloyd's algorithm with k-means++ initialization. All randomness
//! comes from the generator passed in by the caller, so a fixed seed gives
//! bit-for-bit identical clusterings across runs.

use rand::rngs::StdRng;
use rand::Rng;

/// Result of the best k-means trial
#[derive(Debug, Clone)]
pub(crate) struct KmeansOutcome {
    /// Cluster centers, one per requested cluster
    pub centers: Vec<[f32; 3]>,
    /// Points assigned to each center in the final assignment pass
    pub counts: Vec<usize>,
    /// Total within-cluster sum of squared distances
    pub wcss: f64,
}

fn distance_sq(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Index of the nearest center; ties resolve to the lowest index
fn nearest_center(point: [f32; 3], centers: &[[f32; 3]]) -> (usize, f32) {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (index, &center) in centers.iter().enumerate() {
        let dist = distance_sq(point, center);
        if dist < best_dist {
            best = index;
            best_dist = dist;
        }
    }
    (best, best_dist)
}

/// k-means++ seeding: each next center is drawn with probability
/// proportional to squared distance from the nearest existing center
fn init_centers(points: &[[f32; 3]], k: usize, rng: &mut StdRng) -> Vec<[f32; 3]> {
    let mut centers = Vec::with_capacity(k);
    centers.push(points[rng.gen_range(0..points.len())]);

    let mut dist = vec![f32::INFINITY; points.len()];
    while centers.len() < k {
        let newest = centers[centers.len() - 1];
        for (slot, &point) in dist.iter_mut().zip(points.iter()) {
            *slot = slot.min(distance_sq(point, newest));
        }

        let total: f64 = dist.iter().map(|&d| d as f64).sum();
        let index = if total > 0.0 {
            // Weighted draw via the cumulative distance mass
            let target = rng.gen::<f64>() * total;
            let mut acc = 0.0;
            let mut chosen = points.len() - 1;
            for (i, &d) in dist.iter().enumerate() {
                acc += d as f64;
                if acc >= target {
                    chosen = i;
                    break;
                }
            }
            chosen
        } else {
            // Fewer distinct points than k: duplicate an arbitrary point,
            // leaving the surplus cluster empty after assignment
            rng.gen_range(0..points.len())
        };
        centers.push(points[index]);
    }
    centers
}

/// One Lloyd trial from a given initialization
fn lloyd(
    points: &[[f32; 3]],
    mut centers: Vec<[f32; 3]>,
    max_iter: u32,
    epsilon: f32,
) -> KmeansOutcome {
    let k = centers.len();
    let mut iterations = 0;

    loop {
        let mut sums = vec![[0f64; 3]; k];
        let mut counts = vec![0usize; k];
        for &point in points {
            let (index, _) = nearest_center(point, &centers);
            counts[index] += 1;
            for (sum, channel) in sums[index].iter_mut().zip(point) {
                *sum += channel as f64;
            }
        }

        let mut movement = 0f32;
        for index in 0..k {
            // An empty cluster keeps its previous center and reports
            // proportion 0.0 downstream
            if counts[index] == 0 {
                continue;
            }
            let updated = sums[index].map(|sum| (sum / counts[index] as f64) as f32);
            movement = movement.max(distance_sq(centers[index], updated).sqrt());
            centers[index] = updated;
        }

        iterations += 1;
        if movement <= epsilon || iterations >= max_iter {
            break;
        }
    }

    // Final assignment pass so counts and variance match the returned centers
    let mut counts = vec![0usize; k];
    let mut wcss = 0f64;
    for &point in points {
        let (index, dist) = nearest_center(point, &centers);
        counts[index] += 1;
        wcss += dist as f64;
    }

    KmeansOutcome { centers, counts, wcss }
}

/// Cluster `points` into `k` groups, keeping the best of `restarts` trials
///
/// The trial with the lowest within-cluster sum of squares wins; ties keep
/// the earliest trial. Callers must pass `k >= 1`, `restarts >= 1`, and a
/// non-empty point set (the extractor validates its configuration first).
pub(crate) fn run(
    points: &[[f32; 3]],
    k: usize,
    max_iter: u32,
    epsilon: f32,
    restarts: u32,
    rng: &mut StdRng,
) -> KmeansOutcome {
    let mut best = lloyd(points, init_centers(points, k, rng), max_iter, epsilon);
    for _ in 1..restarts {
        let outcome = lloyd(points, init_centers(points, k, rng), max_iter, epsilon);
        if outcome.wcss < best.wcss {
            best = outcome;
        }
    }
    best
}
