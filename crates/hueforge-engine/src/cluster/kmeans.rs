//! Seeded k-means++ in OKLab.
//!
//! Fully deterministic: the LCG is seeded from a content hash of the
//! input points, the first centroid is the middle element, and subsequent
//! centroids are drawn with probability proportional to the *cube* of the
//! distance to the nearest existing centroid (the cube pushes seeds
//! harder toward outlying accent colors than classic d²).

use hueforge_core::space::oklch::Oklab;
use tracing::trace;

use crate::capabilities::CancelToken;
use crate::config::TuningConfig;
use crate::error::ExtractionError;
use crate::rng::{content_hash, SeededLcg};

/// Seeding distance weights: `√(Δl² + 4Δa² + 4Δb²)`.
const SEED_WL: f64 = 1.0;
const SEED_WAB: f64 = 4.0;

/// One converged cluster.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cluster {
    /// Mean OKLab of the member points
    pub centroid: Oklab,
    /// Member count
    pub size: usize,
}

/// Run seeded k-means++ and Lloyd iterations.
///
/// Returns non-empty clusters sorted by size descending (stable on ties).
///
/// # Errors
///
/// [`ExtractionError::Cancelled`] when the token trips mid-iteration.
pub(crate) fn kmeans(
    points: &[Oklab],
    k: usize,
    config: &TuningConfig,
    cancel: &CancelToken,
) -> Result<Vec<Cluster>, ExtractionError> {
    let n = points.len();
    if n == 0 || k == 0 {
        return Ok(Vec::new());
    }
    let k = k.min(n);

    let mut centroids = seed_centroids(points, k);

    let mut assignments = vec![0usize; n];
    for iteration in 0..config.kmeans_max_iterations {
        if cancel.is_cancelled() {
            return Err(ExtractionError::Cancelled);
        }

        // Assignment: nearest centroid by plain Euclidean distance,
        // ties to the lower index.
        for (point, slot) in points.iter().zip(assignments.iter_mut()) {
            let mut best = 0usize;
            let mut best_dist = f64::INFINITY;
            for (idx, centroid) in centroids.iter().enumerate() {
                let dist = point.distance(centroid);
                if dist < best_dist {
                    best_dist = dist;
                    best = idx;
                }
            }
            *slot = best;
        }

        // Update: mean of each cluster; empty clusters keep their centroid.
        let mut sums = vec![(0.0f64, 0.0f64, 0.0f64, 0usize); centroids.len()];
        for (point, &slot) in points.iter().zip(assignments.iter()) {
            let entry = &mut sums[slot];
            entry.0 += point.l;
            entry.1 += point.a;
            entry.2 += point.b;
            entry.3 += 1;
        }

        let mut converged = true;
        for (centroid, &(l, a, b, count)) in centroids.iter_mut().zip(sums.iter()) {
            if count == 0 {
                continue;
            }
            let next = Oklab::new(l / count as f64, a / count as f64, b / count as f64);
            if (next.l - centroid.l).abs() >= config.kmeans_epsilon
                || (next.a - centroid.a).abs() >= config.kmeans_epsilon
                || (next.b - centroid.b).abs() >= config.kmeans_epsilon
            {
                converged = false;
            }
            *centroid = next;
        }

        if converged {
            trace!(iteration, "lloyd converged");
            break;
        }
    }

    let mut counts = vec![0usize; centroids.len()];
    for &slot in &assignments {
        counts[slot] += 1;
    }

    let mut clusters: Vec<Cluster> = centroids
        .into_iter()
        .zip(counts)
        .filter(|(_, size)| *size > 0)
        .map(|(centroid, size)| Cluster { centroid, size })
        .collect();
    clusters.sort_by(|a, b| b.size.cmp(&a.size));

    Ok(clusters)
}

/// k-means++ seeding with d³ weights.
fn seed_centroids(points: &[Oklab], k: usize) -> Vec<Oklab> {
    let n = points.len();
    let mut rng = SeededLcg::new(content_hash(points));

    // First centroid is deterministic: the middle element.
    let mut centroids = vec![points[n / 2]];

    while centroids.len() < k {
        let weights: Vec<f64> = points
            .iter()
            .map(|p| {
                let d = centroids
                    .iter()
                    .map(|c| p.weighted_distance(c, SEED_WL, SEED_WAB))
                    .fold(f64::INFINITY, f64::min);
                d * d * d
            })
            .collect();

        let total: f64 = weights.iter().sum();
        let chosen = if total > 0.0 {
            let threshold = rng.next() * total;
            let mut cumulative = 0.0;
            let mut selected = None;
            for (idx, w) in weights.iter().enumerate() {
                cumulative += w;
                if cumulative >= threshold {
                    selected = Some(idx);
                    break;
                }
            }
            // Floating-point edge: the walk can exhaust without selecting
            selected.unwrap_or_else(|| rng.next_int(0, n))
        } else {
            rng.next_int(0, n)
        };

        centroids.push(points[chosen]);
    }

    centroids
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueforge_core::color::Color;

    fn points_from(colors: &[(u8, u8, u8)], copies: usize) -> Vec<Oklab> {
        colors
            .iter()
            .flat_map(|&(r, g, b)| {
                std::iter::repeat(Oklab::from_color(&Color::from_srgb8(r, g, b))).take(copies)
            })
            .collect()
    }

    #[test]
    fn test_two_well_separated_clusters() {
        let points = points_from(&[(255, 0, 0), (0, 0, 255)], 50);
        let clusters = kmeans(
            &points,
            2,
            &TuningConfig::default(),
            &CancelToken::new(),
        )
        .unwrap();

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].size + clusters[1].size, 100);
        // Each centroid should be near one of the inputs
        let red = Oklab::from_color(&Color::from_srgb8(255, 0, 0));
        let blue = Oklab::from_color(&Color::from_srgb8(0, 0, 255));
        for cluster in &clusters {
            let to_red = cluster.centroid.distance(&red);
            let to_blue = cluster.centroid.distance(&blue);
            assert!(to_red.min(to_blue) < 0.05);
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let points = points_from(&[(200, 30, 40), (30, 200, 40), (40, 30, 200), (200, 200, 30)], 25);
        let config = TuningConfig::default();
        let a = kmeans(&points, 4, &config, &CancelToken::new()).unwrap();
        let b = kmeans(&points, 4, &config, &CancelToken::new()).unwrap();

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.size, y.size);
            assert_eq!(x.centroid.l.to_bits(), y.centroid.l.to_bits());
            assert_eq!(x.centroid.a.to_bits(), y.centroid.a.to_bits());
            assert_eq!(x.centroid.b.to_bits(), y.centroid.b.to_bits());
        }
    }

    #[test]
    fn test_k_larger_than_n() {
        let points = points_from(&[(10, 20, 30)], 3);
        let clusters = kmeans(&points, 8, &TuningConfig::default(), &CancelToken::new()).unwrap();
        assert!(!clusters.is_empty());
        assert!(clusters.len() <= 3);
    }

    #[test]
    fn test_empty_input() {
        let clusters = kmeans(&[], 4, &TuningConfig::default(), &CancelToken::new()).unwrap();
        assert!(clusters.is_empty());
    }

    #[test]
    fn test_cancellation() {
        let points = points_from(&[(255, 0, 0), (0, 0, 255)], 50);
        let cancel = CancelToken::new();
        cancel.cancel();
        let result = kmeans(&points, 2, &TuningConfig::default(), &cancel);
        assert!(matches!(result, Err(ExtractionError::Cancelled)));
    }
}
