use crate::point::nearest_centroid;
use crate::{Point, Primitive};
use rand::prelude::*;
use tracing::trace;

#[inline(always)]
pub fn calculate<T: Primitive>(points: &[Point<T>], k: usize, rnd: &mut dyn RngCore) -> Vec<Point<T>> {
    let mut centroids = Vec::with_capacity(k);
    // Randomly select first centroid
    centroids.push(points[rnd.gen_range(0..points.len())]);

    for _ in 1..k {
        // For each following centroid...
        let sampled_centroid_id = draw_next(points, &centroids, rnd);
        trace!(centroid = centroids.len(), sample = sampled_centroid_id, "k-means++ pick");
        centroids.push(points[sampled_centroid_id]);
    }
    centroids
}

/// Draw the index of the next centroid, weighting each sample by its squared distance to the
/// nearest centroid in `centroids`.
pub(crate) fn draw_next<T: Primitive>(points: &[Point<T>], centroids: &[Point<T>], rnd: &mut dyn RngCore) -> usize {
    let centroid_distances: Vec<T> = points.iter()
        .map(|p| nearest_centroid(p, centroids).map_or(T::zero(), |(_, d)| d))
        .collect();
    let distsum: T = centroid_distances.iter().cloned().sum();

    // Probability of each sample to become the new centroid. Samples sitting on a centroid get 0,
    // and so does everything when all samples sit on centroids.
    let centroid_probabilities: Vec<T> = if distsum > T::zero() {
        centroid_distances.iter().map(|&d| d / distsum).collect()
    } else {
        vec![T::zero(); points.len()]
    };
    let r = rnd.gen_range(T::zero()..T::one());
    select_cumulative(&centroid_probabilities, r)
}

/// Walk the cumulative distribution of `probabilities` and return the first index whose cumulative
/// probability exceeds `r`. When rounding leaves the total short of `r`, the last index is returned.
pub(crate) fn select_cumulative<T: Primitive>(probabilities: &[T], r: T) -> usize {
    let mut cumulative = T::zero();
    for (idx, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if r < cumulative {
            return idx;
        }
    }
    probabilities.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_walk() {
        let probabilities = [0.1f64, 0.0, 0.4, 0.5];
        assert_eq!(select_cumulative(&probabilities, 0.0), 0);
        assert_eq!(select_cumulative(&probabilities, 0.09), 0);
        // 0.1 is not < 0.1, the zero-probability sample is skipped as well
        assert_eq!(select_cumulative(&probabilities, 0.1), 2);
        assert_eq!(select_cumulative(&probabilities, 0.49), 2);
        assert_eq!(select_cumulative(&probabilities, 0.5), 3);
        assert_eq!(select_cumulative(&probabilities, 0.999), 3);
    }

    #[test] fn cumulative_shortfall_selects_last_f32() { cumulative_shortfall_selects_last::<f32>(); }
    #[test] fn cumulative_shortfall_selects_last_f64() { cumulative_shortfall_selects_last::<f64>(); }

    fn cumulative_shortfall_selects_last<T: Primitive>() {
        // Rounded probabilities that sum up to less than r
        let probabilities = [T::of(0.3), T::of(0.3), T::of(0.3999)];
        assert_eq!(select_cumulative(&probabilities, T::of(0.99995)), 2);
        // The last sample is picked even when it has zero weight itself
        let probabilities = [T::of(0.5), T::of(0.49), T::zero()];
        assert_eq!(select_cumulative(&probabilities, T::of(0.995)), 2);
        // Degenerate distribution, e.g. all samples on top of a centroid
        assert_eq!(select_cumulative(&[T::zero(); 4], T::zero()), 3);
    }

    #[test]
    fn all_samples_on_centroid_still_yields_a_pick() {
        let points = vec![Point::new(1.0f64, 1.0); 5];
        let mut rnd = StdRng::seed_from_u64(9);
        let centroids = calculate(&points, 3, &mut rnd);
        assert_eq!(centroids, vec![Point::new(1.0, 1.0); 3]);
        assert_eq!(draw_next(&points, &points[..1], &mut rnd), 4);
    }

    #[test]
    fn never_picks_a_sample_on_a_centroid() {
        let points = vec![Point::new(0.0f32, 0.0), Point::new(3.0, 4.0), Point::new(0.0, 0.0), Point::new(6.0, 8.0)];
        let mut rnd = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let idx = draw_next(&points, &[Point::new(0.0, 0.0)], &mut rnd);
            assert!(idx == 1 || idx == 3, "picked sample {} on top of the centroid", idx);
        }
    }

    #[test] fn selection_proportional_to_squared_distance_f32() { selection_proportional_to_squared_distance::<f32>(); }
    #[test] fn selection_proportional_to_squared_distance_f64() { selection_proportional_to_squared_distance::<f64>(); }

    fn selection_proportional_to_squared_distance<T: Primitive>() {
        // squared distances to (0,0): 0, 1, 4, 9, 16, 36 -> total 66
        let points: Vec<Point<T>> = [0.0, 1.0, 2.0, 3.0, 4.0, 6.0].iter().map(|&x| Point::new(T::of(x), T::zero())).collect();
        let centroids = [Point::new(T::zero(), T::zero())];
        let mut rnd = StdRng::seed_from_u64(1337);

        let trials = 60_000;
        let mut hits = vec![0usize; points.len()];
        for _ in 0..trials {
            hits[draw_next(&points, &centroids, &mut rnd)] += 1;
        }
        for (idx, p) in points.iter().enumerate() {
            let expected = p.squared_distance(&centroids[0]).to_f64().unwrap_or_default() / 66.0;
            let observed = hits[idx] as f64 / trials as f64;
            assert!((expected - observed).abs() < 0.01, "sample {}: expected {:.4}, observed {:.4}", idx, expected, observed);
        }
    }
}
