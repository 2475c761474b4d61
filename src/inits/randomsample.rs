use crate::{Point, Primitive};
use rand::prelude::*;

#[inline(always)] pub fn calculate<T: Primitive>(points: &[Point<T>], k: usize, rnd: &mut dyn RngCore) -> Vec<Point<T>> {
	points.choose_multiple(rnd, k).cloned().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn picks_distinct_samples() {
		let points: Vec<Point<f64>> = (0..50).map(|i| Point::new(i as f64, 0.0)).collect();
		let mut rnd = StdRng::seed_from_u64(7);
		for _ in 0..20 {
			let mut xs: Vec<i64> = calculate(&points, 50, &mut rnd).iter().map(|c| c.x as i64).collect();
			xs.sort_unstable();
			assert_eq!(xs, (0..50).collect::<Vec<_>>());
		}
	}

	#[test]
	fn every_sample_gets_picked_eventually() {
		let points: Vec<Point<f32>> = (0..10).map(|i| Point::new(i as f32, i as f32)).collect();
		let mut rnd = StdRng::seed_from_u64(1);
		let mut hits = [0usize; 10];
		for _ in 0..2000 {
			for c in calculate(&points, 3, &mut rnd) {
				hits[c.x as usize] += 1;
			}
		}
		// 600 expected per sample
		assert!(hits.iter().all(|&h| h > 450 && h < 750), "{:?}", hits);
	}
}
