use crate::primitive::*;

/// Enum with possible abort strategies.
/// These strategies specify when a running convergence loop counts as converged and stops early.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AbortStrategy<T: Primitive> {
	/// This strategy stops the loop as soon as no centroid moved by **threshold** or more during one iteration
	/// (`max_shift < threshold`).
	/// ## Fields:
	/// - **threshold**: Displacement below which a centroid counts as settled, in point-set units
	CentroidShift { threshold: T },
	/// This strategy stops the loop directly after an iteration produced no improvement of the distance sum
	/// where `improvement > threshold`, for the first time.
	/// ## Fields:
	/// - **threshold**: Threshold, used to detect an improvement (`improvement > threshold`)
	NoImprovement { threshold: T },
}
impl<T: Primitive> Default for AbortStrategy<T> {
	fn default() -> Self {
		AbortStrategy::CentroidShift { threshold: T::of(1e-2) }
	}
}
impl<T: Primitive> AbortStrategy<T> {
	pub(crate) fn create_logic(&self) -> Box<dyn AbortStrategyLogic<T>> {
		match *self {
			AbortStrategy::CentroidShift { threshold } => Box::new(CentroidShiftLogic { threshold }),
			AbortStrategy::NoImprovement { threshold } => Box::new(NoImprovementLogic {
				threshold,
				prev_error: T::infinity()
			})
		}
	}
}

pub(crate) trait AbortStrategyLogic<T: Primitive> {
	/// Function that has to be called once an iteration of the loop ended.
	/// ## Arguments
	/// - **max_shift**: The largest distance any centroid moved during the iteration
	/// - **error**: The distance sum of the assignment made during the iteration
	/// ## Returns
	/// - **true** if the calculation should continue
	/// - **false** if the calculation converged
	fn next(&mut self, max_shift: T, error: T) -> bool;
}


pub(crate) struct CentroidShiftLogic<T: Primitive> {
	threshold: T
}
impl<T: Primitive> AbortStrategyLogic<T> for CentroidShiftLogic<T> {
	fn next(&mut self, max_shift: T, _error: T) -> bool {
		!(max_shift < self.threshold)
	}
}


pub(crate) struct NoImprovementLogic<T: Primitive> {
	threshold: T,
	prev_error: T
}
impl<T: Primitive> AbortStrategyLogic<T> for NoImprovementLogic<T> {
	fn next(&mut self, _max_shift: T, error: T) -> bool {
		let improvement = self.prev_error - error;
		self.prev_error = error;
		improvement > self.threshold
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test] fn test_centroid_shift_f32() { test_centroid_shift::<f32>(); }
	#[test] fn test_centroid_shift_f64() { test_centroid_shift::<f64>(); }

	fn test_centroid_shift<T: Primitive>() {
		let any = T::of(3000.0);
		{
			let mut abort_strategy = AbortStrategy::<T>::default().create_logic();
			assert_eq!(abort_strategy.next(T::of(12.5), any), true);
			assert_eq!(abort_strategy.next(T::of(0.0099), any), false);
		}
		{ // Strictly below: exactly the threshold keeps going
			let mut abort_strategy = AbortStrategy::CentroidShift { threshold: T::of(0.5) }.create_logic();
			assert_eq!(abort_strategy.next(T::of(0.5), any), true);
			assert_eq!(abort_strategy.next(T::of(0.49), any), false);
		}
		{ // No state is carried between iterations
			let mut abort_strategy = AbortStrategy::<T>::default().create_logic();
			assert_eq!(abort_strategy.next(T::zero(), any), false);
			assert_eq!(abort_strategy.next(T::of(1.0), any), true);
		}
		{ // NaN never counts as settled
			let mut abort_strategy = AbortStrategy::<T>::default().create_logic();
			assert_eq!(abort_strategy.next(T::nan(), any), true);
		}
	}

	#[test] fn test_no_improvement_f32() { test_no_improvement::<f32>(); }
	#[test] fn test_no_improvement_f64() { test_no_improvement::<f64>(); }

	fn test_no_improvement<T: Primitive>() {
		let shift = T::of(100.0);
		{
			let mut abort_strategy = AbortStrategy::NoImprovement { threshold: T::of(0.0005) }.create_logic();
			assert_eq!(abort_strategy.next(shift, T::of(3000.0)), true);
			assert_eq!(abort_strategy.next(shift, T::of(3000.0)), false);
		}
		{
			let mut abort_strategy = AbortStrategy::NoImprovement { threshold: T::of(0.5) }.create_logic();
			assert_eq!(abort_strategy.next(shift, T::of(3000.0)), true);
			assert_eq!(abort_strategy.next(shift, T::of(2999.75)), false);
		}
		{
			let mut abort_strategy = AbortStrategy::NoImprovement { threshold: T::of(0.5) }.create_logic();
			assert_eq!(abort_strategy.next(shift, T::of(3000.0)), true);
			assert_eq!(abort_strategy.next(shift, T::of(2000.0)), true);
			assert_eq!(abort_strategy.next(shift, T::of(1999.0)), true);
			assert_eq!(abort_strategy.next(shift, T::of(1999.0)), false);
		}
		{ // Getting worse is not an improvement either
			let mut abort_strategy = AbortStrategy::NoImprovement { threshold: T::of(0.5) }.create_logic();
			assert_eq!(abort_strategy.next(shift, T::of(3000.0)), true);
			assert_eq!(abort_strategy.next(shift, T::of(3500.0)), false);
		}
	}
}
