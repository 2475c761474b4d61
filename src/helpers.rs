/// `assert_approx_eq!(left, right, tol)` passes when `|left - right| < tol`.
/// Works for any float type; NaN on either side always fails.
#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		let (left_val, right_val, tol_val) = ($left, $right, $tol);
		let delta = (left_val - right_val).abs();
		if !(delta < tol_val) {
			panic!(
				"assertion failed: `(left ≈ right)` (left: `{}`, right: `{}`) with ∆={:1.1e} (allowed ∆={:e})",
				left_val, right_val, delta, tol_val
			)
		}
	});
}
