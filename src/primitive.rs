use num::{Float, NumCast, Zero};
use rand::distributions::uniform::SampleUniform;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

pub trait Primitive: Add + AddAssign + Sum + Sub + SubAssign + Zero + Float + NumCast + SampleUniform
                + PartialOrd + Copy + Default + Display + Debug + Sync + Send + LowerExp + 'static
                + Serialize + DeserializeOwned {
    /// Lossless for f64, rounding for f32. Used for literals and counts.
    fn of(v: f64) -> Self;
}
impl Primitive for f32 {
    #[inline(always)] fn of(v: f64) -> Self { v as f32 }
}
impl Primitive for f64 {
    #[inline(always)] fn of(v: f64) -> Self { v }
}
