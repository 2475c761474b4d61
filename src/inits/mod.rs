use crate::{Error, Point, Primitive};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub(crate) mod farthestfirst;
pub(crate) mod kmeanplusplus;
pub(crate) mod manual;
pub(crate) mod randomsample;

/// The centroid initialization methods an engine can run.
///
/// Parsed from (and printed as) the names the rendering client sends: `"random"`, `"farthest"`
/// and `"kmeans++"`. Any other name fails with [`Error::UnknownStrategy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitMethod {
    /// Random-Sample initialization (a.k.a. Forgy)
    ///
    /// ## Description
    /// Selects k distinct samples uniformly at random, without replacement.
    #[serde(rename = "random")]
    RandomSample,
    /// Farthest-First initialization
    ///
    /// ## Description
    /// Starts with one random sample, then greedily adds the sample whose distance to its nearest
    /// already chosen centroid is largest. Ties go to the sample that comes first in the point set.
    #[serde(rename = "farthest")]
    FarthestFirst,
    /// K-Mean++ initialization
    ///
    /// ## Description
    /// Starts with one random sample. Each following centroid is drawn at random, where every sample's
    /// probability of being drawn is proportional to its squared distance to the nearest centroid
    /// chosen so far. This leads to a tendency of selecting centroids far away from the existing ones.
    #[serde(rename = "kmeans++")]
    KMeanPlusPlus,
}

impl InitMethod {
    pub const ALL: [InitMethod; 3] = [InitMethod::RandomSample, InitMethod::FarthestFirst, InitMethod::KMeanPlusPlus];

    pub fn name(&self) -> &'static str {
        match self {
            InitMethod::RandomSample => "random",
            InitMethod::FarthestFirst => "farthest",
            InitMethod::KMeanPlusPlus => "kmeans++",
        }
    }

    /// Run the initialization. Callers guarantee `1 <= k <= points.len()`.
    pub(crate) fn calculate<T: Primitive>(&self, points: &[Point<T>], k: usize, rnd: &mut dyn RngCore) -> Vec<Point<T>> {
        debug_assert!(k >= 1 && k <= points.len());
        match self {
            InitMethod::RandomSample => randomsample::calculate(points, k, rnd),
            InitMethod::FarthestFirst => farthestfirst::calculate(points, k, rnd),
            InitMethod::KMeanPlusPlus => kmeanplusplus::calculate(points, k, rnd),
        }
    }
}

impl FromStr for InitMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InitMethod::ALL.iter().copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

impl fmt::Display for InitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
