use crate::{DVector, Float};
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
};

/// An enum that describes a bound/limit on one dimension of the search space.
///
/// Bounds act as hard walls during position updates: a coordinate which steps past a limit is
/// clamped exactly onto it. The particle's velocity is left untouched, so a particle may press
/// against the same wall over several iterations until its velocity turns around.
#[derive(Default, Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Bound {
    #[default]
    /// `(-inf, +inf)`
    NoBound,
    /// `(min, +inf)`
    LowerBound(Float),
    /// `(-inf, max)`
    UpperBound(Float),
    /// `(min, max)`
    LowerAndUpperBound(Float, Float),
}
impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lower(), self.upper())
    }
}
impl From<(Float, Float)> for Bound {
    fn from(value: (Float, Float)) -> Self {
        assert!(value.0 <= value.1);
        match (value.0.is_finite(), value.1.is_finite()) {
            (true, true) => Self::LowerAndUpperBound(value.0, value.1),
            (true, false) => Self::LowerBound(value.0),
            (false, true) => Self::UpperBound(value.1),
            (false, false) => Self::NoBound,
        }
    }
}
impl From<&Self> for Bound {
    fn from(value: &Self) -> Self {
        *value
    }
}

impl Bound {
    /// Checks whether the given `value` is compatible with the bound.
    pub fn contains(&self, value: Float) -> bool {
        match self {
            Self::NoBound => true,
            Self::LowerBound(lb) => value >= *lb,
            Self::UpperBound(ub) => value <= *ub,
            Self::LowerAndUpperBound(lb, ub) => value >= *lb && value <= *ub,
        }
    }
    /// Returns the lower bound or `-inf` if there is none.
    pub const fn lower(&self) -> Float {
        match self {
            Self::NoBound | Self::UpperBound(_) => Float::NEG_INFINITY,
            Self::LowerBound(lb) | Self::LowerAndUpperBound(lb, _) => *lb,
        }
    }
    /// Returns the upper bound or `+inf` if there is none.
    pub const fn upper(&self) -> Float {
        match self {
            Self::NoBound | Self::LowerBound(_) => Float::INFINITY,
            Self::UpperBound(ub) | Self::LowerAndUpperBound(_, ub) => *ub,
        }
    }
    /// Clamps the given `value` into the bound.
    ///
    /// A degenerate bound with equal limits collapses every input to that single value.
    pub fn clamp(&self, value: Float) -> Float {
        value.clamp(self.lower(), self.upper())
    }
    /// Checks if the given value is equal to one of the bounds.
    ///
    /// TODO: this just does equality comparison right now, which probably needs to be improved
    /// to something with an epsilon (significant for reporting but not for clamping).
    pub fn at_bound(&self, value: Float) -> bool {
        match self {
            Self::NoBound => false,
            Self::LowerBound(lb) => value == *lb,
            Self::UpperBound(ub) => value == *ub,
            Self::LowerAndUpperBound(lb, ub) => value == *lb || value == *ub,
        }
    }
}

/// A struct that contains a list of [`Bound`]s, one per dimension of the search space.
#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bounds(Vec<Bound>);

impl Bounds {
    /// Returns the inner Vector of bounds.
    pub fn into_inner(self) -> Vec<Bound> {
        self.0
    }
    /// Clamps every coordinate of `x` into its corresponding [`Bound`].
    pub fn clamp_vec(&self, x: &DVector<Float>) -> DVector<Float> {
        DVector::from_iterator(
            x.len(),
            x.iter().zip(self.0.iter()).map(|(xi, b)| b.clamp(*xi)),
        )
    }
    /// Checks whether every coordinate of `x` is compatible with its corresponding [`Bound`].
    pub fn contains_vec(&self, x: &DVector<Float>) -> bool {
        x.iter().zip(self.0.iter()).all(|(xi, b)| b.contains(*xi))
    }
}

impl From<Vec<Bound>> for Bounds {
    fn from(value: Vec<Bound>) -> Self {
        Self(value)
    }
}

impl From<Vec<(Float, Float)>> for Bounds {
    fn from(value: Vec<(Float, Float)>) -> Self {
        Self(value.into_iter().map(Bound::from).collect())
    }
}

impl Deref for Bounds {
    type Target = Vec<Bound>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Bounds {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
