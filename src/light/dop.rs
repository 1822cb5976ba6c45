use super::LightError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes the intensity ratio of polarized light in a beam.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dop {
    degree: f64,
}

impl Dop {
    /// Create a new `Dop` from `degree`.
    ///
    /// Returns `LightError::DegreeOutOfBounds` if `degree` is not between
    /// 0.0 and 1.0, which includes NaN degrees.
    pub fn new(degree: f64) -> Result<Self, LightError> {
        if !(0.0..=1.0).contains(&degree) {
            return Err(LightError::DegreeOutOfBounds { degree });
        }

        Ok(Self { degree })
    }

    /// Create a new `Dop` of zero.
    pub fn zero() -> Self {
        Self { degree: 0. }
    }

    /// Returns a new `Dop` clamped between 0.0 and `max`.
    pub fn clamp(self, max: f64) -> Self {
        Self {
            degree: self.degree.clamp(0.0, max),
        }
    }

    pub fn into_inner(self) -> f64 {
        self.degree
    }
}

impl Default for Dop {
    fn default() -> Self {
        Self::zero()
    }
}
