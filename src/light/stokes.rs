use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{angle::radian, f64::Angle};

/// Describes the full polarization state of a beam.
///
/// Components are ordered (I, Q, U, V): total intensity, the two linear
/// polarization components, and the circular component. Physical light
/// satisfies `I >= sqrt(Q^2 + U^2 + V^2)`, but this type does not enforce
/// it. Callers may construct unphysical vectors on purpose.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StokesVec {
    inner: [f64; 4],
}

impl StokesVec {
    pub fn new(i: f64, q: f64, u: f64, v: f64) -> Self {
        StokesVec {
            inner: [i, q, u, v],
        }
    }

    /// An unpolarized beam of unit intensity.
    pub fn unpolarized() -> Self {
        StokesVec::new(1., 0., 0., 0.)
    }

    pub fn i(&self) -> f64 {
        self.inner[0]
    }

    pub fn q(&self) -> f64 {
        self.inner[1]
    }

    pub fn u(&self) -> f64 {
        self.inner[2]
    }

    pub fn v(&self) -> f64 {
        self.inner[3]
    }

    pub fn as_array(&self) -> [f64; 4] {
        self.inner
    }

    /// Compute the AoP of the beam.
    pub fn aop(&self) -> Angle {
        Angle::new::<radian>(self.inner[2].atan2(self.inner[1]) / 2.)
    }

    /// Compute the DoP of the beam.
    ///
    /// Evaluates `sqrt((Q^2 + U^2 + V^2) / I^2)` with no guard on the
    /// denominator. A vector with `I == 0` yields NaN or infinity, and an
    /// unphysical vector yields a degree above one.
    pub fn dop(&self) -> f64 {
        ((self.inner[1].powf(2.) + self.inner[2].powf(2.) + self.inner[3].powf(2.))
            / self.inner[0].powf(2.))
        .sqrt()
    }
}

impl From<[f64; 4]> for StokesVec {
    fn from(inner: [f64; 4]) -> Self {
        StokesVec { inner }
    }
}

impl TryFrom<&[f64]> for StokesVec {
    type Error = Error;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        let inner: [f64; 4] = components
            .try_into()
            .map_err(|_| Error::StokesLength {
                len: components.len(),
            })?;

        Ok(StokesVec { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(StokesVec::new(1., 1., 0., 0.), 1.0)]
    #[case(StokesVec::new(2., 0., 0., 0.), 0.0)]
    #[case(StokesVec::new(2., 0., 1., 0.), 0.5)]
    #[case(StokesVec::new(1., 1., 1., 1.), 3f64.sqrt())]
    fn dop_from_stokes(#[case] stokes: StokesVec, #[case] degree: f64) {
        assert_relative_eq!(stokes.dop(), degree);
    }

    #[test]
    fn dop_undefined_for_dark_beam() {
        assert!(StokesVec::new(0., 0., 0., 0.).dop().is_nan());
        assert!(StokesVec::new(0., 1., 0., 0.).dop().is_infinite());
    }

    #[rstest]
    #[case(StokesVec::new(1., 1., 0., 0.), 0.0)]
    #[case(StokesVec::new(1., 0., 1., 0.), 45.0)]
    #[case(StokesVec::new(1., -1., 0., 0.), 90.0)]
    fn aop_from_stokes(#[case] stokes: StokesVec, #[case] angle: f64) {
        use uom::si::angle::degree;
        assert_relative_eq!(stokes.aop().get::<degree>(), angle);
    }

    #[test]
    fn stokes_from_slice() {
        let stokes = StokesVec::try_from([1., 0.5, 0.5, 0.].as_slice()).unwrap();
        assert_eq!(stokes, StokesVec::new(1., 0.5, 0.5, 0.));

        assert!(StokesVec::try_from([1., 0.5].as_slice()).is_err());
    }
}
