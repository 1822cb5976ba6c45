use crate::light::stokes::StokesVec;
use nalgebra::{Matrix4, Vector4};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{angle::radian, f64::Angle};

/// Describes an optical element acting on a Stokes vector.
///
/// A Mueller matrix transforms one Stokes vector into another through
/// matrix-vector multiplication. Elements compose by matrix multiplication
/// with the last element applied first.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MuellerMat {
    inner: Matrix4<f64>,
}

impl MuellerMat {
    /// The identity element which leaves any beam unchanged.
    pub fn identity() -> Self {
        Self {
            inner: Matrix4::identity(),
        }
    }

    /// An ideal mirror at normal incidence.
    ///
    /// Reflection preserves I and Q and flips the sign of U and V.
    pub fn ideal_mirror() -> Self {
        Self {
            inner: Matrix4::from_diagonal(&Vector4::new(1., 1., -1., -1.)),
        }
    }

    /// An ideal linear polarizer with its transmission axis at `theta`.
    ///
    /// The fourth row and column are identically zero: an ideal polarizer
    /// passes no circular component and fully depolarizes the incident one.
    pub fn linear_polarizer(theta: Angle) -> Self {
        let t = theta.get::<radian>();
        let c = (2. * t).cos();
        let s = (2. * t).sin();

        Self {
            inner: 0.5
                * Matrix4::new(
                    1., c, s, 0., //
                    c, c * c, c * s, 0., //
                    s, c * s, s * s, 0., //
                    0., 0., 0., 0.,
                ),
        }
    }

    /// A rotation of the Q-U plane by `alpha`.
    ///
    /// I and V are invariant under rotation.
    pub fn rotator(alpha: Angle) -> Self {
        let a = alpha.get::<radian>();
        let c = (2. * a).cos();
        let s = (2. * a).sin();

        Self {
            inner: Matrix4::new(
                1., 0., 0., 0., //
                0., c, s, 0., //
                0., -s, c, 0., //
                0., 0., 0., 1.,
            ),
        }
    }

    /// An ideal retarder with retardation `delta` and its fast axis at
    /// `theta`.
    ///
    /// A retardation of a half turn gives a half-wave plate; zero
    /// retardation gives the identity element.
    pub fn retarder(delta: Angle, theta: Angle) -> Self {
        let d = delta.get::<radian>();
        let t = theta.get::<radian>();
        let c = (2. * t).cos();
        let s = (2. * t).sin();
        let cd = d.cos();
        let sd = d.sin();

        Self {
            inner: Matrix4::new(
                1., 0., 0., 0., //
                0., c * c + s * s * cd, c * s * (1. - cd), s * sd, //
                0., c * s * (1. - cd), s * s + c * c * cd, -c * sd, //
                0., -s * sd, c * sd, cd,
            ),
        }
    }

    pub fn as_matrix(&self) -> &Matrix4<f64> {
        &self.inner
    }

    pub fn into_inner(self) -> Matrix4<f64> {
        self.inner
    }
}

impl From<Matrix4<f64>> for MuellerMat {
    fn from(inner: Matrix4<f64>) -> Self {
        Self { inner }
    }
}

impl std::ops::Mul for MuellerMat {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self {
            inner: self.inner * other.inner,
        }
    }
}

impl std::ops::Mul<StokesVec> for MuellerMat {
    type Output = StokesVec;

    fn mul(self, stokes: StokesVec) -> Self::Output {
        let out = self.inner * Vector4::from(stokes.as_array());
        StokesVec::new(out[0], out[1], out[2], out[3])
    }
}

/// Build one polarizer matrix per transmission-axis angle.
///
/// The returned stack is ordered to match `thetas`.
pub fn linear_polarizer_sweep(thetas: &[Angle]) -> Vec<MuellerMat> {
    thetas
        .iter()
        .map(|&theta| MuellerMat::linear_polarizer(theta))
        .collect()
}

/// Build one rotator matrix per rotation angle.
///
/// The returned stack is ordered to match `alphas`.
pub fn rotator_sweep(alphas: &[Angle]) -> Vec<MuellerMat> {
    alphas
        .iter()
        .map(|&alpha| MuellerMat::rotator(alpha))
        .collect()
}

/// Build one retarder matrix per fast-axis angle.
///
/// The single retardation `delta` is shared by every matrix in the stack;
/// only the fast-axis angle sweeps. The returned stack is ordered to match
/// `thetas`.
pub fn retarder_sweep(delta: Angle, thetas: &[Angle]) -> Vec<MuellerMat> {
    thetas
        .iter()
        .map(|&theta| MuellerMat::retarder(delta, theta))
        .collect()
}
