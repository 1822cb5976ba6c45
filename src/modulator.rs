use crate::{light::stokes::StokesVec, mueller::MuellerMat};
use rayon::prelude::*;
use uom::si::{angle::radian, f64::Angle};

/// Represents a polarization modulator built from a rotating retarder.
///
/// The retardation is fixed by the optic; the fast-axis angle changes as
/// the retarder spins. Sampling the detected intensity across one rotation
/// encodes the incident Stokes vector in the harmonics of the signal.
pub struct Modulator {
    delta: Angle,
}

impl Modulator {
    /// Create a `Modulator` from its fixed retardation `delta`.
    pub fn new(delta: Angle) -> Self {
        Self { delta }
    }

    pub fn delta(&self) -> Angle {
        self.delta
    }

    /// The Mueller matrix of the modulator with its fast axis at `theta`.
    pub fn matrix_at(&self, theta: Angle) -> MuellerMat {
        MuellerMat::retarder(self.delta, theta)
    }

    /// Simulate the detected intensity for `stokes` with the fast axis at
    /// `theta`.
    ///
    /// The signal is the intensity behind the spinning retarder followed by
    /// a horizontal linear polarizer. Intensity is not normalized; an
    /// unphysical `stokes` passes straight through the arithmetic.
    pub fn signal(&self, stokes: &StokesVec, theta: Angle) -> f64 {
        let d = self.delta.get::<radian>();
        let t = theta.get::<radian>();
        let cd = d.cos();
        let sd = d.sin();

        0.5 * (stokes.i()
            + 0.5 * stokes.q() * ((1. + cd) + (1. - cd) * (4. * t).cos())
            + 0.5 * stokes.u() * (1. - cd) * (4. * t).sin()
            + stokes.v() * sd * (2. * t).sin())
    }

    /// Simulates the detected intensity at each fast-axis angle in parallel.
    ///
    /// Returns one sample per angle in `thetas`, in input order.
    pub fn par_signal_sweep(&self, stokes: &StokesVec, thetas: &[Angle]) -> Vec<f64> {
        thetas
            .par_iter()
            .map(|&theta| self.signal(stokes, theta))
            .collect()
    }
}
