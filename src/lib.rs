//! Mueller Calculus Utilities
//!
//! Builds Mueller matrices for ideal polarization optics and simulates the
//! intensity signal behind a rotating-retarder polarization modulator.

#[allow(missing_docs)]
pub mod error;

pub mod light;
pub mod modulator;
pub mod mueller;

#[cfg(feature = "plot")]
pub mod plot;

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::light::{LightError, dop::Dop, stokes::StokesVec};
    pub use crate::modulator::Modulator;
    pub use crate::mueller::{
        MuellerMat, linear_polarizer_sweep, retarder_sweep, rotator_sweep,
    };

    #[cfg(feature = "plot")]
    pub use crate::plot::{PlotError, SignalPlot};
}
