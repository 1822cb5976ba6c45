use thiserror::Error;

pub mod dop;
pub mod stokes;

#[derive(Debug, Error)]
pub enum LightError {
    #[error("expected degree in range [0, 1] but got: {degree}")]
    DegreeOutOfBounds { degree: f64 },
}
