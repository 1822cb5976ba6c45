use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected 4 Stokes components but got: {len}")]
    StokesLength { len: usize },
}
