use std::backtrace::Backtrace;

use crate::solver::attribute::Category;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// A house was forced to hold a value its domain no longer contains,
    /// which would leave the domain empty. Only a contradictory clue script
    /// can produce this.
    #[error("house {position} has no remaining candidates for {category:?}")]
    Contradiction { position: usize, category: Category },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
