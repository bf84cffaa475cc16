//! Conversion from `FlattenError` into `figment::Error`.

use figment::Error as FigmentError;

use super::FlattenError;

impl From<FlattenError> for FigmentError {
    /// Gathering errors hand back the figment error they wrap; every other
    /// variant becomes a message.
    fn from(e: FlattenError) -> Self {
        match e {
            FlattenError::Gathering(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
