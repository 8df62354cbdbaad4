use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum EphemerisError {
    #[error("Call PlanetPosition::calc() first.")]
    Uninitialized,

    #[error("Invalid {kind} index: {index}")]
    InvalidIndex { kind: &'static str, index: usize },

    #[error("Invalid observer location: {0}")]
    InvalidObserver(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),
}

impl PartialEq for EphemerisError {
    fn eq(&self, other: &Self) -> bool {
        use EphemerisError::*;
        match (self, other) {
            (
                InvalidIndex {
                    kind: ka,
                    index: ia,
                },
                InvalidIndex {
                    kind: kb,
                    index: ib,
                },
            ) => ka == kb && ia == ib,
            (InvalidObserver(a), InvalidObserver(b)) => a == b,
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,

            // Unit variants
            (Uninitialized, Uninitialized) => true,

            _ => false,
        }
    }
}

impl From<hifitime::HifitimeError> for EphemerisError {
    fn from(err: hifitime::HifitimeError) -> Self {
        EphemerisError::InvalidDate(err.to_string())
    }
}
