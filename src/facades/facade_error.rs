#[derive(thiserror::Error, Debug)]
pub enum FacadeError {
    /// Unique-key business rejection; surfaced as-is from whichever store
    /// detected it, never resolved by falling back.
    #[error("record already exists for key `{0}`")]
    AlreadyExists(String),
    /// Rejected before any store call was attempted.
    #[error("invalid input :: {0}")]
    InvalidInput(String),
    #[error("credential error :: {0}")]
    Credential(#[from] bcrypt::BcryptError),
}

impl From<crate::mem::Error> for FacadeError {
    fn from(err: crate::mem::Error) -> Self {
        match err {
            crate::mem::Error::AlreadyExists(key) => FacadeError::AlreadyExists(key),
        }
    }
}
