pub type PxsvgResult<T> = Result<T, PxsvgError>;

#[derive(thiserror::Error, Debug)]
pub enum PxsvgError {
    #[error("input error: {0}")]
    Input(String),

    #[error("output error: {0}")]
    Output(String),

    #[error("verify error: {0}")]
    Verify(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PxsvgError {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    pub fn verify(msg: impl Into<String>) -> Self {
        Self::Verify(msg.into())
    }
}
