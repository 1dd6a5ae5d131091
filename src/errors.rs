#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GeneratorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    GeneratorError(#[from] GeneratorError),

    #[error("failed to write sequence")]
    WriteError(#[from] std::io::Error),
}
