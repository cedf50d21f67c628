use thiserror::Error;

/// Why an oracle call did not produce a usable answer
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to run oracle '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("oracle exited with status {0}")]
    Exit(i32),

    #[error("oracle was terminated by a signal")]
    Terminated,

    #[error("oracle reported a reciprocal conversion")]
    Reciprocal,

    #[error("unexpected oracle output: {0:?}")]
    Malformed(String),
}

impl OracleError {
    /// Whether a fresh sample may succeed where this one failed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, OracleError::Spawn { .. })
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no units available to sample from")]
    EmptyUniverse,

    #[error("no usable conversion found after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}
