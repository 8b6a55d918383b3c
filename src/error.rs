//! Error types for integration and command-line handling

use thiserror::Error;

/// Errors raised while computing an integral
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("{segments} segments cannot be split evenly across {threads} threads")]
    UnevenPartition { segments: usize, threads: usize },

    #[error("worker {worker_id} panicked: {message}")]
    WorkerPanicked { worker_id: usize, message: String },

    #[error("failed to spawn worker {worker_id}: {source}")]
    Spawn {
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that terminate the command-line program
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid invocation: {0}")]
    Invocation(String),

    #[error("invalid argument value: {0}")]
    Parse(String),

    #[error(transparent)]
    Integration(#[from] IntegrationError),
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Invocation(_) | CliError::Parse(_) => 2,
            CliError::Integration(_) => 1,
        }
    }
}
