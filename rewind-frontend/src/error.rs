use thiserror::Error;

use crate::event::Batch;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sending message batch failed")]
    ActionSendFailed(#[from] tokio::sync::mpsc::error::SendError<Batch>),
    #[error("Error aggregation")]
    Aggregate(Vec<AppError>),
    #[error("Output operation failed")]
    OutputFailed(#[from] std::io::Error),
    #[error("Task execution failed")]
    TaskFailed(#[from] tokio::task::JoinError),
}
