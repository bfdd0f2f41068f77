use std::{fmt::Display, sync::Arc};

use rewind_keymap::{conversion, message::KeySequence, MessageResolver};
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::{
    error::AppError,
    event::{self, Batch, Envelope, Message, MessageSource},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Task {
    EmitMessages(Vec<Message>),
    ExecuteKeySequence(String),
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Task::EmitMessages(_) => write!(f, "EmitMessages"),
            Task::ExecuteKeySequence(sequence) => write!(f, "ExecuteKeySequence({:?})", sequence),
        }
    }
}

/// Runs tasks one after another, in the order they were queued.
pub struct TaskManager {
    handle: Option<JoinHandle<()>>,
    sender: Option<mpsc::UnboundedSender<Task>>,
}

impl TaskManager {
    pub fn new(
        sender: mpsc::Sender<Batch>,
        resolver: Arc<Mutex<MessageResolver>>,
        cancellation: CancellationToken,
    ) -> Self {
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<Task>();
        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancellation.cancelled() => break,
                    task = task_receiver.recv() => {
                        let task = match task {
                            Some(it) => it,
                            None => break,
                        };

                        tracing::debug!("handling task: {}", task);

                        if let Err(error) = run_task(&sender, &resolver, task).await {
                            tracing::error!("handling task failed: {:?}", error);
                        }
                    }
                }
            }
        });

        Self {
            handle: Some(handle),
            sender: Some(task_sender),
        }
    }

    pub fn run(&mut self, task: Task) {
        let sender = match &self.sender {
            Some(it) => it,
            None => {
                tracing::warn!("task manager already finished, dropping task: {}", task);
                return;
            }
        };

        if let Err(error) = sender.send(task) {
            tracing::error!("queueing task failed: {:?}", error);
        }
    }

    pub async fn finishing(&mut self) -> Result<(), AppError> {
        self.sender = None;

        if let Some(handle) = self.handle.take() {
            handle.await?;
        }

        Ok(())
    }
}

async fn run_task(
    sender: &mpsc::Sender<Batch>,
    resolver: &Arc<Mutex<MessageResolver>>,
    task: Task,
) -> Result<(), AppError> {
    let batch = match task {
        Task::EmitMessages(messages) => vec![Envelope {
            messages,
            sequence: KeySequence::None,
            source: MessageSource::Task,
        }],
        Task::ExecuteKeySequence(sequence) => {
            let keys = conversion::from_keycode_string(&sequence);
            let mut resolver = resolver.lock().await;

            event::resolve_keys(&mut resolver, keys, MessageSource::Task)
        }
    };

    // NOTE: resolver lock is released before sending, the queue holds one batch only
    sender.send(batch).await?;

    Ok(())
}
