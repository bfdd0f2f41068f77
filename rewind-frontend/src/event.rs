use std::{
    collections::VecDeque,
    io::{self, BufRead},
    sync::Arc,
    thread,
};

use rewind_keymap::{
    conversion,
    key::{Key, KeyCode},
    message::{KeySequence, KeymapMessage},
    MessageResolver,
};
use tokio::sync::{
    mpsc::{self, Receiver},
    Mutex,
};
use tokio_util::sync::CancellationToken;

use crate::{
    error::AppError,
    task::{Task, TaskManager},
};

/// Everything resolved from one line or task. The loop renders once per batch.
pub type Batch = Vec<Envelope>;

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub sequence: KeySequence,
    pub source: MessageSource,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MessageSource {
    Task,
    User,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Keymap(KeymapMessage),
    Error(String),
}

pub struct Emitter {
    cancellation: CancellationToken,
    pub receiver: Receiver<Batch>,
    tasks: TaskManager,
}

impl Emitter {
    pub fn start(listen_on_stdin: bool) -> Self {
        let (sender, receiver) = mpsc::channel(1);
        let resolver = Arc::new(Mutex::new(MessageResolver::default()));
        let cancellation = CancellationToken::new();

        let tasks = TaskManager::new(sender.clone(), resolver.clone(), cancellation.clone());
        if listen_on_stdin {
            start_stdin_listener(cancellation.child_token(), resolver, sender);
        }

        Self {
            cancellation,
            receiver,
            tasks,
        }
    }

    pub fn run(&mut self, task: Task) {
        self.tasks.run(task);
    }

    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.cancellation.cancel();
        self.receiver.close();

        self.tasks.finishing().await
    }
}

// stdin is read on a plain thread. a blocking read inside the runtime would keep
// the runtime from shutting down until the next line arrives.
fn start_stdin_listener(
    cancellation: CancellationToken,
    resolver: Arc<Mutex<MessageResolver>>,
    sender: mpsc::Sender<Batch>,
) {
    thread::spawn(move || {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            let (batch, closed) = match lines.next() {
                Some(Ok(line)) => {
                    let mut resolver = resolver.blocking_lock();
                    (resolve_line(&mut resolver, &line), false)
                }
                Some(Err(error)) => {
                    tracing::error!("reading stdin failed: {:?}", error);
                    (
                        vec![to_envelope(vec![
                            Message::Error(format!("Reading input failed: {}", error)),
                            Message::Keymap(KeymapMessage::Quit),
                        ])],
                        true,
                    )
                }
                None => {
                    tracing::debug!("stdin closed");
                    (
                        vec![to_envelope(vec![Message::Keymap(KeymapMessage::Quit)])],
                        true,
                    )
                }
            };

            if cancellation.is_cancelled() {
                break;
            }

            if let Err(error) = sender.blocking_send(batch) {
                tracing::debug!("stopping stdin listener: {:?}", error);
                break;
            }

            if closed {
                break;
            }
        }
    });
}

/// An empty line is a plain enter key. Everything else is read as keycode string.
pub fn resolve_line(resolver: &mut MessageResolver, line: &str) -> Batch {
    let keys = if line.trim().is_empty() {
        VecDeque::from([Key::new(KeyCode::Enter, vec![])])
    } else {
        conversion::from_keycode_string(line.trim())
    };

    resolve_keys(resolver, keys, MessageSource::User)
}

pub fn resolve_keys(
    resolver: &mut MessageResolver,
    keys: VecDeque<Key>,
    source: MessageSource,
) -> Batch {
    resolver
        .add_keys(keys)
        .into_iter()
        .map(|(messages, sequence)| Envelope {
            messages: messages.into_iter().map(Message::Keymap).collect(),
            sequence,
            source: source.clone(),
        })
        .collect()
}

pub fn to_envelope(messages: Vec<Message>) -> Envelope {
    Envelope {
        messages,
        sequence: KeySequence::None,
        source: MessageSource::User,
    }
}
