use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, watch};
use tokio::time::{Duration, sleep};

use wordspark_core::config::{GenerationConfig, clamp_max_turns};
use wordspark_core::error::{ClientError, GenerationErrorKind};
use wordspark_core::parse::parse_words;
use wordspark_core::prompt::{SYSTEM_INSTRUCTIONS, build_prompt};
use wordspark_core::types::GenerationRequest;
use wordspark_core::words::WordList;

use crate::state::GenerationState;
use crate::traits::{Availability, GenerationOptions, ModelSession, TextModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("model is unavailable")]
    ModelUnavailable,
    #[error("topic is blank")]
    BlankTopic,
}

struct Inner {
    words: WordList,
    current_topic: String,
    is_generating: bool,
    last_error: Option<GenerationErrorKind>,
    model_available: bool,
    config: GenerationConfig,

    // Conversational context for the current topic. Dropped on topic change
    // and after context exhaustion; the run lazily creates a fresh one.
    session: Option<Box<dyn ModelSession>>,

    // Bumped on every generate/clear. Run tasks compare it after each
    // suspension point and exit silently on mismatch, so a superseded run can
    // never merge stale results.
    run_token: u64,
    run_task: Option<tokio::task::JoinHandle<()>>,
}

/// Drives up to `max_turns` sequential calls against the text model for one
/// topic, merging parsed words into the accumulator and publishing a snapshot
/// after every accepted word.
///
/// All mutable state lives behind one `Mutex`, and the lock is never held
/// across a model call or a pacing delay, so snapshots stay consistent and a
/// run grows the word list monotonically.
#[derive(Clone)]
pub struct GenerationController {
    model: Arc<dyn TextModel>,
    inner: Arc<Mutex<Inner>>,
    state_tx: Arc<watch::Sender<GenerationState>>,
}

impl GenerationController {
    pub fn new(model: Arc<dyn TextModel>, config: GenerationConfig) -> Self {
        let (state_tx, _) = watch::channel(GenerationState::default());
        Self {
            model,
            inner: Arc::new(Mutex::new(Inner {
                words: WordList::new(),
                current_topic: String::new(),
                is_generating: false,
                last_error: None,
                model_available: false,
                config,
                session: None,
                run_token: 0,
                run_task: None,
            })),
            state_tx: Arc::new(state_tx),
        }
    }

    /// Subscribes to published snapshots. The receiver always holds the most
    /// recent state; intermediate updates may coalesce.
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> GenerationState {
        self.state_tx.borrow().clone()
    }

    /// Probes the model and records the result in the published state.
    /// While unavailable, `generate` refuses to start.
    pub async fn refresh_availability(&self) -> Availability {
        let availability = self.model.availability().await;
        let mut inner = self.inner.lock().await;
        inner.model_available = availability.is_available();
        self.publish(&inner);
        availability
    }

    /// Clamped to the valid range. Affects the next run, not an active one:
    /// each run snapshots its turn budget at start.
    pub async fn set_max_turns(&self, value: u32) {
        let mut inner = self.inner.lock().await;
        inner.config.max_turns = clamp_max_turns(value);
    }

    pub async fn dismiss_error(&self) {
        let mut inner = self.inner.lock().await;
        if inner.last_error.take().is_some() {
            self.publish(&inner);
        }
    }

    /// Clears the word list and abandons any in-flight run.
    pub async fn clear_words(&self) {
        let mut inner = self.inner.lock().await;
        inner.run_token = inner.run_token.wrapping_add(1);
        inner.run_task = None;
        inner.words.reset();
        inner.current_topic.clear();
        inner.session = None;
        inner.is_generating = false;
        inner.last_error = None;
        self.publish(&inner);
    }

    /// Starts a generation run for `topic`.
    ///
    /// A new topic resets the word list and discards the session so one
    /// topic's history can't leak into another's prompts. Re-generating the
    /// same topic keeps both and simply runs a fresh turn budget. Any run
    /// already in flight is cooperatively abandoned.
    pub async fn generate(&self, topic: &str) -> Result<(), GenerateError> {
        let topic = topic.trim().to_string();
        if topic.is_empty() {
            return Err(GenerateError::BlankTopic);
        }

        let (token, prev_task, config) = {
            let mut inner = self.inner.lock().await;
            if !inner.model_available {
                return Err(GenerateError::ModelUnavailable);
            }

            inner.run_token = inner.run_token.wrapping_add(1);
            let prev_task = inner.run_task.take();

            if topic != inner.current_topic {
                inner.words.reset();
                inner.current_topic = topic.clone();
                inner.session = None;
            }
            inner.last_error = None;
            inner.is_generating = true;
            self.publish(&inner);

            (inner.run_token, prev_task, inner.config.clone())
        };

        log::info!("starting run for topic {topic:?} ({} turns)", config.max_turns);

        let controller = self.clone();
        let task = tokio::spawn(async move {
            // Let the superseded run observe the token bump and drain first;
            // our state reset already happened, so it can't merge anything.
            if let Some(prev) = prev_task {
                let _ = prev.await;
            }
            controller.run(topic, token, config).await;
        });

        self.inner.lock().await.run_task = Some(task);
        Ok(())
    }

    async fn run(&self, topic: String, token: u64, config: GenerationConfig) {
        let options = GenerationOptions {
            temperature: config.temperature,
            max_tokens: None,
        };

        for turn_index in 0..config.max_turns {
            if turn_index > 0 && config.inter_turn_delay_ms > 0 {
                sleep(Duration::from_millis(config.inter_turn_delay_ms)).await;
            }

            // Turn-boundary staleness check; superseded runs stop without error.
            let existing = {
                let mut inner = self.inner.lock().await;
                if inner.run_token != token {
                    return;
                }
                inner.session.take()
            };

            let mut session = match existing {
                Some(session) => session,
                None => match self.model.create_session(SYSTEM_INSTRUCTIONS).await {
                    Ok(session) => session,
                    Err(err) => {
                        self.fail_run(token, &err).await;
                        return;
                    }
                },
            };

            let request = GenerationRequest::new(topic.clone(), turn_index, config.max_turns);
            let prompt = build_prompt(&request);

            match session.respond(&prompt, &options).await {
                Ok(raw) => {
                    {
                        let mut inner = self.inner.lock().await;
                        if inner.run_token != token {
                            return;
                        }
                        inner.session = Some(session);
                    }

                    let candidates = parse_words(&raw);
                    log::debug!(
                        "turn {turn_index}: {} candidates for {topic:?}",
                        candidates.len()
                    );

                    for candidate in candidates {
                        let accepted = {
                            let mut inner = self.inner.lock().await;
                            if inner.run_token != token {
                                return;
                            }
                            let accepted = inner.words.try_add(&candidate);
                            if accepted {
                                self.publish(&inner);
                            }
                            accepted
                        };

                        // Pace accepted words so observers can animate them in.
                        if accepted && config.word_reveal_delay_ms > 0 {
                            sleep(Duration::from_millis(config.word_reveal_delay_ms)).await;
                        }
                    }
                }
                Err(ClientError::ContextExhausted) => {
                    // Recovered locally: the session stays dropped and the
                    // next turn starts a fresh one. Invisible to observers.
                    log::info!("context exhausted at turn {turn_index}, recreating session");
                }
                Err(err) => {
                    self.fail_run(token, &err).await;
                    return;
                }
            }
        }

        let mut inner = self.inner.lock().await;
        if inner.run_token == token {
            inner.is_generating = false;
            self.publish(&inner);
        }
    }

    async fn fail_run(&self, token: u64, err: &ClientError) {
        log::error!("generation run aborted: {err}");
        let mut inner = self.inner.lock().await;
        if inner.run_token != token {
            return;
        }
        inner.last_error = Some(GenerationErrorKind::from(err));
        inner.is_generating = false;
        self.publish(&inner);
    }

    fn publish(&self, inner: &Inner) {
        self.state_tx.send_replace(GenerationState {
            words: inner.words.words().to_vec(),
            is_generating: inner.is_generating,
            current_topic: inner.current_topic.clone(),
            last_error: inner.last_error,
            model_available: inner.model_available,
        });
    }
}
