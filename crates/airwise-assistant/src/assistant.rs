//! Conversational assistant with simulated response latency

use crate::conversation::{ChatMessage, ConversationState};
use crate::intent::classify_intent;
use crate::reply::compose_reply;
use airwise_core::{AssistantConfig, Error, Result};
use airwise_feed::Session;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::watch;

/// First message of every conversation
pub const GREETING: &str = "¡Hola! Soy tu asistente de calidad del aire. Pregúntame si puedes \
                            salir a correr, si conviene abrir las ventanas o cómo estará el aire mañana.";

/// Log and composing flag, mutated only under `state`
struct Shared {
    state: Mutex<ConversationState>,
    composing: watch::Sender<bool>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ConversationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Rule-based assistant answering from the session's current readings.
///
/// Each turn goes idle -> composing on [`Assistant::submit`] and back to idle
/// once the deferred reply is appended. Submitting while composing is
/// rejected with [`Error::ConcurrentSubmission`].
pub struct Assistant {
    session: Arc<Session>,
    config: AssistantConfig,
    shared: Arc<Shared>,
}

impl Assistant {
    pub fn new(session: Arc<Session>, config: AssistantConfig) -> Self {
        let (composing, _) = watch::channel(false);
        Self {
            session,
            config,
            shared: Arc::new(Shared {
                state: Mutex::new(ConversationState::with_greeting(GREETING)),
                composing,
            }),
        }
    }

    /// Messages in insertion order
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.shared.lock().messages().to_vec()
    }

    pub fn is_composing(&self) -> bool {
        self.shared.lock().is_composing()
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Append `text` as a user message and schedule the reply.
    ///
    /// Returns immediately; the reply is appended after the configured delay.
    /// Outside a Tokio runtime this fails with [`Error::NoRuntime`] and the
    /// log is left untouched.
    pub fn submit(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;

        {
            let mut state = self.shared.lock();
            if state.is_composing() {
                tracing::warn!("submission rejected while composing");
                return Err(Error::ConcurrentSubmission);
            }
            state.begin_turn(text);
            self.shared.composing.send_replace(true);
        }
        tracing::debug!(chars = text.chars().count(), "user message appended");

        let shared = Arc::clone(&self.shared);
        let session = Arc::clone(&self.session);
        let config = self.config.clone();
        let text = text.to_string();

        runtime.spawn(async move {
            tokio::time::sleep(config.response_delay()).await;

            let intent = classify_intent(&text);
            let snapshot = session.snapshot();
            let forecast = session.forecast();
            let reply = compose_reply(intent, snapshot.as_ref(), &forecast, &config);

            let mut state = shared.lock();
            state.finish_turn(reply);
            shared.composing.send_replace(false);
            tracing::info!(?intent, has_snapshot = snapshot.is_some(), "reply appended");
        });

        Ok(())
    }

    /// Resolve once no reply is pending
    pub async fn wait_idle(&self) {
        let mut composing = self.shared.composing.subscribe();
        // The sender lives as long as `self`, so this only returns once idle.
        let _ = composing.wait_for(|composing| !*composing).await;
    }
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("Assistant")
            .field("config", &self.config)
            .field("messages", &state.messages().len())
            .field("composing", &state.is_composing())
            .finish()
    }
}
