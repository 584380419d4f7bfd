pub mod followup;
pub mod prompt;
pub mod ranking;
pub mod segment;

use std::{collections::HashMap, sync::Arc};

use common::{
    error::AppError,
    storage::{corpus::CorpusIndex, session::SessionStore, types::session::SessionState},
    utils::generation::GenerationProvider,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// What a conversational turn returns to the transport layer.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub follow_up_questions: Vec<String>,
}

/// Composes ranking, follow-up generation, session bookkeeping, and the
/// generation call. Owns handles to the shared stores; nothing here reaches
/// for ambient global state.
pub struct ChatEngine {
    corpus: Arc<CorpusIndex>,
    sessions: Arc<SessionStore>,
    generation: GenerationProvider,
}

impl ChatEngine {
    pub fn new(
        corpus: Arc<CorpusIndex>,
        sessions: Arc<SessionStore>,
        generation: GenerationProvider,
    ) -> Self {
        Self {
            corpus,
            sessions,
            generation,
        }
    }

    pub fn corpus(&self) -> &CorpusIndex {
        &self.corpus
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Answers one conversational turn.
    ///
    /// Engine-level failures (ranking, generation) come back as the answer
    /// text with an empty follow-up list; the conversational contract never
    /// raises them through the request boundary.
    #[instrument(skip_all, fields(session_id))]
    pub async fn respond(&self, query: &str, session_id: &str) -> ChatReply {
        match self.answer(query, session_id).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(session_id, error = %err, "chat turn failed");
                ChatReply {
                    response: format!("Error processing your query: {err}"),
                    follow_up_questions: Vec::new(),
                }
            }
        }
    }

    async fn answer(&self, query: &str, session_id: &str) -> Result<ChatReply, AppError> {
        let documents = self.corpus.documents();
        let ranked = ranking::rank(query, &documents)?;

        let texts_by_path: HashMap<&str, &str> = documents
            .iter()
            .map(|document| (document.path.as_str(), document.text.as_str()))
            .collect();
        let relevant_text = ranked
            .iter()
            .filter_map(|entry| texts_by_path.get(entry.path.as_str()).copied())
            .collect::<Vec<&str>>()
            .join("\n");

        let previous = self.sessions.get(session_id);
        let previous_questions = previous
            .as_ref()
            .map(|state| state.follow_up_questions.clone())
            .unwrap_or_default();

        let follow_up_questions = followup::generate(&relevant_text, &previous_questions);

        // Conversational history for the generation call is per-session and
        // bounded to the retained turn.
        let history: Vec<String> = previous.map(|state| vec![state.query]).unwrap_or_default();

        // The session record is overwritten before the generation call; a
        // failing call leaves the new follow-ups in place (no rollback).
        self.sessions.put(
            session_id,
            SessionState::new(
                query.to_string(),
                follow_up_questions.clone(),
                relevant_text.clone(),
            ),
        );

        info!(
            session_id,
            ranked = ranked.len(),
            follow_ups = follow_up_questions.len(),
            "selected relevant documents"
        );

        let user_message = prompt::create_user_message(&relevant_text, query);
        let answer = self
            .generation
            .complete(prompt::ANSWER_SYSTEM_PROMPT, &history, &user_message)
            .await?;

        Ok(ChatReply {
            response: answer,
            follow_up_questions,
        })
    }
}
