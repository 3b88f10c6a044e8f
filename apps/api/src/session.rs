//! Per-session form state.
//!
//! Each browser session owns one `Session` record: the form fields, the merit
//! entries and the last generation outcome. A request applies one `FormEvent`
//! to the record (a pure transition), optionally runs generation, and writes
//! the record back.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::merit::form::{FormInput, MeritEntries};
use crate::merit::parser::GenerationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Re-render with the submitted values only.
    Refresh,
    AddEntry,
    RemoveEntry,
    Generate,
    Reset,
}

impl FormAction {
    pub fn parse(value: &str) -> Self {
        match value {
            "add" => FormAction::AddEntry,
            "remove" => FormAction::RemoveEntry,
            "generate" => FormAction::Generate,
            "reset" => FormAction::Reset,
            _ => FormAction::Refresh,
        }
    }
}

/// One user interaction: the whole form as submitted plus the button pressed.
#[derive(Debug, Clone)]
pub struct FormEvent {
    pub session_id: Option<Uuid>,
    pub action: FormAction,
    pub form: FormInput,
    pub merits: Vec<String>,
}

impl FormEvent {
    /// Builds an event from url-encoded pairs. `merit` may repeat; order is kept.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut event = FormEvent {
            session_id: None,
            action: FormAction::Refresh,
            form: FormInput::default(),
            merits: Vec::new(),
        };
        for (key, value) in pairs {
            match key.as_str() {
                "session_id" => event.session_id = Uuid::parse_str(value.trim()).ok(),
                "action" => event.action = FormAction::parse(&value),
                "name" => event.form.name = value,
                "organization" => event.form.organization = value,
                "department" => event.form.department = value,
                "position" => event.form.position = value,
                "tenure" => event.form.tenure = value,
                "merit" => event.merits.push(value),
                _ => {}
            }
        }
        event
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub form: FormInput,
    pub entries: MeritEntries,
    pub result: Option<GenerationResult>,
    pub error: Option<String>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    fn with_id(id: Uuid) -> Self {
        Self {
            id,
            form: FormInput::default(),
            entries: MeritEntries::new(),
            result: None,
            error: None,
            last_seen: Utc::now(),
        }
    }

    /// Applies one interaction. Values are synced before the list is resized,
    /// so edits made in the same round trip as an add/remove are kept.
    pub fn apply(mut self, event: &FormEvent) -> Self {
        if event.action == FormAction::Reset {
            return Self::with_id(self.id);
        }

        self.form = event.form.clone();
        self.entries.sync(event.merits.clone());
        self.error = None;

        match event.action {
            FormAction::AddEntry => self.entries.append_entry(),
            FormAction::RemoveEntry => self.entries.remove_last_entry(),
            FormAction::Generate | FormAction::Refresh | FormAction::Reset => {}
        }
        self
    }

    /// Stores the outcome of a generation attempt. The form is left untouched
    /// so a failed attempt can be retried as-is.
    pub fn record_generation(&mut self, outcome: Result<GenerationResult, &AppError>) {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.user_message());
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory session records keyed by id, evicted after an idle TTL.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the live session for `id`, or a fresh one if it is unknown or expired.
    pub async fn load(&self, id: Option<Uuid>) -> Session {
        let mut sessions = self.sessions.write().await;
        self.evict_expired(&mut sessions);

        id.and_then(|id| sessions.get(&id).cloned())
            .unwrap_or_default()
    }

    pub async fn save(&self, mut session: Session) {
        session.last_seen = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.evict_expired(&mut sessions);
        sessions.insert(session.id, session);
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn evict_expired(&self, sessions: &mut HashMap<Uuid, Session>) {
        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen < self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {evicted} idle session(s)");
        }
    }

    #[cfg(test)]
    pub(crate) async fn backdate(&self, id: Uuid, idle: Duration) {
        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            session.last_seen = Utc::now() - idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::merit::fixtures::complete_form;
    use crate::merit::parser::parse_completion;

    fn event(action: FormAction, merits: &[&str]) -> FormEvent {
        FormEvent {
            session_id: None,
            action,
            form: complete_form(),
            merits: merits.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_from_pairs_keeps_merit_order() {
        let event = FormEvent::from_pairs(vec![
            ("action".to_string(), "add".to_string()),
            ("name".to_string(), "홍길동".to_string()),
            ("merit".to_string(), "첫째".to_string()),
            ("merit".to_string(), String::new()),
            ("merit".to_string(), "셋째".to_string()),
            ("session_id".to_string(), "not-a-uuid".to_string()),
        ]);
        assert_eq!(event.action, FormAction::AddEntry);
        assert_eq!(event.form.name, "홍길동");
        assert_eq!(event.merits, vec!["첫째", "", "셋째"]);
        assert!(event.session_id.is_none());
    }

    #[test]
    fn test_unknown_action_is_refresh() {
        assert_eq!(FormAction::parse("explode"), FormAction::Refresh);
    }

    #[test]
    fn test_add_keeps_edits_and_appends() {
        let session = Session::new().apply(&event(FormAction::AddEntry, &["작성 중"]));
        assert_eq!(session.entries.entries(), &["작성 중".to_string(), String::new()]);
        assert_eq!(session.form, complete_form());
    }

    #[test]
    fn test_remove_at_one_entry_is_noop() {
        let session = Session::new().apply(&event(FormAction::RemoveEntry, &["유일"]));
        assert_eq!(session.entries.entries(), &["유일".to_string()]);
    }

    #[test]
    fn test_reset_clears_state_but_keeps_id() {
        let session = Session::new().apply(&event(FormAction::AddEntry, &["a"]));
        let id = session.id;
        let reset = session.apply(&event(FormAction::Reset, &["a", "b"]));
        assert_eq!(reset.id, id);
        assert_eq!(reset.entries.entries().len(), 1);
        assert_eq!(reset.form, FormInput::default());
    }

    #[test]
    fn test_failed_generation_keeps_form_for_retry() {
        let mut session = Session::new().apply(&event(FormAction::Generate, &["공적"]));
        session.record_generation(Ok(parse_completion("공적요지: 이전", 1)));

        let err = AppError::Generation(LlmError::EmptyContent);
        session.record_generation(Err(&err));

        assert!(session.result.is_none());
        assert!(session.error.as_deref().unwrap().contains("empty content"));
        assert_eq!(session.entries.entries(), &["공적".to_string()]);
        assert_eq!(session.form, complete_form());
    }

    #[test]
    fn test_next_event_clears_previous_error() {
        let mut session = Session::new();
        session.error = Some("이전 오류".to_string());
        let session = session.apply(&event(FormAction::Refresh, &[""]));
        assert!(session.error.is_none());
    }

    #[tokio::test]
    async fn test_store_round_trips_session() {
        let store = SessionStore::new(Duration::minutes(60));
        let session = Session::new().apply(&event(FormAction::AddEntry, &["a"]));
        let id = session.id;
        store.save(session).await;

        let loaded = store.load(Some(id)).await;
        assert_eq!(loaded.id, id);
        assert_eq!(loaded.entries.entries().len(), 2);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_unknown_id_gives_fresh_session() {
        let store = SessionStore::new(Duration::minutes(60));
        let id = Uuid::new_v4();
        let loaded = store.load(Some(id)).await;
        assert_ne!(loaded.id, id);
        assert_eq!(loaded.entries.entries().len(), 1);
    }

    #[tokio::test]
    async fn test_store_evicts_idle_sessions() {
        let store = SessionStore::new(Duration::minutes(1));
        let session = Session::new();
        let id = session.id;
        store.save(session).await;

        store.backdate(id, Duration::minutes(5)).await;

        let loaded = store.load(Some(id)).await;
        assert_ne!(loaded.id, id);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_save_evicts_idle_sessions() {
        let store = SessionStore::new(Duration::minutes(1));
        let stale = Session::new();
        let stale_id = stale.id;
        store.save(stale).await;
        store.backdate(stale_id, Duration::minutes(5)).await;

        store.save(Session::new()).await;
        assert_eq!(store.len().await, 1);
        assert_ne!(store.load(Some(stale_id)).await.id, stale_id);
    }
}
