use std::collections::HashMap;
use std::time::{Duration, Instant};

use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use tracing::{debug, info, warn};

use super::SessionId;
use super::action::{Action, reduce};
use super::gate::PasswordGate;
use super::state::{Notice, SessionState};
use super::view::{BookView, BrowseQuery, LoginView, Page};
use crate::error::RecipeError;

/// Messages handled by the sessions actor.
#[derive(Debug)]
pub enum SessionsMessage {
    /// Apply a user action to one session.
    Dispatch(SessionId, Action, RpcReplyPort<Result<Notice, RecipeError>>),
    /// Build the page for one session, consuming its pending notice.
    Render(SessionId, BrowseQuery, RpcReplyPort<Page>),
    /// Number of sessions still alive.
    ActiveSessions(RpcReplyPort<usize>),
}

/// Handle for interacting with the sessions actor.
#[derive(Clone)]
pub struct SessionsHandle {
    actor: ActorRef<SessionsMessage>,
}

impl SessionsHandle {
    pub async fn dispatch(&self, id: SessionId, action: Action) -> Result<Notice, RecipeError> {
        ractor::call!(self.actor, SessionsMessage::Dispatch, id, action)
            .map_err(|e| RecipeError::Actor(format!("Dispatch RPC failed: {e}")))?
    }

    pub async fn render(&self, id: SessionId, query: BrowseQuery) -> Result<Page, RecipeError> {
        ractor::call!(self.actor, SessionsMessage::Render, id, query)
            .map_err(|e| RecipeError::Actor(format!("Render RPC failed: {e}")))
    }

    pub async fn active_sessions(&self) -> Result<usize, RecipeError> {
        ractor::call!(self.actor, SessionsMessage::ActiveSessions)
            .map_err(|e| RecipeError::Actor(format!("ActiveSessions RPC failed: {e}")))
    }
}

struct Session {
    state: SessionState,
    last_seen: Instant,
}

impl Session {
    fn new() -> Self {
        Self {
            state: SessionState::new(),
            last_seen: Instant::now(),
        }
    }
}

/// Internal state held by the sessions actor.
pub struct SessionsActorState {
    sessions: HashMap<SessionId, Session>,
    gate: PasswordGate,
    ttl: Duration,
}

impl SessionsActorState {
    fn evict_expired(&mut self) {
        let ttl = self.ttl;
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.last_seen.elapsed() < ttl);
        let evicted = before - self.sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = self.sessions.len(), "expired sessions discarded");
        }
    }
}

/// Owns every live session; one message at a time, so no session is mutated concurrently.
struct SessionsActor;

#[ractor::async_trait]
impl Actor for SessionsActor {
    type Msg = SessionsMessage;
    type State = SessionsActorState;
    type Arguments = (PasswordGate, Duration);

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        (gate, ttl): Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!(
            ttl_secs = ttl.as_secs(),
            default_password = gate.is_fallback(),
            "SessionsActor started"
        );
        Ok(SessionsActorState {
            sessions: HashMap::new(),
            gate,
            ttl,
        })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        state.evict_expired();
        match message {
            SessionsMessage::Dispatch(id, action, reply) => {
                let result = self.handle_dispatch(state, id, action);
                let _ = reply.send(result);
            }
            SessionsMessage::Render(id, query, reply) => {
                let page = self.handle_render(state, id, &query);
                let _ = reply.send(page);
            }
            SessionsMessage::ActiveSessions(reply) => {
                let _ = reply.send(state.sessions.len());
            }
        }
        Ok(())
    }
}

impl SessionsActor {
    fn handle_dispatch(
        &self,
        state: &mut SessionsActorState,
        id: SessionId,
        action: Action,
    ) -> Result<Notice, RecipeError> {
        let label = action.label();
        let session = state.sessions.entry(id).or_insert_with(Session::new);
        session.last_seen = Instant::now();

        match reduce(&mut session.state, &state.gate, action) {
            Ok(notice) => {
                info!(session = %id, action = label, "action applied");
                session.state.set_notice(notice.clone());
                Ok(notice)
            }
            Err(e) => {
                warn!(session = %id, action = label, error = %e, "action rejected");
                session.state.set_notice(e.to_notice());
                Err(e)
            }
        }
    }

    fn handle_render(
        &self,
        state: &mut SessionsActorState,
        id: SessionId,
        query: &BrowseQuery,
    ) -> Page {
        let default_password = state.gate.is_fallback();
        let Some(session) = state.sessions.get_mut(&id) else {
            return Page::Login(LoginView {
                notice: None,
                default_password,
            });
        };
        session.last_seen = Instant::now();

        let notice = session.state.take_notice();
        if !session.state.password_correct {
            return Page::Login(LoginView {
                notice,
                default_password,
            });
        }
        Page::Book(BookView::build(&session.state, query, notice))
    }
}

/// Spawn the sessions actor and return a handle.
pub async fn spawn(gate: PasswordGate, ttl: Duration) -> Result<SessionsHandle, RecipeError> {
    let (actor, _jh) = Actor::spawn(None, SessionsActor, (gate, ttl))
        .await
        .map_err(|e| RecipeError::Actor(format!("failed to spawn SessionsActor: {e}")))?;
    Ok(SessionsHandle { actor })
}
