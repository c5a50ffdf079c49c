use crate::session::SessionStore;

/// Where an unauthenticated render is sent.
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unknown,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Neutral placeholder while the state is still unknown.
    Loading,
    Render,
    /// Replace the current history entry so back-navigation cannot re-enter.
    Redirect { to: &'static str, replace: bool },
}

/// Per-render gate on session presence.
///
/// The token is trusted at face value; nothing is verified against the
/// backend. A token revoked server-side only surfaces when the next API call
/// fails.
pub struct RouteGuard<'a> {
    store: &'a dyn SessionStore,
    state: GuardState,
}

impl<'a> RouteGuard<'a> {
    pub fn new(store: &'a dyn SessionStore) -> Self {
        Self {
            store,
            state: GuardState::Unknown,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Run the one-time check. Later calls keep the first result.
    pub fn check(&mut self) -> GuardOutcome {
        if self.state == GuardState::Unknown {
            self.state = if self.store.get().is_some() {
                GuardState::Authenticated
            } else {
                GuardState::Unauthenticated
            };
            tracing::debug!("route guard resolved to {:?}", self.state);
        }
        self.outcome()
    }

    pub fn outcome(&self) -> GuardOutcome {
        match self.state {
            GuardState::Unknown => GuardOutcome::Loading,
            GuardState::Authenticated => GuardOutcome::Render,
            GuardState::Unauthenticated => GuardOutcome::Redirect {
                to: LOGIN_ROUTE,
                replace: true,
            },
        }
    }
}
