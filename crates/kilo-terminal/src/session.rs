//! # Session State
//!
//! The set of order tabs open on one terminal.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple operations may access/modify tabs
//! 2. Only one operation should modify the session at a time
//! 3. Front-end calls can arrive concurrently
//!
//! ## Tab Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Tab Lifecycle                             │
//! │                                                                         │
//! │   open_tab("Counter 1") ──► [tab created, becomes active]               │
//! │            │                                                            │
//! │            ▼                                                            │
//! │   add_line / update_line / remove_line / set_order_discount             │
//! │            │                                                            │
//! │            ├──► open_tab("Counter 2")  [park this order, serve next]    │
//! │            │         select_tab(...)   [come back to it]                │
//! │            ▼                                                            │
//! │   submit_tab ──► OrderDraft handed to backend, tab dropped              │
//! │   close_tab ───► order abandoned, tab dropped                           │
//! │                                                                         │
//! │   Tabs are memory only. A terminal restart forgets them all.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use kilo_core::{OrderTab, MAX_SESSION_TABS};

use crate::error::TerminalError;

/// The open order tabs of one terminal.
///
/// ## Invariants
/// - Tab ids are unique (UUID v4)
/// - At most [`MAX_SESSION_TABS`] tabs at once
/// - `active_tab_id` always names an existing tab, or is `None` when
///   the session is empty
#[derive(Debug, Default)]
pub struct Session {
    tabs: Vec<OrderTab>,
    active_tab_id: Option<String>,
}

impl Session {
    /// Creates a session with no tabs.
    pub fn new() -> Self {
        Session::default()
    }

    /// Opens a new tab and makes it active. Returns the tab id.
    pub fn open_tab(&mut self, label: impl Into<String>) -> Result<String, TerminalError> {
        if self.tabs.len() >= MAX_SESSION_TABS {
            return Err(TerminalError::session_full(MAX_SESSION_TABS));
        }

        let tab = OrderTab::new(label);
        let id = tab.id.clone();
        self.tabs.push(tab);
        self.active_tab_id = Some(id.clone());
        Ok(id)
    }

    /// Removes a tab and returns it.
    ///
    /// If the closed tab was active, the most recently opened of the
    /// remaining tabs becomes active.
    pub fn close_tab(&mut self, tab_id: &str) -> Result<OrderTab, TerminalError> {
        let index = self
            .tabs
            .iter()
            .position(|t| t.id == tab_id)
            .ok_or_else(|| TerminalError::not_found("Order tab", tab_id))?;

        let tab = self.tabs.remove(index);
        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.active_tab_id = self.tabs.last().map(|t| t.id.clone());
        }
        Ok(tab)
    }

    /// Looks up a tab by id.
    pub fn tab(&self, tab_id: &str) -> Option<&OrderTab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    /// Looks up a tab for mutation.
    pub fn tab_mut(&mut self, tab_id: &str) -> Option<&mut OrderTab> {
        self.tabs.iter_mut().find(|t| t.id == tab_id)
    }

    /// The currently active tab, if any.
    pub fn active_tab(&self) -> Option<&OrderTab> {
        self.active_tab_id.as_deref().and_then(|id| self.tab(id))
    }

    /// Switches the active tab.
    pub fn select_tab(&mut self, tab_id: &str) -> Result<(), TerminalError> {
        if self.tab(tab_id).is_none() {
            return Err(TerminalError::not_found("Order tab", tab_id));
        }
        self.active_tab_id = Some(tab_id.to_string());
        Ok(())
    }

    /// All open tabs, oldest first.
    pub fn tabs(&self) -> &[OrderTab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// Shared session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one thread modifies the session at a time
///
/// ## Why Not RwLock?
/// Session operations are quick and most of them modify state. A
/// RwLock would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a new empty session state.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = session_state.with_session(|s| s.tab_count());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.open_tab("Counter 1"))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
