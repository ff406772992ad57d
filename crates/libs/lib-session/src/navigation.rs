//! # Navigation Surface
//!
//! What the route guard needs from the host's router: read the current path,
//! redirect (with replace semantics), and hear about path changes.
//!
//! ## Return-Navigation Intent
//!
//! A guard redirect carries the originally requested path as a query
//! parameter on the login URL:
//!
//! ```text
//! /profile  ──guard──▶  /login?redirect=%2Fprofile  ──login──▶  /profile
//! ```
//!
//! [`return_path_from_query`] reads it back on the login screen and only
//! accepts in-app absolute paths, so the parameter cannot be used to bounce
//! a user to another origin.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::GuardConfig;
use crate::observer::{OrderedEmitter, Subscription};

/// Redirect issued by the route guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    /// Target path (the login screen).
    pub to: String,
    /// Query parameter carrying `return_to`.
    pub return_param: String,
    /// Path the user originally asked for.
    pub return_to: String,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl Redirect {
    /// Replace-redirect to the configured login screen, remembering `from`.
    pub fn to_login(config: &GuardConfig, from: &str) -> Self {
        Self {
            to: config.login_path.clone(),
            return_param: config.return_param.clone(),
            return_to: from.to_string(),
            replace: true,
        }
    }

    /// Full target URL with the return path encoded.
    pub fn href(&self) -> String {
        format!(
            "{}?{}={}",
            self.to,
            self.return_param,
            urlencoding::encode(&self.return_to)
        )
    }
}

/// Strip query and fragment from a location.
pub fn path_of(location: &str) -> &str {
    location
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(location)
}

/// Strip only the fragment from a location.
pub fn without_fragment(location: &str) -> &str {
    location.split('#').next().unwrap_or(location)
}

/// Join a router's pathname and search string into a location.
///
/// `search` may be given with or without its leading `?`.
pub fn location_of(path: &str, search: &str) -> String {
    let search = search.strip_prefix('?').unwrap_or(search);
    if search.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{search}")
    }
}

/// Read the return path from a login URL's query string.
///
/// Accepts the query with or without its leading `?`. Returns `None` when the
/// parameter is missing, undecodable, not an in-app absolute path, or points
/// back at the login screen.
pub fn return_path_from_query(query: &str, config: &GuardConfig) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let raw = query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == config.return_param).then_some(value)
    })?;

    let decoded = urlencoding::decode(raw).ok()?.into_owned();
    sanitize_return_path(&decoded, config)
}

fn sanitize_return_path(candidate: &str, config: &GuardConfig) -> Option<String> {
    let in_app = candidate.starts_with('/')
        && !candidate.starts_with("//")
        && !candidate.starts_with("/\\")
        && !candidate.chars().any(char::is_control);
    if !in_app {
        tracing::warn!(candidate, "Ignoring return path outside the app");
        return None;
    }

    if path_of(candidate) == config.login_path {
        return None;
    }

    Some(candidate.to_string())
}

/// Router capability consumed by [`GuardedScreen`](crate::screen::GuardedScreen).
pub trait Navigator {
    /// Current path and query, without fragment.
    fn current_location(&self) -> String;

    /// Current path, without query or fragment.
    fn current_path(&self) -> String {
        path_of(&self.current_location()).to_string()
    }

    /// Perform `redirect`, replacing the current history entry when
    /// `redirect.replace` is set.
    fn redirect(&self, redirect: &Redirect);

    /// Call `listener` with the new location (path and query) after every
    /// navigation.
    fn watch(&self, listener: Box<dyn Fn(&str)>) -> Subscription;
}

struct History {
    entries: Vec<String>,
    index: usize,
}

/// In-memory history stack.
///
/// Used by headless hosts and tests; the browser client relies on Leptos
/// Router instead.
#[derive(Clone)]
pub struct MemoryNavigator {
    history: Rc<RefCell<History>>,
    emitter: Rc<OrderedEmitter<String>>,
}

impl MemoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: Rc::new(RefCell::new(History {
                entries: vec![initial.into()],
                index: 0,
            })),
            emitter: Rc::new(OrderedEmitter::new()),
        }
    }

    /// Navigate to `location`, dropping any forward entries.
    pub fn push(&self, location: impl Into<String>) {
        let location = location.into();
        {
            let mut history = self.history.borrow_mut();
            let keep = history.index + 1;
            history.entries.truncate(keep);
            history.entries.push(location.clone());
            history.index = keep;
        }
        self.notify(&location);
    }

    /// Replace the current entry with `location`.
    pub fn replace(&self, location: impl Into<String>) {
        let location = location.into();
        {
            let mut history = self.history.borrow_mut();
            let index = history.index;
            history.entries[index] = location.clone();
        }
        self.notify(&location);
    }

    /// Go back one entry. Returns `false` at the start of history.
    pub fn back(&self) -> bool {
        let location = {
            let mut history = self.history.borrow_mut();
            if history.index == 0 {
                return false;
            }
            history.index -= 1;
            history.entries[history.index].clone()
        };
        self.notify(&location);
        true
    }

    /// Current location including query.
    pub fn location(&self) -> String {
        let history = self.history.borrow();
        history.entries[history.index].clone()
    }

    /// Every history entry, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.history.borrow().entries.clone()
    }

    fn notify(&self, location: &str) {
        tracing::debug!(location, "Navigated");
        self.emitter.publish(without_fragment(location).to_string());
    }
}

impl Navigator for MemoryNavigator {
    fn current_location(&self) -> String {
        without_fragment(&self.location()).to_string()
    }

    fn redirect(&self, redirect: &Redirect) {
        if redirect.replace {
            self.replace(redirect.href());
        } else {
            self.push(redirect.href());
        }
    }

    fn watch(&self, listener: Box<dyn Fn(&str)>) -> Subscription {
        self.emitter.add(move |path: &String| listener(path))
    }
}
