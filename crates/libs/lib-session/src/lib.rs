//! # Session Guard Library
//!
//! Client-side session state and route guarding for the mobile trading
//! client, independent of any UI framework.
//!
//! ## Components
//!
//! - **[`store::SessionStore`]**: owns the process-wide session snapshot,
//!   coalesces refreshes, notifies subscribers in order
//! - **[`guard::RouteGuard`]**: loading / redirect / render decision for a
//!   protected screen, plus the once-per-path refresh rule
//! - **[`screen::GuardedScreen`]**: a guard mounted against a live store and
//!   [`navigation::Navigator`]
//!
//! ## Flow
//!
//! ```text
//!  SessionCheck ──▶ SessionStore ──snapshots──▶ RouteGuard ──▶ Loading | Redirect | Render
//!                        ▲                           │
//!                        └──── refresh_user_data ────┘  (once per path, signed in)
//! ```
//!
//! ## Threading
//!
//! Everything here is single-threaded (`Rc`/`RefCell`, `!Send` futures) and
//! meant to live on the UI thread. Session checks are driven by an injected
//! [`spawn::Spawn`] implementation.

pub mod check;
pub mod config;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod observer;
pub mod screen;
pub mod snapshot;
pub mod spawn;
pub mod store;

#[cfg(test)]
mod tests;

pub use check::SessionCheck;
pub use config::GuardConfig;
pub use error::{Result, SessionError};
pub use guard::{GuardDecision, GuardOutcome, Placeholder, RouteGuard};
pub use navigation::{location_of, path_of, return_path_from_query, MemoryNavigator, Navigator, Redirect};
pub use observer::Subscription;
pub use screen::GuardedScreen;
pub use snapshot::SessionSnapshot;
pub use spawn::Spawn;
#[cfg(not(target_arch = "wasm32"))]
pub use spawn::TokioSpawner;
pub use store::{Refresh, SessionStore};
