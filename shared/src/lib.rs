//! # Shared Client/Backend Types
//!
//! Wire types exchanged between the mobile client and the backend API, plus a
//! couple of display helpers used by several screens.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::auth`]**: login and session DTOs
//! - **[`utils`]**: display helpers
//!   - **[`utils::truncate_middle`]**: shorten identifiers with an ellipsis
//!   - **[`utils::initials`]**: avatar initials for a username
//!
//! ## Wire Format
//!
//! Plain `serde` JSON: snake_case field names, optional fields omitted when
//! `None`.
//!
//! ```rust
//! use shared::utils::truncate_middle;
//!
//! assert_eq!(truncate_middle("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL", 4, 4), "8W6Q...JKAL");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
