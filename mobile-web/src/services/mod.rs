//! Backend and browser services

pub mod auth;
pub mod session;
pub mod token;
