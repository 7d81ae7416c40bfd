//! Infrastructure layer - Store implementations and services

pub mod logging;
pub mod user;
