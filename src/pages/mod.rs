//! Top-level routed pages.

pub mod home;
pub mod login;
pub mod sign_up;
