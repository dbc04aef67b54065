//! Reusable UI components.

pub mod password_input;
