//! Network layer: auth API calls, shared wire types, and the client
//! that drives submissions through the session state machine.

pub mod api;
pub mod auth_client;
pub mod types;
