//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `form`) so individual pages can
//! depend on small focused models. Everything here is plain data with
//! pure transition methods; reactivity is layered on top via
//! `RwSignal<...>` contexts in `app.rs`.

pub mod form;
pub mod session;
