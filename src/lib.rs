//! Central authentication service: a session/ticket single sign-on
//! authority exposed as a library (`core` + reference `adapters`) and as a
//! thin demo HTTP binary wired up in `bootstrap`/`main`.

pub mod adapters;
pub mod bootstrap;
pub mod core;
