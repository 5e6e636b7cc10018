//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently exposes a single domain: tools backed by the
//! MoteurImmo listings API and the national address-lookup API.

pub mod tools;
