//! # rehnuma-domain
//!
//! Pure domain model for the rehnuma citizen guide.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, time helpers
//! - Define **Services** (guided procedures, categorised hospital/government)
//!   and their ordered **Steps**
//! - Bilingual text and the per-user **Session** context
//! - Static lookup tables: **districts**, **symptoms**, emergency contacts
//! - The rule-based **responder** behind the chat assistant
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod language;
pub mod time;

pub mod district;
pub mod emergency;
pub mod responder;
pub mod service;
pub mod session;
pub mod step;
pub mod symptom;
