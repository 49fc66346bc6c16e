//! Domain model for greeting payloads.
//!
//! # Responsibility
//! - Define the value types handed to REST callers.
//!
//! # Invariants
//! - Model types are immutable once constructed.

pub mod greeting;
