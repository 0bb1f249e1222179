//! Case identifiers.
//!
//! Every triage case is keyed by a time-prefixed identifier:
//! `YYYYMMDDTHHMMSS.mmmZ-<canonical_uuid>`
//!
//! The UUID part uses the canonical form: **32 lowercase hexadecimal characters**, no
//! hyphens (the value of `Uuid::new_v4().simple().to_string()`).
//!
//! Example:
//! `20260111T143522.045Z-550e8400e29b41d4a716446655440000`
//!
//! The timestamp prefix doubles as the case creation time, so identifiers sort in creation
//! order and remain human-readable in a case log. Identifiers are only ever generated here;
//! they are rendered as text, never read back.

mod service;

pub use service::{CaseId, Uuid};
