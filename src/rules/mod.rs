//! Pure business rules: no I/O, no database handles.
//!
//! Handlers fetch the rows they need, run these checks over the in-memory
//! collections, and only then write. Keeping the rules synchronous makes
//! them testable without a database.

pub mod leaderboard;
pub mod stage;
