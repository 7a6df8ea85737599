//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the plain data every view reads; `session` owns the operations
//! that change it. Views only ever see the data half through a signal.

pub mod auth;
pub mod session;
