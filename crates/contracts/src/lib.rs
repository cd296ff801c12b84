//! Wire contracts shared by the whole application.
//!
//! Pure serde types only: the shapes the remote REST API speaks plus the
//! form draft that feeds them. No I/O and no UI dependencies live here.

pub mod domain;
pub mod system;
