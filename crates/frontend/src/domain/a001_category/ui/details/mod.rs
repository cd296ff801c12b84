//! Category Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands and form state
//! - view.rs: Leptos component (pure UI)
//!
//! API functions live in the aggregate-level api.rs.

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
