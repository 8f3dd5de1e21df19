pub mod api;
pub mod components;
pub mod format;
pub mod query;
pub mod selection;
