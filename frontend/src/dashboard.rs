pub mod api;
pub mod charts;
pub mod comments;
pub mod components;
