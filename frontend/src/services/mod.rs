pub mod api;
pub mod dom;
pub mod download;
pub mod logging;
