//! Вспомогательные модули библиотеки

pub mod common;
pub mod logger;

pub use common::{derive_base_name, sanitize_filename};
pub use logger::init_logger;
