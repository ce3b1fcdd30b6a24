// Shared test fixtures, compiled only under cfg(test).

pub mod config;
pub mod dom;
pub mod logs;
