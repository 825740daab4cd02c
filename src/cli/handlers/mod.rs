pub mod cipher;
pub mod config;
