pub mod config;
pub mod exponent;
pub mod raw;
pub mod ring;

pub use poly::config::Config;
