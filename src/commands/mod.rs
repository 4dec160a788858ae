pub mod config;
mod list;
pub mod services;

pub use config::{Config, ListOptions};
pub use list::{list, run};
