pub mod commands;
pub mod filter;
pub mod http;
pub mod output;
pub mod platform;
pub mod release;
pub mod source;
