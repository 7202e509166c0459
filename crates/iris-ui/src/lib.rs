pub mod cli;
pub mod client;
pub mod form;
pub mod render;
pub mod server;

pub use cli::*;
pub use client::*;
pub use form::*;
pub use server::*;
