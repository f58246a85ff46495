pub mod client;
pub mod error_codes;
pub mod types;

pub use client::*;
pub use error_codes::*;
pub use types::*;
