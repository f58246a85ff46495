pub mod common;
pub mod toast;
