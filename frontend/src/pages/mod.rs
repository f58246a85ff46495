pub mod signin;

pub use signin::*;
