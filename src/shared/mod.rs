pub mod error;
pub mod lenient;
pub mod result;
pub mod security;

pub use result::Result;
