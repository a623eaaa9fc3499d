pub mod api;
pub mod receipt;


pub use api::*;
pub use receipt::*;
