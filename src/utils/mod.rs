// Utils compartidos

pub mod constants;
pub mod firebase_ffi;

pub use constants::*;
