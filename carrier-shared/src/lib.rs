pub mod secret;

pub use secret::Masked;
