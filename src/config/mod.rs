// src/config/mod.rs
pub mod consts;
pub mod credentials;
pub mod options;

pub use credentials::Credentials;
pub use options::{Format, Options, VendorProfile};
