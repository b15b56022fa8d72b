//! Business services for the ServiLink core

pub mod catalog;
pub mod verification;

pub use catalog::{ServiceCatalog, ServiceMatch};
pub use verification::{OtpService, OtpServiceConfig};
