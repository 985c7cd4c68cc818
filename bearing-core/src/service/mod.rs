//! Generation backends.
//!
//! The form talks to a [`SpecificationService`]; which implementation it
//! gets is decided at startup through a [`ServiceRegistry`].

pub mod factory;
pub mod local;
pub mod provider;
mod submit;

pub use factory::{ServiceConfig, ServiceFactory, ServiceRegistry};
pub use local::{LocalServiceFactory, LocalSpecificationService};
pub use provider::{GenerateResponse, ServiceError, SpecificationService};
pub use submit::submit;
