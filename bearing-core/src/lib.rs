pub mod form;
pub mod generator;
pub mod models;
pub mod service;

pub use form::{Field, FormAction, FormState};
pub use models::*;
pub use service::{ServiceError, SpecificationService};
