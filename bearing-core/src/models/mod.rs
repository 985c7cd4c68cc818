pub mod catalog;
mod generated_output;
mod specification_request;

pub use catalog::{BearingType, Seal, SubType};
pub use generated_output::GeneratedOutput;
pub use specification_request::{CATEGORY, SpecificationRequest};
