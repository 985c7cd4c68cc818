//! HTTP backend for the bearing specification form.
//!
//! Talks to the `/generate` and `/search` endpoints of a specification
//! service and registers itself under the `"http"` backend name.

mod client;
mod factory;

pub use client::HttpSpecificationService;
pub use factory::HttpServiceFactory;
