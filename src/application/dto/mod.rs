/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod enrich_request;
mod enrich_response;

pub use enrich_request::{EnrichRequest, MappingSource};
pub use enrich_response::EnrichResponse;
