/// Domain layer - impact analysis business logic
///
/// Pure data types and services with no I/O. Every value here is rebuilt
/// from the raw report and graph text on each request.
pub mod domain;
pub mod policies;
pub mod services;
