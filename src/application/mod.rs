/// Application layer - use cases, DTOs and adapter factories
///
/// Use cases read raw tool output through ports, run the domain services
/// over it and hand back serializable responses.
pub mod dto;
pub mod factories;
pub mod use_cases;
