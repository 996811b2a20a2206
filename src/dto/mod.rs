//! JSON data-transfer objects exchanged with API clients.
//!
//! DTOs are the wire-format counterpart of the domain models in `model/`.
//! Incoming DTOs are converted to parameter models at the controller boundary;
//! outgoing domain models are converted back with `into_dto` methods.

pub mod api;
pub mod comment;
pub mod confirmation;
pub mod like;
pub mod report;
pub mod search;
pub mod story;
pub mod story_part;
pub mod upload;
pub mod user;
