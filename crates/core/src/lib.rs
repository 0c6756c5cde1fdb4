//! chatline_core - Functional core for the chatline API client.
//!
//! Pure data types and pure functions with no I/O: the response envelope,
//! the error taxonomy with its per-module status tables, and the request and
//! model types exchanged with the chat backend.

pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod models;
pub mod pagination;
pub mod requests;

pub use envelope::{decode_list, json_item, json_list, ApiResponse, DecodeError};
pub use error::{
    translate, ApiError, ApiModule, CallFailure, ErrorBody, HttpFailure, Refinement,
    TransportFailure,
};
pub use pagination::Pagination;
