//! Error taxonomy shared by every API module.
//!
//! A failed call is described by a [`CallFailure`] and turned into exactly one
//! [`ApiError`] by [`translate`]. Modules refine HTTP failures through their
//! status tables in [`ApiModule`].

mod body;
mod kinds;
mod tables;
mod translate;

pub use body::{ErrorBody, DEFAULT_ERROR_MESSAGE};
pub use kinds::ApiError;
pub use tables::ApiModule;
pub use translate::{no_refinement, translate, CallFailure, HttpFailure, Refinement, TransportFailure};
