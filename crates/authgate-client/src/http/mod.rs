/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses normalized into outcome values
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth;
pub mod client;
pub mod error;
pub mod outcome;
pub mod profile;

pub use error::{AuthgateError, Result};
pub use outcome::{FieldErrors, Outcome, ResponseData};

pub use client::{AuthgateClient, ClientConfig, RequestOptions};
