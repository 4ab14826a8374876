/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Authgate client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod session;

// Re-export commonly used types from http
pub use http::{
    AuthgateClient,
    AuthgateError,
    ClientConfig,
    FieldErrors,
    Outcome,
    RequestOptions,
    ResponseData,
    Result,
};

// Re-export commonly used types from session
pub use session::SessionStore;
