/*
[INPUT]:  Session directory configuration
[OUTPUT]: Persisted authentication session state
[POS]:    Session layer - local token and user record storage
[UPDATE]: When session storage strategy changes
*/

pub mod store;

pub use store::SessionStore;
