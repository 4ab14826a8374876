/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities and fixtures
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for authgate-client tests

use std::path::{Path, PathBuf};

use authgate_client::{AuthgateClient, ClientConfig};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Unique temporary directory for session storage
pub fn temp_session_dir() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("authgate-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&path).unwrap();
    path
}

/// Client pointed at the mock server with an isolated session directory
pub fn client_for(server: &MockServer, session_dir: &Path) -> AuthgateClient {
    AuthgateClient::with_session_dir(&server.uri(), ClientConfig::default(), session_dir)
        .expect("client init")
}
