//! Common test helper functions shared across test modules.
use secrecy::SecretString;

use crate::forge::config::RemoteConfig;

/// Creates a test RemoteConfig pointing at `https://github.com/test/repo`.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        host: "github.com".to_string(),
        scheme: "https".to_string(),
        owner: "test".to_string(),
        repo: "repo".to_string(),
        path: "test/repo".to_string(),
        token: SecretString::from("test-token".to_string()),
        release_link_base_url: "https://github.com/test/repo/releases"
            .to_string(),
    }
}
