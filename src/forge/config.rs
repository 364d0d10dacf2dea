//! Configuration for forge platform connections.
use secrecy::SecretString;

/// Repository file that may carry release-summary configuration.
pub const DEFAULT_CONFIG_FILE: &str = "release-summary.toml";

/// Remote repository connection configuration for authenticating and
/// interacting with the forge platform.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Full repository path.
    pub path: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Base URL for release pages, e.g. `https://github.com/owner/repo/releases`.
    pub release_link_base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "".to_string(),
            scheme: "".to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            path: "".to_string(),
            token: SecretString::from("".to_string()),
            release_link_base_url: "".to_string(),
        }
    }
}

impl RemoteConfig {
    /// Browser download URL of a named asset attached to the release `tag`.
    pub fn asset_download_url(&self, tag: &str, asset_name: &str) -> String {
        format!("{}/download/{tag}/{asset_name}", self.release_link_base_url)
    }

    /// REST API base for this forge: `api.github.com` for the public
    /// instance and `<host>/api/v3` for Enterprise installs.
    pub fn api_base_uri(&self) -> String {
        if self.host == "github.com" {
            format!("{}://api.{}", self.scheme, self.host)
        } else {
            format!("{}://{}/api/v3", self.scheme, self.host)
        }
    }
}
