//! Implements the Forge trait for Github
use async_trait::async_trait;
use bytes::Bytes;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    Result,
    error::ReleaseSummaryError,
    forge::{
        config::RemoteConfig,
        request::{
            CreateCommentRequest, PullRequest, PullRequestFile, Release,
            ReleaseAsset, UpdatePrRequest, UpdateReleaseRequest,
            UploadAssetRequest,
        },
        traits::Forge,
    },
};

/// Maximum page size accepted by the pull request files endpoint.
const FILES_PAGE_SIZE: u8 = 100;

#[derive(Debug, Deserialize)]
struct GeneratedNotes {
    pub body: String,
}

/// A full page of files means the listing may be cut off.
fn listing_truncated(count: usize) -> bool {
    count >= usize::from(FILES_PAGE_SIZE)
}

/// GitHub forge implementation using Octocrab for API interactions with
/// releases, release assets and pull requests.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.api_base_uri();
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }

    fn repo_endpoint(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{path}",
            self.base_uri, self.config.owner, self.config.repo
        )
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn get_file_content(&self, path: &str) -> Result<Option<String>> {
        let result = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .get_content()
            .path(path)
            .send()
            .await;

        match result {
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                debug!("no file found for path: {path}");
                Ok(None)
            }
            Err(err) => {
                let msg = format!(
                    "encountered error getting file contents for path: {path}: {err}"
                );
                error!("{msg}");
                Err(ReleaseSummaryError::forge(msg))
            }
            Ok(mut data) => {
                let items = data.take_items();

                let Some(item) = items.first() else {
                    debug!("no file found for path: {path}");
                    return Ok(None);
                };

                item.decoded_content().map(Some).ok_or_else(|| {
                    ReleaseSummaryError::forge(format!(
                        "failed to decode file content for path: {path}"
                    ))
                })
            }
        }
    }

    async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequest> {
        let pr = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .get(pr_number)
            .await?;

        Ok(PullRequest {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            body: pr.body.unwrap_or_default(),
        })
    }

    async fn list_pull_request_files(
        &self,
        pr_number: u64,
    ) -> Result<Vec<PullRequestFile>> {
        let endpoint = self.repo_endpoint(&format!(
            "pulls/{pr_number}/files?per_page={FILES_PAGE_SIZE}"
        ));

        let files: Vec<PullRequestFile> =
            self.instance.get(endpoint, None::<&()>).await?;

        debug!("pull request #{pr_number} changed {} files", files.len());

        if listing_truncated(files.len()) {
            warn!(
                "pull request #{pr_number} lists at least {FILES_PAGE_SIZE} files: only the first {FILES_PAGE_SIZE} are summarized"
            );
        }

        Ok(files)
    }

    async fn update_pr(&self, req: UpdatePrRequest) -> Result<()> {
        self.instance
            .pulls(&self.config.owner, &self.config.repo)
            .update(req.pr_number)
            .body(req.body)
            .send()
            .await?;

        Ok(())
    }

    async fn create_comment(&self, req: CreateCommentRequest) -> Result<()> {
        self.instance
            .issues(&self.config.owner, &self.config.repo)
            .create_comment(req.pr_number, req.body)
            .await?;

        Ok(())
    }

    async fn generate_release_notes(&self, tag: &str) -> Result<String> {
        let endpoint = self.repo_endpoint("releases/generate-notes");

        let body = serde_json::json!({ "tag_name": tag });

        info!("generating release notes for tag: {tag}");

        let notes: GeneratedNotes =
            self.instance.post(endpoint, Some(&body)).await?;

        Ok(notes.body)
    }

    async fn get_release_by_tag(&self, tag: &str) -> Result<Release> {
        let release = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .get_by_tag(tag)
            .await?;

        Ok(Release {
            id: release.id.into_inner(),
            tag: release.tag_name,
            body: release.body.unwrap_or_default(),
            assets: release
                .assets
                .into_iter()
                .map(|a| ReleaseAsset {
                    id: a.id.into_inner(),
                    name: a.name,
                })
                .collect(),
        })
    }

    async fn update_release(&self, req: UpdateReleaseRequest) -> Result<()> {
        let endpoint = self.repo_endpoint(&format!("releases/{}", req.release_id));

        let _: serde_json::Value = self
            .instance
            .patch(endpoint, Some(&serde_json::json!({ "body": req.body })))
            .await?;

        info!("updated body of release {}", req.release_id);

        Ok(())
    }

    async fn delete_asset(&self, asset_id: u64) -> Result<()> {
        let endpoint = self.repo_endpoint(&format!("releases/assets/{asset_id}"));

        let response = self.instance._delete(endpoint, None::<&()>).await?;

        if !response.status().is_success() {
            return Err(ReleaseSummaryError::forge(format!(
                "failed to delete release asset {asset_id}: status {}",
                response.status()
            )));
        }

        info!("deleted release asset {asset_id}");

        Ok(())
    }

    async fn upload_asset(&self, req: UploadAssetRequest) -> Result<()> {
        self.instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .upload_asset(req.release_id, &req.name, Bytes::from(req.content))
            .send()
            .await?;

        info!("uploaded asset {} to release {}", req.name, req.release_id);

        Ok(())
    }
}
