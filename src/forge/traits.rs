//! Traits related to remote git forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    Result,
    forge::{
        config::RemoteConfig,
        request::{
            CreateCommentRequest, PullRequest, PullRequestFile, Release,
            UpdatePrRequest, UpdateReleaseRequest, UploadAssetRequest,
        },
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;
    async fn get_file_content(&self, path: &str) -> Result<Option<String>>;
    async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequest>;
    async fn list_pull_request_files(
        &self,
        pr_number: u64,
    ) -> Result<Vec<PullRequestFile>>;
    async fn update_pr(&self, req: UpdatePrRequest) -> Result<()>;
    async fn create_comment(&self, req: CreateCommentRequest) -> Result<()>;
    async fn generate_release_notes(&self, tag: &str) -> Result<String>;
    async fn get_release_by_tag(&self, tag: &str) -> Result<Release>;
    async fn update_release(&self, req: UpdateReleaseRequest) -> Result<()>;
    async fn delete_asset(&self, asset_id: u64) -> Result<()>;
    async fn upload_asset(&self, req: UploadAssetRequest) -> Result<()>;
}
