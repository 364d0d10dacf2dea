use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq)]
/// Pull request information needed for summarization.
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// A file changed by a pull request.
pub struct PullRequestFile {
    pub filename: String,
    /// Unified diff for the file. Absent for binary or oversized changes.
    #[serde(default)]
    pub patch: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// An asset attached to a release.
pub struct ReleaseAsset {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// A published release and its editable notes.
pub struct Release {
    pub id: u64,
    pub tag: String,
    pub body: String,
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone)]
/// Request to rewrite a release body.
pub struct UpdateReleaseRequest {
    pub release_id: u64,
    pub body: String,
}

#[derive(Debug, Clone)]
/// Request to attach binary content to a release.
pub struct UploadAssetRequest {
    pub release_id: u64,
    pub name: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone)]
/// Request to rewrite a pull request description.
pub struct UpdatePrRequest {
    pub pr_number: u64,
    pub body: String,
}

#[derive(Debug, Clone)]
/// Request to comment on a pull request.
pub struct CreateCommentRequest {
    pub pr_number: u64,
    pub body: String,
}
