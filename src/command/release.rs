//! Release summary command implementation.
use log::*;

use crate::{Result, cli, command::common};

/// Execute release command: summarize the release published for `tag`.
pub async fn execute(args: &cli::Args, tag: &str) -> Result<String> {
    let (forge, summarizer) = common::setup_summarizer(args).await?;

    let release = forge.get_release_by_tag(tag).await?;
    info!("found release {} for tag {tag}", release.id);

    summarizer.release_summary(&release).await
}
