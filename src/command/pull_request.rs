//! Pull request summary command implementation.
use crate::{Result, cli, command::common};

/// Execute pull-request command: summarize pull request `number`.
pub async fn execute(args: &cli::Args, number: u64) -> Result<String> {
    let (_, summarizer) = common::setup_summarizer(args).await?;
    let replace = summarizer.options().replace;

    summarizer.pull_request_summary(number, replace).await
}
