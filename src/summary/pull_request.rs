//! Pull request summaries, reused from the description when present and
//! otherwise generated from the changed files.
use glob::Pattern;
use log::*;

use crate::{
    ReleaseSummaryError, Result,
    forge::request::{
        CreateCommentRequest, PullRequest, PullRequestFile, UpdatePrRequest,
    },
    summary::{
        Summarizer,
        markers::{PULL_REQUEST_MARKERS, Region},
        prompt::{file_summary_prompt, pull_request_prompt},
    },
};

/// Summary used when a pull request has no file worth summarizing.
pub const NO_CHANGES_SUMMARY: &str = "No summarizable changes.";

/// Include and exclude globs applied to pull request file names.
#[derive(Debug, Default)]
pub struct FileFilter {
    ignored: Vec<Pattern>,
    sources: Vec<Pattern>,
}

fn compile(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| Pattern::new(p).map_err(ReleaseSummaryError::from))
        .collect()
}

impl FileFilter {
    pub fn new(ignored: &[String], sources: &[String]) -> Result<Self> {
        Ok(Self {
            ignored: compile(ignored)?,
            sources: compile(sources)?,
        })
    }

    pub fn accepts(&self, filename: &str) -> bool {
        if self.ignored.iter().any(|p| p.matches(filename)) {
            return false;
        }

        self.sources.is_empty()
            || self.sources.iter().any(|p| p.matches(filename))
    }
}

impl Summarizer {
    /// Summary of a pull request. An existing marked region in the
    /// description is returned as is unless `replace` is set; otherwise a
    /// new summary is generated.
    pub async fn pull_request_summary(
        &self,
        pr_number: u64,
        replace: bool,
    ) -> Result<String> {
        let pr = self.forge.get_pull_request(pr_number).await?;

        match PULL_REQUEST_MARKERS.resolve(&pr.body, replace) {
            Region::Existing(summary) => {
                info!("pull request #{pr_number} already summarized");
                Ok(summary.trim().to_string())
            }
            Region::Base(base) => {
                self.generate_pull_request_summary(&pr, &base).await
            }
        }
    }

    async fn generate_pull_request_summary(
        &self,
        pr: &PullRequest,
        base: &str,
    ) -> Result<String> {
        info!("generating summary for pull request #{}", pr.number);

        let filter = FileFilter::new(
            &self.options.ignored_files,
            &self.options.src_files,
        )?;

        let files = self.forge.list_pull_request_files(pr.number).await?;

        let mut file_summaries = vec![];

        for file in files.iter().filter(|f| filter.accepts(&f.filename)) {
            if let Some(summary) = self.summarize_file(pr.number, file).await? {
                file_summaries.push(summary);
            }
        }

        let summary = if file_summaries.is_empty() {
            NO_CHANGES_SUMMARY.to_string()
        } else {
            let prompt = pull_request_prompt(&pr.title, &file_summaries);

            if self.exceeds_input_limit(&prompt) {
                warn!(
                    "pull request #{} too large to summarize as a whole: listing file summaries",
                    pr.number
                );
                file_summaries
                    .iter()
                    .map(|s| format!("* {s}"))
                    .collect::<Vec<String>>()
                    .join("\n")
            } else {
                self.predict_required(
                    prompt,
                    &format!("pull request #{}", pr.number),
                )
                .await?
            }
        };

        if self.options.update {
            self.persist_pull_request_summary(pr.number, base, &summary)
                .await?;
        }

        Ok(summary)
    }

    async fn summarize_file(
        &self,
        pr_number: u64,
        file: &PullRequestFile,
    ) -> Result<Option<String>> {
        let Some(patch) = file.patch.as_deref() else {
            debug!("skipping {}: no patch available", file.filename);
            return Ok(None);
        };

        let prompt = file_summary_prompt(&file.filename, patch);

        let summary = if self.exceeds_input_limit(&prompt) {
            warn!("change to {} too large to summarize", file.filename);
            format!("{}: change too large to summarize", file.filename)
        } else {
            let text = self
                .predict_required(prompt, &format!("file {}", file.filename))
                .await?;
            format!("{}: {}", file.filename, text)
        };

        if self.options.update && self.options.create_file_comments {
            self.forge
                .create_comment(CreateCommentRequest {
                    pr_number,
                    body: summary.clone(),
                })
                .await?;
        }

        Ok(Some(summary))
    }

    async fn persist_pull_request_summary(
        &self,
        pr_number: u64,
        base: &str,
        summary: &str,
    ) -> Result<()> {
        if self.options.output_as_comment {
            info!("commenting summary on pull request #{pr_number}");
            return self
                .forge
                .create_comment(CreateCommentRequest {
                    pr_number,
                    body: PULL_REQUEST_MARKERS.wrap("", summary),
                })
                .await;
        }

        info!("writing summary to pull request #{pr_number} description");

        self.forge
            .update_pr(UpdatePrRequest {
                pr_number,
                body: PULL_REQUEST_MARKERS.wrap(base, summary),
            })
            .await
    }
}
