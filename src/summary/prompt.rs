//! Parsing of generated release notes and assembly of inference prompts.
use regex::Regex;
use std::{collections::HashSet, sync::LazyLock};

/// Returned instead of a summary when the release prompt is too long.
pub const RELEASE_TOO_BIG: &str =
    "Error: couldn't generate summary. Release too big";

static COMPARE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/compare/(?<previous>\S+?)\.\.\.(?<current>\S+)").unwrap()
});

static PULL_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/pull/(?<number>\d+)$").unwrap());

/// A pull request mentioned by a changelog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestReference {
    pub number: u64,
    /// The full changelog line, used as the title of the change.
    pub line: String,
}

/// Tag of the previous release, read from the compare link of generated
/// notes such as `**Full Changelog**: https://host/o/r/compare/v1.0...v1.1`.
pub fn previous_tag(notes: &str) -> Option<String> {
    COMPARE_REGEX
        .captures(notes)
        .and_then(|c| c.name("previous"))
        .map(|m| m.as_str().to_string())
        .filter(|tag| !tag.is_empty())
}

/// Every changelog line ending in a pull request link, in order. Other lines
/// are dropped, as are later mentions of an already listed pull request.
pub fn pull_request_references(notes: &str) -> Vec<PullRequestReference> {
    let mut seen = HashSet::new();

    notes
        .lines()
        .map(str::trim_end)
        .filter_map(|line| {
            let captures = PULL_LINK_REGEX.captures(line)?;
            let number = captures.name("number")?.as_str().parse().ok()?;
            Some(PullRequestReference {
                number,
                line: line.to_string(),
            })
        })
        .filter(|reference| seen.insert(reference.number))
        .collect()
}

pub fn pull_request_block(
    reference: &PullRequestReference,
    summary: &str,
) -> String {
    format!(
        "Summary for PR #{}:\nTitle: {}\n{}",
        reference.number, reference.line, summary
    )
}

pub fn previous_release_context(summary: &str) -> String {
    format!(
        "For context, here is the summary of the previous release. Do not \
         repeat it, but keep a consistent tone:\n{}",
        summary.trim()
    )
}

pub fn release_prompt(
    persona: &str,
    blocks: &[String],
    previous_context: Option<&str>,
) -> String {
    let mut parts = vec![
        format!(
            "You are writing the release notes for a new release of a \
             software project, impersonating {persona}. Below are summaries \
             of every pull request merged into this release. Write a summary \
             of the release as a whole, grouping related changes and \
             highlighting what matters to users."
        ),
        format!("```\n{}\n```", blocks.join("\n\n")),
    ];

    if let Some(context) = previous_context {
        parts.push(context.to_string());
    }

    parts.push(
        "Keep it brief. Answer only with bullet points, each line starting \
         with `*`."
            .to_string(),
    );

    parts.join("\n\n")
}

pub fn image_description_prompt(persona: &str, summary: &str) -> String {
    format!(
        "Impersonating {persona}, describe a single scene that an illustrator \
         could draw to celebrate the following software release. Describe \
         only what is visible in the scene, in at most three sentences.\n\n\
         {summary}"
    )
}

pub fn image_generation_prompt(description: &str, persona: &str) -> String {
    format!("{description}\n\nIn the style of {persona}. No text.")
}

pub fn file_summary_prompt(filename: &str, patch: &str) -> String {
    format!(
        "Summarize the following change to `{filename}` in one or two \
         sentences, focusing on behaviour rather than syntax.\n\n\
         ```diff\n{patch}\n```"
    )
}

pub fn pull_request_prompt(title: &str, file_summaries: &[String]) -> String {
    format!(
        "A pull request titled \"{title}\" changed the following files:\n\n\
         {}\n\nSummarize the pull request as a whole in a few bullet points, \
         each line starting with `*`.",
        file_summaries.join("\n")
    )
}
