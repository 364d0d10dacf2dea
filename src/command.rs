//! Command execution for release-summary.
//!
//! Each subcommand resolves the remote, loads `release-summary.toml` from the
//! repository, builds a [`Summarizer`](crate::summary::Summarizer) and prints
//! the resulting summary to stdout.

/// Shared setup of the forge, configuration and summarizer.
pub mod common;

/// Summary of a single pull request.
pub mod pull_request;

/// Summary of the release published for a tag.
pub mod release;
