//! Generation of release and pull request summaries.
//!
//! The [`Summarizer`] ties the forge and the inference service together:
//! pull request summaries are cached in the pull request description, release
//! summaries in the release body, both inside marker delimited regions so
//! that running the tool again does not regenerate them.
use derive_builder::Builder;
use std::{path::PathBuf, rc::Rc};

use crate::{
    ReleaseSummaryError, Result,
    forge::traits::Forge,
    inference::traits::Inference,
    summary::persona::{PersonaPicker, RandomPersona},
};

pub mod image;
pub mod markers;
pub mod persona;
pub mod prompt;
pub mod pull_request;
pub mod release;


/// Switches controlling what gets generated and written back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryOptions {
    /// Write summaries back to the release and pull requests.
    pub update: bool,
    /// Generate an illustration and attach it to the release.
    pub generate_image: bool,
    /// Regenerate even when a marked summary already exists.
    pub replace: bool,
    /// Globs of files left out of pull request summaries.
    pub ignored_files: Vec<String>,
    /// When not empty, only files matching one of these globs are summarized.
    pub src_files: Vec<String>,
    /// Post each file summary as a pull request comment.
    pub create_file_comments: bool,
    /// Post pull request summaries as comments instead of editing the
    /// description.
    pub output_as_comment: bool,
}

#[derive(Builder)]
#[builder(pattern = "owned", build_fn(private, name = "_build"))]
pub struct Summarizer {
    forge: Rc<dyn Forge>,
    inference: Rc<dyn Inference>,
    #[builder(default = "Rc::new(RandomPersona::default())")]
    persona: Rc<dyn PersonaPicker>,
    #[builder(default)]
    options: SummaryOptions,
    /// Directory the generated image is written to.
    #[builder(default = "PathBuf::from(\".\")", setter(into))]
    image_dir: PathBuf,
}

impl SummarizerBuilder {
    pub fn build(self) -> Result<Summarizer> {
        self._build().map_err(|e| {
            ReleaseSummaryError::invalid_config(format!(
                "Failed to build summarizer: {}",
                e
            ))
        })
    }
}

impl Summarizer {
    pub fn builder() -> SummarizerBuilder {
        SummarizerBuilder::default()
    }

    pub fn options(&self) -> &SummaryOptions {
        &self.options
    }

    /// Whether the prompt is longer, in characters, than the inference
    /// service's `max_input_length`.
    fn exceeds_input_limit(&self, prompt: &str) -> bool {
        prompt.chars().count() > self.inference.max_input_length()
    }

    /// Runs a single prompt, failing when the service produced no text.
    async fn predict_required(
        &self,
        prompt: String,
        site: &str,
    ) -> Result<String> {
        self.inference
            .predict(vec![prompt])
            .await?
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ReleaseSummaryError::empty_inference(site))
    }
}
