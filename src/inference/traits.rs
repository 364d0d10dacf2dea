//! Traits related to remote inference services
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::Result;

/// An image produced by the image generation endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedImage {
    pub url: Option<String>,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Inference: Send + Sync {
    /// Longest prompt, in characters, the service accepts.
    fn max_input_length(&self) -> usize;
    /// Completes the given prompt segments. `None` when the service
    /// produced no text.
    async fn predict(&self, segments: Vec<String>) -> Result<Option<String>>;
    async fn generate_image(
        &self,
        prompt: String,
    ) -> Result<Option<GeneratedImage>>;
    async fn download_image(&self, url: &str) -> Result<Vec<u8>>;
}
