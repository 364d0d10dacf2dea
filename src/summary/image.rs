//! Illustration of a release summary.
use log::*;

use crate::{
    ReleaseSummaryError, Result,
    summary::{
        Summarizer,
        prompt::{image_description_prompt, image_generation_prompt},
    },
};

/// Local file name of the generated image and name of the release asset.
pub const IMAGE_FILE_NAME: &str = "release_summary.png";

impl Summarizer {
    /// Generates an image for `summary`, writes it to the image directory
    /// and returns its bytes.
    pub async fn release_image(&self, summary: &str) -> Result<Vec<u8>> {
        let prompt = image_description_prompt(&self.persona.pick(), summary);

        let description =
            self.predict_required(prompt, "image description").await?;

        debug!("image description: {description}");

        let image = self
            .inference
            .generate_image(image_generation_prompt(
                &description,
                &self.persona.pick(),
            ))
            .await?
            .ok_or_else(|| {
                ReleaseSummaryError::missing_image("no image was returned")
            })?;

        let url = image.url.ok_or_else(|| {
            ReleaseSummaryError::missing_image("generated image has no url")
        })?;

        let content = self.inference.download_image(&url).await?;

        let path = self.image_dir.join(IMAGE_FILE_NAME);
        tokio::fs::write(&path, &content).await?;

        info!("saved release image to {}", path.display());

        Ok(content)
    }
}
