//! Release summaries built from the summaries of every pull request merged
//! into the release.
use log::*;

use crate::{
    Result,
    forge::request::{Release, UpdateReleaseRequest, UploadAssetRequest},
    summary::{
        Summarizer,
        image::IMAGE_FILE_NAME,
        markers::{RELEASE_MARKERS, Region},
        prompt::{
            RELEASE_TOO_BIG, previous_release_context, previous_tag,
            pull_request_block, pull_request_references, release_prompt,
        },
    },
};

impl Summarizer {
    /// Summary of a release.
    ///
    /// An existing marked region in the release body is returned without any
    /// API call unless replacement was requested. A prompt over the inference
    /// limit yields [`RELEASE_TOO_BIG`] instead of a summary.
    pub async fn release_summary(&self, release: &Release) -> Result<String> {
        let region =
            RELEASE_MARKERS.resolve(&release.body, self.options.replace);

        let base = match region {
            Region::Existing(summary) => {
                info!("release {} already summarized", release.tag);
                return Ok(summary.trim().to_string());
            }
            Region::Base(base) => base,
        };

        let notes = self.forge.generate_release_notes(&release.tag).await?;

        let previous_context = self.previous_release_context(&notes).await?;

        let mut blocks = vec![];

        for reference in pull_request_references(&notes) {
            info!("resolving summary for pull request #{}", reference.number);
            let summary =
                self.pull_request_summary(reference.number, false).await?;
            blocks.push(pull_request_block(&reference, &summary));
        }

        let prompt = release_prompt(
            &self.persona.pick(),
            &blocks,
            previous_context.as_deref(),
        );

        if self.exceeds_input_limit(&prompt) {
            warn!(
                "release {} prompt exceeds {} characters",
                release.tag,
                self.inference.max_input_length()
            );
            return Ok(RELEASE_TOO_BIG.to_string());
        }

        let mut summary =
            self.predict_required(prompt, "release summary").await?;

        let mut image = None;

        if self.options.generate_image {
            image = Some(self.release_image(&summary).await?);

            // the asset only exists once uploaded
            if self.options.update {
                let url = self
                    .forge
                    .remote_config()
                    .asset_download_url(&release.tag, IMAGE_FILE_NAME);
                summary = format!("{summary}\n\n![{}]({url})", release.tag);
            } else {
                warn!(
                    "image for {} saved locally only: not linked without update",
                    release.tag
                );
            }
        }

        if self.options.update {
            self.persist_release_summary(release, &base, &summary, image)
                .await?;
        }

        Ok(summary)
    }

    /// Summary of the release preceding the one described by `notes`, as
    /// prompt context. `None` when the notes carry no previous tag or that
    /// release has no notes.
    async fn previous_release_context(
        &self,
        notes: &str,
    ) -> Result<Option<String>> {
        let Some(tag) = previous_tag(notes) else {
            debug!("no previous release found in generated notes");
            return Ok(None);
        };

        info!("using release {tag} as context");

        let previous = self.forge.get_release_by_tag(&tag).await?;

        let summary = RELEASE_MARKERS
            .extract(&previous.body)
            .unwrap_or(previous.body.as_str())
            .trim();

        if summary.is_empty() {
            return Ok(None);
        }

        Ok(Some(previous_release_context(summary)))
    }

    async fn persist_release_summary(
        &self,
        release: &Release,
        base: &str,
        summary: &str,
        image: Option<Vec<u8>>,
    ) -> Result<()> {
        let stale = release.assets.iter().filter(|a| a.name == IMAGE_FILE_NAME);

        for asset in stale {
            info!("removing previous {} from {}", asset.name, release.tag);
            self.forge.delete_asset(asset.id).await?;
        }

        if let Some(content) = image {
            self.forge
                .upload_asset(UploadAssetRequest {
                    release_id: release.id,
                    name: IMAGE_FILE_NAME.to_string(),
                    content,
                })
                .await?;
        }

        self.forge
            .update_release(UpdateReleaseRequest {
                release_id: release.id,
                body: RELEASE_MARKERS.wrap(base, summary),
            })
            .await
    }
}
