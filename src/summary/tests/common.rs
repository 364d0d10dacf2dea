//! Common test utilities for summary tests.

use std::{path::Path, rc::Rc};

use crate::{
    forge::{
        request::{PullRequest, Release, ReleaseAsset},
        traits::MockForge,
    },
    inference::traits::MockInference,
    summary::{
        SummaryOptions, Summarizer,
        markers::{PULL_REQUEST_MARKERS, RELEASE_MARKERS},
        persona::FixedPersona,
    },
    test_helpers::create_test_remote_config,
};

pub const TEST_TAG: &str = "v1.1";
pub const PREVIOUS_TAG: &str = "v1.0";
pub const TEST_PERSONA: &str = "Yoda";
pub const TEST_RELEASE_ID: u64 = 1;

pub const GENERATED_NOTES: &str = "## What's Changed
* Add X by @a in https://github.com/test/repo/pull/12
* unrelated line
* Fix Y by @b in https://github.com/test/repo/pull/15

**Full Changelog**: https://github.com/test/repo/compare/v1.0...v1.1";

/// Creates a summarizer over the given mocks with a fixed persona.
///
/// # Example
/// ```ignore
/// let mut mock_forge = MockForge::new();
/// mock_forge.expect_get_pull_request().returning(|n| Ok(pr(n, "")));
/// let summarizer = create_test_summarizer(mock_forge, MockInference::new(), SummaryOptions::default());
/// ```
pub fn create_test_summarizer(
    forge: MockForge,
    inference: MockInference,
    options: SummaryOptions,
) -> Summarizer {
    create_test_summarizer_in(forge, inference, options, Path::new("."))
}

/// Same as [`create_test_summarizer`] writing generated images to `dir`.
pub fn create_test_summarizer_in(
    forge: MockForge,
    inference: MockInference,
    options: SummaryOptions,
    dir: &Path,
) -> Summarizer {
    Summarizer::builder()
        .forge(Rc::new(forge))
        .inference(Rc::new(inference))
        .persona(Rc::new(FixedPersona(TEST_PERSONA.into())))
        .options(options)
        .image_dir(dir)
        .build()
        .unwrap()
}

pub fn test_release(body: &str) -> Release {
    Release {
        id: TEST_RELEASE_ID,
        tag: TEST_TAG.into(),
        body: body.into(),
        assets: vec![],
    }
}

pub fn test_release_with_assets(body: &str, names: &[(u64, &str)]) -> Release {
    Release {
        assets: names
            .iter()
            .map(|(id, name)| ReleaseAsset {
                id: *id,
                name: name.to_string(),
            })
            .collect(),
        ..test_release(body)
    }
}

/// A pull request whose description already carries a summary.
pub fn summarized_pr(number: u64, summary: &str) -> PullRequest {
    PullRequest {
        number,
        title: format!("PR {number}"),
        body: PULL_REQUEST_MARKERS.wrap("description", summary),
    }
}

/// Inference mock accepting prompts up to `max` characters.
pub fn inference_with_limit(max: usize) -> MockInference {
    let mut inference = MockInference::new();
    inference.expect_max_input_length().return_const(max);
    inference
}

/// Forge mock serving the standard generated notes, the previous release
/// and already summarized pull requests 12 and 15.
pub fn forge_with_generated_notes() -> MockForge {
    forge_with_previous_release(
        &RELEASE_MARKERS.wrap("old notes", "* old stuff"),
    )
}

/// Same as [`forge_with_generated_notes`] with the previous release body set
/// to `previous_body`.
pub fn forge_with_previous_release(previous_body: &str) -> MockForge {
    let mut forge = MockForge::new();
    let previous_body = previous_body.to_string();

    forge
        .expect_remote_config()
        .returning(create_test_remote_config);

    forge
        .expect_generate_release_notes()
        .times(1)
        .withf(|tag| tag == TEST_TAG)
        .returning(|_| Ok(GENERATED_NOTES.into()));

    forge
        .expect_get_release_by_tag()
        .times(1)
        .withf(|tag| tag == PREVIOUS_TAG)
        .returning(move |tag| {
            Ok(Release {
                id: 0,
                tag: tag.to_string(),
                body: previous_body.clone(),
                assets: vec![],
            })
        });

    forge
        .expect_get_pull_request()
        .times(2)
        .returning(|n| Ok(summarized_pr(n, &format!("* summary of {n}"))));

    forge
}
