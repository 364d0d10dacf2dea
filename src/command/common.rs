//! Common functionality shared between summary commands
use log::*;
use std::rc::Rc;

use crate::{
    Result, cli,
    config::load_config,
    forge::{github::Github, traits::Forge},
    inference::openai::OpenAi,
    summary::Summarizer,
};

/// Connects to the forge and inference service and builds a summarizer
/// configured from the CLI and the repository configuration file.
pub async fn setup_summarizer(
    args: &cli::Args,
) -> Result<(Rc<dyn Forge>, Summarizer)> {
    let remote = args.get_remote()?;
    info!("summarizing {}/{}", remote.owner, remote.repo);

    let forge: Rc<dyn Forge> = Rc::new(Github::new(remote)?);
    let config = load_config(forge.as_ref()).await?;

    let inference = Rc::new(OpenAi::new(args.inference_config(&config)?)?);

    let summarizer = Summarizer::builder()
        .forge(Rc::clone(&forge))
        .inference(inference)
        .persona(args.persona_picker(&config))
        .options(args.summary_options(&config))
        .build()?;

    debug!("summary options: {:#?}", summarizer.options());

    Ok((forge, summarizer))
}
