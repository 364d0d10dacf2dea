//! CLI argument parsing and remote configuration.
use clap::{Parser, Subcommand};
use color_eyre::eyre::{ContextCompat, eyre};
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::rc::Rc;

use crate::{
    Result,
    config::Config,
    forge::config::RemoteConfig,
    inference::config::{DEFAULT_BASE_URL, InferenceConfig},
    summary::{
        SummaryOptions,
        persona::{FixedPersona, PersonaPicker, RandomPersona},
    },
};

/// Global CLI arguments for the forge, the inference service and summary
/// generation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "", global = true)]
    /// GitHub repository URL (https://github.com/owner/repo).
    pub github_repo: String,

    #[arg(long, env = "GITHUB_TOKEN", default_value = "", global = true)]
    /// GitHub personal access token.
    pub github_token: String,

    #[arg(long, env = "OPENAI_API_KEY", default_value = "", global = true)]
    /// Token for the OpenAI compatible inference service.
    pub openai_token: String,

    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    /// Base URL of the OpenAI compatible inference service.
    pub openai_base_url: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Write generated summaries back to the release or pull request.
    pub update: bool,

    #[arg(long, default_value_t = false, global = true)]
    /// Generate an illustration and attach it to the release.
    pub image: bool,

    #[arg(long, default_value_t = false, global = true)]
    /// Regenerate summaries that already exist.
    pub replace: bool,

    #[arg(long, value_delimiter = ',', global = true)]
    /// Comma separated globs of files to leave out of pull request summaries.
    pub ignored_files: Vec<String>,

    #[arg(long, value_delimiter = ',', global = true)]
    /// Comma separated globs restricting which files are summarized.
    pub src_files: Vec<String>,

    #[arg(long, default_value_t = false, global = true)]
    /// Post a comment with the summary of each changed file.
    pub create_file_comments: bool,

    #[arg(long, default_value_t = false, global = true)]
    /// Post pull request summaries as comments instead of editing the
    /// description.
    pub output_as_comment: bool,

    #[arg(long, global = true)]
    /// Always write as this persona instead of picking one at random.
    pub persona: Option<String>,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Summary subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize the release published for a tag.
    Release {
        #[arg(long)]
        /// Tag of the published release.
        tag: String,
    },

    /// Summarize a single pull request.
    PullRequest {
        #[arg(long)]
        /// Pull request number.
        number: u64,
    },
}

impl Args {
    /// Configure remote repository connection from CLI arguments.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        if self.github_repo.is_empty() {
            return Err(eyre!("must configure a github repo").into());
        }

        get_github_remote(&self.github_repo, &self.github_token)
    }

    /// Inference connection using the model settings from `config`.
    pub fn inference_config(&self, config: &Config) -> Result<InferenceConfig> {
        if self.openai_token.is_empty() {
            return Err(eyre!("must set openai token").into());
        }

        Ok(InferenceConfig {
            base_url: self.openai_base_url.clone(),
            token: SecretString::from(self.openai_token.clone()),
            settings: config.inference.clone(),
        })
    }

    /// Summary switches from the CLI. File globs given on the command line
    /// take precedence over the ones in `config`.
    pub fn summary_options(&self, config: &Config) -> SummaryOptions {
        let pick = |cli: &Vec<String>, file: &Vec<String>| {
            if cli.is_empty() {
                file.clone()
            } else {
                cli.clone()
            }
        };

        SummaryOptions {
            update: self.update,
            generate_image: self.image,
            replace: self.replace,
            ignored_files: pick(
                &self.ignored_files,
                &config.summary.ignored_files,
            ),
            src_files: pick(&self.src_files, &config.summary.src_files),
            create_file_comments: self.create_file_comments,
            output_as_comment: self.output_as_comment,
        }
    }

    pub fn persona_picker(&self, config: &Config) -> Rc<dyn PersonaPicker> {
        match &self.persona {
            Some(persona) => Rc::new(FixedPersona(persona.clone())),
            None => Rc::new(RandomPersona::new(config.summary.personas.clone())),
        }
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(eyre!(
            "only http and https schemes are supported for repo urls"
        )
        .into()),
    }
}

/// Configure GitHub remote with URL parsing and token resolution.
fn get_github_remote(
    github_repo: &str,
    github_token: &str,
) -> Result<RemoteConfig> {
    let parsed = GitUrl::parse(github_repo)?;

    validate_scheme(parsed.scheme)?;

    let mut token = github_token.to_string();

    if token.is_empty()
        && let Some(parsed_token) = parsed.token
    {
        token = parsed_token;
    }

    if token.is_empty() {
        return Err(eyre!("must set github token").into());
    }

    let host = parsed
        .host
        .ok_or(eyre!("unable to parse host from github repo"))?;

    let owner = parsed
        .owner
        .ok_or(eyre!("unable to parse owner from github repo"))?;

    let project_path = parsed
        .path
        .strip_prefix("/")
        .wrap_err("failed to process project path")?
        .to_string();

    let release_link_base_url = format!(
        "{}://{}/{}/{}/releases",
        parsed.scheme, host, owner, parsed.name
    );

    Ok(RemoteConfig {
        host,
        scheme: parsed.scheme.to_string(),
        owner,
        repo: parsed.name,
        path: project_path,
        token: SecretString::from(token),
        release_link_base_url,
    })
}
