//! Command line arguments and the render pipeline behind them.

use crate::error::{CliError, CliResult};
use clap::{Parser, ValueEnum};
use dunning_common::FailedPaymentData;
use dunning_config::{Config, ConfigLoader};
use dunning_i18n::Language;
use dunning_mail::{BodyRenderer, FailedPaymentEmail, HtmlRenderer, JsonRenderer, PlainTextRenderer};
use std::path::PathBuf;
use tracing::{debug, info};

/// Output format of the rendered body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML document.
    Html,
    /// Plain text.
    Text,
    /// The paragraph block model as JSON.
    Json,
}

impl OutputFormat {
    /// Renderer producing this format.
    pub fn renderer(self) -> &'static dyn BodyRenderer {
        match self {
            Self::Html => &HtmlRenderer,
            Self::Text => &PlainTextRenderer,
            Self::Json => &JsonRenderer,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "dunning", author, version, about, long_about = None)]
pub struct Cli {
    /// Payment record to render, as JSON
    #[arg(short, long)]
    pub data: PathBuf,

    /// Language code (en, ru, de); overrides the configured language
    #[arg(short, long)]
    pub language: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Log level; overrides the configured level
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Loader for `--config`, falling back to `DUNNING_CONFIG_PATH`.
    pub fn config_loader(&self) -> ConfigLoader {
        self.config
            .as_ref()
            .map_or_else(ConfigLoader::from_env, ConfigLoader::new)
    }

    /// Picks the command line language over the configured one.
    pub fn resolve_language(&self, config: &Config) -> CliResult<Language> {
        if let Some(code) = &self.language {
            return Ok(Language::from_code(code)?);
        }
        config.language()?.ok_or(CliError::MissingLanguage)
    }
}

/// Reads the payment record and renders its email body.
pub fn render(cli: &Cli, config: &Config) -> CliResult<String> {
    let language = cli.resolve_language(config)?;
    let data = FailedPaymentData::from_json_file(&cli.data)?;
    debug!(path = %cli.data.display(), items = data.items.len(), "Payment record loaded");

    let email = FailedPaymentEmail::new(&data, language)?.with_renewal_url(&config.mail.renewal_url)?;
    let renderer = cli.format.renderer();
    let output = renderer.render(&email.build_body())?;

    info!(
        language = %language,
        format = renderer.name(),
        bytes = output.len(),
        "Rendered failed payment email"
    );
    Ok(output)
}
