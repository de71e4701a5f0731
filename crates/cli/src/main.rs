#![deny(warnings)]

use anyhow::Context;
use clap::Parser;
use file_translator_core::catalog::PLACEHOLDER_LANGUAGE;
use file_translator_core::config::{
    resolve_string_with_default, AppConfig, Endpoint, StdEnv, DEFAULT_ENDPOINT,
    ENV_TRANSLATE_ENDPOINT,
};
use file_translator_core::controller::{
    TranslationController, ARTICLE_REGION, RESULTS_REGION, SECTION_REGION,
};
use file_translator_core::surface::{ContentRenderer, Surface};
use file_translator_core::translate::{FileUpload, HttpTranslationService};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "file-translator")]
#[command(about = "Upload a file to the translation service and print the result")]
struct Args {
    /// File to upload for translation
    #[arg(long)]
    file: Option<PathBuf>,

    /// Target language, as named in the service's catalog
    #[arg(long)]
    target_lang: Option<String>,

    #[arg(long, env = ENV_TRANSLATE_ENDPOINT)]
    endpoint: Option<String>,

    /// Print the supported-language catalog and exit
    #[arg(long, default_value_t = false)]
    list_languages: bool,

    /// Show the selected file's info before submitting
    #[arg(long, default_value_t = false)]
    show_info: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let env = StdEnv;
    let endpoint = Endpoint::new(resolve_string_with_default(
        args.endpoint.clone(),
        ENV_TRANSLATE_ENDPOINT,
        &env,
        DEFAULT_ENDPOINT,
    ))?;
    let cfg = AppConfig { endpoint };

    tracing::info!(endpoint = %cfg.endpoint.as_str(), "config loaded");

    run(args, cfg).await
}

async fn run(args: Args, cfg: AppConfig) -> anyhow::Result<()> {
    let service = HttpTranslationService::new(&cfg.endpoint);
    let surface = Surface::with_regions(&[SECTION_REGION, ARTICLE_REGION, RESULTS_REGION]);
    let renderer = ContentRenderer::new(surface);
    let mut controller = TranslationController::new(service, renderer);

    controller.load_languages().await;

    if args.list_languages {
        for lang in controller.language_options() {
            if lang != PLACEHOLDER_LANGUAGE {
                println!("{lang}");
            }
        }
        return Ok(());
    }

    let path = args
        .file
        .as_deref()
        .context("--file is required unless --list-languages is given")?;
    controller.select_file(Some(read_upload(path)?));
    controller.select_language(args.target_lang.as_deref().unwrap_or(PLACEHOLDER_LANGUAGE));

    if !controller.submit_enabled() {
        let available = controller
            .language_options()
            .iter()
            .filter(|l| l.as_str() != PLACEHOLDER_LANGUAGE)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::bail!(
            "not ready to submit: pass --target-lang with one of the supported languages ({available})"
        );
    }

    if args.show_info {
        controller.describe_selection();
    }

    controller.submit().await;

    print!("{}", controller.renderer().surface());
    Ok(())
}

fn read_upload(path: &Path) -> anyhow::Result<FileUpload> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("could not read file: {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_owned());
    Ok(FileUpload::new(name, bytes))
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
