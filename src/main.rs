use anyhow::Result;
use clap::{ArgAction, Parser};
use embedlink_rs::{EmbedOutcome, ProviderKind, normalize, resolve};
use env_logger::Env;
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Recognize third-party media URLs and print their canonical embed form"
)]
struct Cli {
    /// URLs (or URL-ish strings) to resolve
    #[arg(required = true)]
    urls: Vec<String>,

    /// Hostname of the page that will embed the result (required by Twitch)
    #[arg(long, value_name = "HOST", default_value = "localhost")]
    parent: String,

    /// Emit one JSON object per input instead of plain text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Print only the classified provider for each input
    #[arg(long, action = ArgAction::SetTrue)]
    provider_only: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a str,
    provider: Option<&'static str>,
    outcome: &'static str,
    embed_url: Option<&'a str>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or("RUST_LOG", "info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let mut all_embedded = true;

    for input in &cli.urls {
        let provider =
            normalize::normalize(input).and_then(|url| ProviderKind::classify(&url));
        if let Some(kind) = provider {
            info!("Selected provider: {}", kind.name());
        }

        if cli.provider_only {
            println!("{}", provider.map(ProviderKind::name).unwrap_or("unrecognized"));
            continue;
        }

        let outcome = resolve(input, &cli.parent);
        debug!("{input} -> {outcome:?}");
        if !matches!(outcome, EmbedOutcome::Embed(_)) {
            all_embedded = false;
        }

        if cli.json {
            let (label, embed_url) = match &outcome {
                EmbedOutcome::Embed(url) => ("embed", Some(url.as_str())),
                EmbedOutcome::RecognizedNoMatch => ("recognized_no_match", None),
                EmbedOutcome::NotEmbeddable => ("not_embeddable", None),
            };
            let report = Report {
                input: input.as_str(),
                provider: provider.map(ProviderKind::name),
                outcome: label,
                embed_url,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            // The two failure sentinels must stay distinguishable on stdout.
            match &outcome {
                EmbedOutcome::Embed(url) => println!("{url}"),
                EmbedOutcome::RecognizedNoMatch => println!("<no-embed>"),
                EmbedOutcome::NotEmbeddable => println!("<not-embeddable>"),
            }
        }
    }

    if !cli.provider_only && !all_embedded {
        std::process::exit(1);
    }
    Ok(())
}
