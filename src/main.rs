use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use seoforge::config::Config;
use seoforge::content::{ArticleDraft, OpenAiProducer};
use seoforge::pipeline::generate_post;
use seoforge::seo::SeoAnalyzer;
use seoforge::util::{is_valid_url, split_keywords};

/// Get the config directory path (~/.config/seoforge/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("seoforge"))
}

#[derive(Parser, Debug)]
#[command(name = "seoforge", about = "Generate SEO-scored blog posts from RSS feeds")]
struct Args {
    /// Config file (default: ~/.config/seoforge/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a string is a usable feed URL
    CheckUrl { url: String },

    /// Fetch a feed and print its entries as JSON
    Entries {
        /// Feed URL or name from [feeds]
        feed: String,
    },

    /// List feeds configured in [feeds]
    Feeds,

    /// Score an article draft (JSON file) and print the metrics
    Analyze {
        file: PathBuf,
        /// Comma-separated keywords (default: default_keywords from config)
        #[arg(long)]
        keywords: Option<String>,
    },

    /// Generate a post from one feed entry
    Generate {
        /// Feed URL or name from [feeds]
        feed: String,
        /// Comma-separated keywords (default: default_keywords from config)
        #[arg(long)]
        keywords: Option<String>,
        /// Index of the entry to rewrite
        #[arg(long, default_value_t = 0)]
        entry: usize,
        /// Skip header image generation
        #[arg(long)]
        no_image: bool,
    },
}

fn resolve_keywords(arg: Option<&str>, config: &Config) -> Vec<String> {
    match arg {
        Some(list) => split_keywords(list),
        None => config.default_keywords.clone(),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let client = reqwest::Client::new();

    match args.command {
        Command::CheckUrl { url } => {
            if is_valid_url(&url) {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
        Command::Entries { feed } => {
            let source = config.feed_source(client)?;
            let entries = source
                .parse_feed(source.resolve(&feed))
                .await
                .with_context(|| format!("Error parsing feed '{}'", feed))?;
            print_json(&entries)?;
        }
        Command::Feeds => {
            let source = config.feed_source(client)?;
            let feeds = source.list_feeds();
            if feeds.is_empty() {
                eprintln!("No feeds configured. Add a [feeds] table to {}", config_path.display());
            }
            for (name, url) in feeds {
                println!("{}\t{}", name, url);
            }
        }
        Command::Analyze { file, keywords } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read draft file: {}", file.display()))?;
            let draft: ArticleDraft = serde_json::from_str(&raw)
                .with_context(|| format!("Draft file is not an article JSON object: {}", file.display()))?;
            let keywords = resolve_keywords(keywords.as_deref(), &config);

            let analyzer = SeoAnalyzer::new(config.seo.clone());
            let metrics = analyzer.analyze_content(&draft, &keywords)?;
            print_json(&metrics)?;
        }
        Command::Generate {
            feed,
            keywords,
            entry,
            no_image,
        } => {
            let keywords = resolve_keywords(keywords.as_deref(), &config);
            if keywords.is_empty() {
                anyhow::bail!("No keywords given: pass --keywords or set default_keywords");
            }

            let source = config.feed_source(client.clone())?;
            let entries = source
                .parse_feed(source.resolve(&feed))
                .await
                .with_context(|| format!("Error parsing feed '{}'", feed))?;
            let selected = entries.get(entry).with_context(|| {
                format!("Feed has {} entries, no entry at index {}", entries.len(), entry)
            })?;

            let producer = OpenAiProducer::new(client, config.openai.clone());
            let analyzer = SeoAnalyzer::new(config.seo.clone());

            let post = generate_post(&producer, &analyzer, selected, &keywords, !no_image)
                .await
                .context("Post generation failed")?;
            print_json(&post)?;
        }
    }

    Ok(())
}
