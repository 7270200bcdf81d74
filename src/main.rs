//! Skill Cards CLI
//!
//! Loads concept cards and exploration recommendations from the backend and
//! checks skill files for publishing problems.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skill_cards::config::BASE_URL_ENV;
use skill_cards::{
    Config, ConceptCardLoader, HttpConceptCardGateway, RecommendationContext,
    RecommendationsClient, Skill,
};
use std::path::{Path, PathBuf};

/// Skill concept card and recommendation tool
#[derive(Parser, Debug)]
#[command(name = "skill_cards")]
#[command(version, about, long_about = None)]
struct Args {
    /// Backend base URL (default: http://localhost:8181)
    #[arg(long, global = true, env = BASE_URL_ENV)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load concept cards. Each batch is a comma separated list of skill ids;
    /// batches are loaded in order through one cache.
    Cards {
        #[arg(required = true)]
        batches: Vec<String>,
    },
    /// Fetch explorations recommended after an exploration
    Recommend {
        exploration_id: String,
        /// Author-recommended exploration id (repeatable)
        #[arg(long = "author-recommended")]
        author_recommended: Vec<String>,
        /// Include system-generated recommendations
        #[arg(long, default_value_t = false)]
        system: bool,
        /// Request is made from the exploration editor preview
        #[arg(long, default_value_t = false)]
        editor: bool,
        #[arg(long)]
        collection_id: Option<String>,
        #[arg(long)]
        story_id: Option<String>,
        #[arg(long)]
        node_id: Option<String>,
    },
    /// Print validation issues for a skill JSON file
    ValidateSkill { path: PathBuf },
}

#[tokio::main]
async fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=skill_cards=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match args.base_url {
        Some(ref url) => Config::new(url.as_str()),
        None => Config::from_env(),
    };
    log::info!("Using backend: {}", config.base_url);

    if let Err(e) = run(args.command, config).await {
        log::error!("Application error: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(command: Command, config: Config) -> Result<()> {
    match command {
        Command::Cards { batches } => load_cards(config, &batches).await,
        Command::Recommend {
            exploration_id,
            author_recommended,
            system,
            editor,
            collection_id,
            story_id,
            node_id,
        } => {
            let context = RecommendationContext {
                collection_id,
                story_id,
                node_id,
                in_editor: editor,
            };
            let client = RecommendationsClient::new(config);
            let summaries = client
                .recommended_summaries(&exploration_id, &author_recommended, system, &context)
                .await
                .context("Failed to fetch recommendations")?;
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            Ok(())
        }
        Command::ValidateSkill { path } => validate_skill(&path),
    }
}

async fn load_cards(config: Config, batches: &[String]) -> Result<()> {
    let loader = ConceptCardLoader::new(HttpConceptCardGateway::new(config));
    for batch in batches {
        let skill_ids = parse_batch(batch);
        let cards = loader
            .load_concept_cards(&skill_ids)
            .await
            .with_context(|| format!("Failed to load concept cards for {batch}"))?;
        println!("{}", serde_json::to_string_pretty(&cards)?);
    }
    log::info!("Loaded {} distinct concept card(s)", loader.len().await);
    Ok(())
}

/// Split a comma separated batch into skill ids, dropping empty entries
fn parse_batch(batch: &str) -> Vec<String> {
    batch
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

fn validate_skill(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let dict: serde_json::Value =
        serde_json::from_str(&content).context("Skill file is not valid JSON")?;
    let skill = Skill::from_backend_dict(dict).context("Failed to parse skill")?;

    let mut issues = skill.validation_issues();
    if !Skill::has_valid_description(skill.description()) {
        issues.push(format!("Invalid skill description: {:?}", skill.description()));
    }

    if issues.is_empty() {
        println!("{}: no issues", path.display());
    } else {
        for issue in &issues {
            println!("{}: {}", path.display(), issue);
        }
    }
    Ok(())
}
