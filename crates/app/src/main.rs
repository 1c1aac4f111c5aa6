use case_search_core::{
    extract_citations, CharacterNgramEmbedder, OpenAiCompletions, QdrantSearchClient,
    ResearchCoordinator, ResearchQuery, ResearchReport, SelectionOptions,
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "case-search", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Qdrant base URL
    #[arg(long, default_value = "http://localhost:6333")]
    qdrant_url: String,

    /// Qdrant collection holding the prebuilt case-law index
    #[arg(long, default_value = "case_passages")]
    qdrant_collection: String,

    /// API key for the qdrant deployment, if it requires one
    #[arg(long, env = "QDRANT_API_KEY")]
    qdrant_api_key: Option<String>,

    /// OpenAI-compatible completions endpoint
    #[arg(long, default_value = "https://api.openai.com")]
    openai_url: String,

    /// API key for the generation backend
    #[arg(long, env = "OPENAI_API_KEY", default_value = "")]
    openai_api_key: String,

    /// Completion model name
    #[arg(long, default_value = "gpt-3.5-turbo-instruct")]
    model: String,

    /// Maximum characters kept per candidate passage
    #[arg(long, default_value = "2500")]
    truncate_chars: usize,

    /// Raw results requested from the search backend before dedup
    #[arg(long, default_value = "15")]
    over_fetch: usize,

    /// Maximum number of unique candidates retained
    #[arg(long, default_value = "5")]
    cap: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Retrieve and print the selected candidates; no generation calls.
    Search {
        /// Legal research question
        #[arg(long)]
        query: String,
    },
    /// Brief every matching case: name, facts, judgment, analysis,
    /// significance, related laws.
    Analyze {
        /// Legal research question
        #[arg(long)]
        query: String,
    },
    /// Synthesize one combined answer from all matching cases.
    Summarize {
        /// Legal research question
        #[arg(long)]
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let selection = SelectionOptions {
        truncate_chars: cli.truncate_chars,
        over_fetch: cli.over_fetch,
        cap: cli.cap,
    };

    let mut search = QdrantSearchClient::new(
        &cli.qdrant_url,
        &cli.qdrant_collection,
        CharacterNgramEmbedder::default(),
    );
    if let Some(api_key) = &cli.qdrant_api_key {
        search = search.with_api_key(api_key);
    }

    let generator =
        OpenAiCompletions::new(&cli.openai_url, &cli.openai_api_key).with_model(&cli.model);

    let coordinator = ResearchCoordinator::new(search, generator);
    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        "case-search boot"
    );

    match cli.command {
        Command::Search { query } => {
            let research_query = ResearchQuery {
                text: query,
                selection,
            };
            let candidates = coordinator
                .retrieve(&research_query)
                .await
                .map_err(|error| anyhow::anyhow!(error.to_string()))?;

            println!("query: {}", research_query.text);
            if candidates.is_empty() {
                println!("no matching cases found");
            }

            for candidate in candidates.iter() {
                println!(
                    "[{}] match={:.2}% chars={}",
                    candidate.index,
                    candidate.match_percent,
                    candidate.text.chars().count()
                );
                println!("{}", candidate.text);
                let citations = extract_citations(&candidate.text);
                if !citations.is_empty() {
                    println!("  citations: {}", citations.join("; "));
                }
            }
        }
        Command::Analyze { query } => {
            let research_query = ResearchQuery {
                text: query,
                selection,
            };
            let report = coordinator
                .analyze(&research_query)
                .await
                .map_err(|error| anyhow::anyhow!(error.to_string()))?;

            if let ResearchReport::CaseByCase {
                query,
                generated_at,
                briefs,
            } = report
            {
                println!("query: {query}");
                println!("generated_at: {}", generated_at.to_rfc3339());

                if briefs.is_empty() {
                    println!("no matching cases found");
                }

                for brief in briefs {
                    println!(
                        "== Match {} ({:.2}%)",
                        brief.candidate.index, brief.candidate.match_percent
                    );
                    for section in brief.sections {
                        println!("{}: {}", section.kind.label(), section.text);
                    }
                    if !brief.citations.is_empty() {
                        println!("Cited: {}", brief.citations.join("; "));
                    }
                }
            }
        }
        Command::Summarize { query } => {
            let research_query = ResearchQuery {
                text: query,
                selection,
            };
            let report = coordinator
                .synthesize(&research_query)
                .await
                .map_err(|error| anyhow::anyhow!(error.to_string()))?;

            if let ResearchReport::Summary {
                query,
                generated_at,
                answer,
            } = report
            {
                println!("query: {query}");
                println!("generated_at: {}", generated_at.to_rfc3339());
                println!("{answer}");
            }
        }
    }

    Ok(())
}
