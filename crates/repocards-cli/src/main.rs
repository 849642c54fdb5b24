use clap::Parser;
use repocards_core::{catalog, CardFetcher, Config, Exporter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "repocards")]
#[command(version, about = "Fetch display cards for the portfolio site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch cards for the whole catalog and emit JSON
    Fetch {
        /// Write to a file (.json or .md) instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Fetch and print a single card by catalog slug
    Show {
        /// Catalog slug (e.g., "helm")
        slug: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repocards=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let fetcher = CardFetcher::new(&config);

    match cli.command {
        Some(Commands::Fetch { output }) => {
            let descriptors = catalog::all();
            tracing::info!(
                "fetching {} cards for {}",
                descriptors.len(),
                catalog::SITE_DOMAIN
            );
            let cards = fetcher.fetch_repo_cards(&descriptors).await;

            match output {
                Some(path) => {
                    Exporter::export_to_file(&cards, &path)?;
                    println!("Wrote {} cards to {}", cards.len(), path.display());
                }
                None => println!("{}", Exporter::to_json(&cards)?),
            }
        }
        Some(Commands::Show { slug }) => {
            let descriptors = catalog::all();
            let Some(descriptor) = descriptors.iter().find(|d| d.slug == slug) else {
                anyhow::bail!("no catalog entry named '{}'", slug);
            };

            let cards = fetcher
                .fetch_repo_cards(std::slice::from_ref(descriptor))
                .await;
            println!("{}", Exporter::to_markdown(&cards));
        }
        None => {
            println!("No command specified. Try --help");
        }
    }

    Ok(())
}
