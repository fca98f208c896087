use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::api::{create_router, AppState};
use storefront::catalog::Catalog;
use storefront::client::StorefrontClient;
use storefront::config::ServerConfig;
use storefront::render;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Shopping cart demo: storefront server and terminal client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the storefront server
    Serve {
        /// Bind address (overrides STOREFRONT_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP API (overrides STOREFRONT_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// JSON product catalog (overrides STOREFRONT_CATALOG)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Show the landing page
    Home,
    /// Show the product listing
    Products,
    /// Show or change the shopping cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add one of a catalog product
    Add { name: String },
    /// Take one off an item, dropping it at zero
    Remove { name: String },
    /// Drop an item whatever its quantity
    Delete { name: String },
}

/// Install the global subscriber; `use_stderr` keeps log lines out of rendered output.
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "storefront=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // `home`, `products` and `cart` pipe their tables through stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::demo(),
    };

    let app = create_router(AppState::new(catalog));

    let addr = config.bind_addr();
    tracing::info!("Starting storefront server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Storefront listening on http://{}/api/v1", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Client commands print views on stdout, so logs go to stderr
    let use_stderr = matches!(
        cli.command,
        Some(Commands::Home | Commands::Products | Commands::Cart { .. })
    );
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            catalog,
        }) => {
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if catalog.is_some() {
                config.catalog_path = catalog;
            }
            serve(config).await?;
        }
        Some(Commands::Home) => {
            let client = StorefrontClient::from_env();
            let landing = client.landing().await?;
            print!("{}", render::render_landing(&landing));
        }
        Some(Commands::Products) => {
            let client = StorefrontClient::from_env();
            let entries = client.list_products().await?;
            print!("{}", render::render_listing(&entries));
        }
        Some(Commands::Cart { action }) => {
            let client = StorefrontClient::from_env();
            let view = match action.unwrap_or(CartAction::Show) {
                CartAction::Show => client.get_cart().await?,
                CartAction::Add { name } => client.add_product(&name).await?,
                CartAction::Remove { name } => client.remove_item(&name).await?,
                CartAction::Delete { name } => client.delete_item(&name).await?,
            };
            print!("{}", render::render_cart(&view));
        }
        None => {
            // Default: start server
            serve(ServerConfig::from_env()).await?;
        }
    }

    Ok(())
}
