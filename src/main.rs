use rusty_library_lending::{
    Config,
    adapters::{
        LoggingNotifier, SystemClock,
        memory::{BookStore, LibrarySeed, MemberStore},
    },
    api::{AppState, create_router},
    application::{lending::LendingDependencies, report::ReportDependencies},
    domain::{FeeResolver, PolicyResolver},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_library_lending=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: LISTEN_ADDR (default: 0.0.0.0:3000)");
            eprintln!("Optional: LIBRARY_SEED_FILE (JSON with books and members)");
            std::process::exit(1);
        }
    };

    // Initialize stores
    let (book_store, member_store) = match &config.seed_file {
        Some(path) => match LibrarySeed::from_file(path) {
            Ok(seed) => seed.into_stores(),
            Err(e) => {
                eprintln!("Seed error ({}): {:?}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::warn!("LIBRARY_SEED_FILE not set, starting with an empty library");
            (BookStore::new(), MemberStore::new())
        }
    };
    let book_store = Arc::new(book_store);
    let clock = Arc::new(SystemClock);

    let lending = LendingDependencies {
        book_store: book_store.clone(),
        member_store: Arc::new(member_store),
        notifier: Arc::new(LoggingNotifier::new()),
        clock: clock.clone(),
        policies: Arc::new(PolicyResolver::standard()),
        fees: Arc::new(FeeResolver::standard()),
    };
    let reports = ReportDependencies { book_store, clock };

    // Create application state and router
    let app_state = Arc::new(AppState::new(lending, reports));
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.listen_addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
