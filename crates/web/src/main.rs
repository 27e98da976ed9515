use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use connectors::{IdentityClient, NotificationClient};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::rounds::handlers::create_round,
        features::rounds::handlers::list_rounds,
        features::rounds::handlers::get_scorecard,
        features::rounds::handlers::update_round_status,
        features::rounds::handlers::attach_publication,
        features::rounds::handlers::invite_player,
        features::participants::handlers::attest,
        features::participants::handlers::confirm_scores,
        features::participants::handlers::remove_participant,
        features::scores::handlers::submit_scores,
        features::scores::handlers::delete_score,
    ),
    components(
        schemas(
            storage::dto::round::CreateRoundRequest,
            storage::dto::round::UpdateRoundStatusRequest,
            storage::dto::round::AttachPublicationRequest,
            storage::dto::round::RoundResponse,
            storage::dto::participant::InvitePlayerRequest,
            storage::dto::participant::AttestRequest,
            storage::dto::participant::TotalsResponse,
            storage::dto::participant::ParticipantResponse,
            storage::dto::score::ScoreEntry,
            storage::dto::score::SubmitScoresRequest,
            storage::dto::score::EntryStatus,
            storage::dto::score::EntryOutcome,
            storage::dto::score::SubmitScoresResponse,
            storage::dto::scorecard::HoleScoreResponse,
            storage::dto::scorecard::ParticipantCard,
            storage::dto::scorecard::ScorecardResponse,
            storage::models::Round,
            storage::models::RoundStatus,
            storage::models::RoundEnvironment,
            storage::models::Participant,
            storage::models::AttestationStatus,
            storage::models::AttestDecision,
            storage::models::ScoreEntryAuthority,
            storage::models::HoleScore,
        )
    ),
    tags(
        (name = "rounds", description = "Round registration, lifecycle and scorecard views"),
        (name = "participants", description = "Roster invitations and attestations"),
        (name = "scores", description = "Per-hole score entry"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Scorecard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let identity = IdentityClient::new(&config.identity_service_url);
    let notifier = NotificationClient::new(&config.notification_service_url);

    let state = AppState {
        db,
        identity: Arc::new(identity),
        notifier: Arc::new(notifier),
    };

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let openapi = ApiDoc::openapi();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let round_routes = features::rounds::routes(api_keys.clone());
    let participant_routes = features::participants::routes(api_keys.clone())
        .merge(features::scores::routes(api_keys));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest("/api/rounds", round_routes)
        .nest("/api/participants", participant_routes)
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
