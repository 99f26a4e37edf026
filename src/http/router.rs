use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::reviews::HashMapReviewStorage;
use crate::{credentials, gate, health, hoodmap, http::cors, places, reviews};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

type Storage = HashMapReviewStorage;

pub fn new(args: &Args, app_context: AppContext<Storage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck::<Storage>));
    let gate_routes = Router::new().route("/gender", post(gate::handlers::verify_gender));
    let credentials_routes = Router::new().route(
        "/verification-session",
        post(credentials::handlers::verification_session::<Storage>),
    );
    let places_routes = Router::new()
        .route("/", get(places::handlers::list::<Storage>))
        .route("/:place-id", get(places::handlers::get::<Storage>));
    let reviews_routes = Router::new()
        .route(
            "/:place-id",
            get(reviews::handlers::list::<Storage>).post(reviews::handlers::submit::<Storage>),
        )
        .route(
            "/:place-id/photo-check",
            post(reviews::handlers::photo_check::<Storage>),
        )
        .layer(DefaultBodyLimit::max(args.max_upload_bytes));
    let previews_routes =
        Router::new().route("/:review-id", get(reviews::handlers::preview::<Storage>));
    let hoodmap_routes = Router::new()
        .route("/pins", get(hoodmap::handlers::pins))
        .route("/stats", get(hoodmap::handlers::stats));

    Router::new()
        .nest("/health", health_routes)
        .nest("/gate", gate_routes)
        .nest("/credentials", credentials_routes)
        .nest("/places", places_routes)
        .nest("/reviews", reviews_routes)
        .nest("/previews", previews_routes)
        .nest("/hoodmap", hoodmap_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
