use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use clap::Parser;
use color_eyre::Result;
use rust_embed::RustEmbed;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::store::DataStore;

mod config;
mod controller;
mod error;
mod store;

// Setup the command line interface with clap.
#[derive(Parser, Debug)]
#[clap(name = "kernelboard", about = "A dashboard for kernel build and test results!")]
struct Opt {
    /// set the log level
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    /// set the listen addr
    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    /// set the listen port
    #[clap(short = 'p', long = "port", default_value = "8080")]
    port: u16,

    /// set the config file to use
    #[clap(short = 'c', long = "config", default_value = "kernelboard.yml")]
    config: PathBuf,
}

pub(crate) struct AppState {
    pub store: DataStore,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        AppState {
            store: DataStore::new(&config.data_dir),
            config,
        }
    }
}

#[derive(RustEmbed)]
#[folder = "../dist/"]
struct DistAsset;

pub struct StaticFile<T>(pub T);

impl<T> IntoResponse for StaticFile<T>
where
    T: Into<String>,
{
    fn into_response(self) -> Response {
        let path = self.0.into();

        match DistAsset::get(path.as_str()) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                ([(header::CONTENT_TYPE, mime.as_ref().to_owned())], content.data).into_response()
            }
            None => (StatusCode::NOT_FOUND, "404").into_response(),
        }
    }
}

async fn static_handler(uri: Uri) -> impl IntoResponse {
    let mut path = uri.path().trim_start_matches('/').to_string();

    // Dashboard routes such as /tree/<id> are resolved by the frontend router.
    if path.is_empty() || (DistAsset::get(path.as_str()).is_none() && !path.contains('.')) {
        path = "index.html".to_string();
    }
    info!("Request for {}", path);

    StaticFile(path)
}

pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/config", get(controller::get_config))
        .route("/api/trees", get(controller::get_trees))
        .route("/api/tree/:tree_id/items", get(controller::get_tree_items))
        .route("/api/build/:build_id", get(controller::get_build))
        .route(
            "/api/build/:build_id/status-count",
            get(controller::get_build_status_count),
        )
        .fallback(static_handler)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let opt = Opt::parse();

    // Setup logging & RUST_LOG from args
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level))
    }
    // enable console logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::load(&opt.config)?;
    info!(data_dir = ?config.data_dir, title = %config.title, "Loaded configuration");

    let app = router(Arc::new(AppState::new(config)));

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V6(Ipv6Addr::LOCALHOST)),
        opt.port,
    ));

    log::info!("listening on http://{}", sock_addr);

    axum_server::bind(sock_addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
