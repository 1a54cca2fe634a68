use std::net::SocketAddr;
use lambda_http::{run, Error};
use tracing::info;
use bookstore::app::{build_router, build_state};
use bookstore::core::domain::{Configuration, ServeMode};
use bookstore::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env();
    setup_tracing(config.log_level.as_str());

    let state = build_state(config.clone()).await?;

    match config.serve_mode {
        ServeMode::Lambda => {
            info!(branch = %config.branch_id, "serving bookstore on lambda runtime");
            run(build_router::<lambda_http::Body>(state)).await
        }
        ServeMode::Local => {
            let addr: SocketAddr = config.bind_addr.parse()?;
            info!(branch = %config.branch_id, %addr, "serving bookstore");
            let app = build_router::<axum::body::Body>(state);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
    }
}
