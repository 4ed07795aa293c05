use crate::{routes::create_router, state::ApiState};

/// Bind `0.0.0.0:<port>` and serve until the process exits.
pub async fn run(state: ApiState, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("StudyLog API Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
