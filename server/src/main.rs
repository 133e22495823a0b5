use htmx_demo::{logging, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let config = Config::from_env()?;
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");
    htmx_demo::run(listener).await?;
    Ok(())
}
