#[tokio::main]
async fn main() -> eyre::Result<()> {
    userhub_server::run().await
}
