#[tokio::main]
async fn main() -> anyhow::Result<()> {
    floor_pricer::start(std::env::args()).await
}
