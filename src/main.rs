#[tokio::main]
async fn main() {
    if let Err(e) = kindred::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
