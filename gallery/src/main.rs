#[tokio::main]
async fn main() {
    gallery::start_server().await;
}
