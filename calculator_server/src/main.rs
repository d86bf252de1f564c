#[tokio::main]
async fn main() {
    // Delegate to the server framework entry point.
    calculator_server::run().await;
}
