#[tokio::main]
async fn main() {
    fieldbook_backend::run().await;
}
