#[tokio::main]
async fn main() -> anyhow::Result<()> {
    faqchat_server::start().await
}
