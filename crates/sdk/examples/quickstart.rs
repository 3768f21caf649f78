use nestre::{Client, CognitoLoginRequest, ContentType};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=nestre=debug shows every request
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Reads NESTRE_API_URL and friends, a .env file works too
    let client = Client::from_env()?;

    match client.ping().await {
        Ok(_) => println!("✅ API reachable at {}", client.base_url()),
        Err(e) => println!("❌ Ping failed: {}", e),
    }

    // Lookups need no authentication
    let genders = client.lookup().genders().await?;
    println!("Genders: {:?}", genders);

    if !client.is_authenticated() {
        let username = std::env::var("NESTRE_USERNAME")?;
        let password = std::env::var("NESTRE_PASSWORD")?;
        client.login_with_cognito(&CognitoLoginRequest::new(username, password)).await?;
        println!("✅ Logged in");
    }

    let user_id = std::env::var("NESTRE_USER_ID")?;

    match client.workout().daily_workout(&user_id).await {
        Ok(workout) => println!("✅ Daily workout: {:?}", workout),
        Err(e) => println!("❌ Failed to get daily workout: {}", e),
    }

    match client.content().recommendations(&user_id, ContentType::Meditation, 3).await {
        Ok(recommendations) => println!("✅ Meditations: {:?}", recommendations),
        Err(e) => println!("❌ Failed to get recommendations: {}", e),
    }

    Ok(())
}
