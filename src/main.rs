#[rocket::main]
async fn main() {
    // Load .env files
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    if let Err(e) = profile_dashboard::rocket().launch().await {
        log::error!("Whoops! Rocket didn't launch: {}", e);
        // We drop the error to get a Rocket-formatted panic.
        drop(e);
    };
}
