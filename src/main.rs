use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use std::env;

use pow_ledger::api::{self, AppState};
use pow_ledger::ledger::DEFAULT_DIFFICULTY;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);
    let difficulty: u32 = env::var("DIFFICULTY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DIFFICULTY);

    println!("⛓️ Starting ledger API at http://{host}:{port} (difficulty {difficulty})");

    let state = web::Data::new(
        AppState::new(difficulty).map_err(|e| std::io::Error::other(e.to_string()))?,
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
