use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, StatsResponse};

#[get("/stats/")]
pub async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let height = ledger.len();

    let last_interval_secs = if height >= 2 {
        let newer = &ledger.chain[height - 1];
        let older = &ledger.chain[height - 2];
        Some((newer.timestamp - older.timestamp).max(0))
    } else {
        None
    };

    HttpResponse::Ok().json(StatsResponse {
        height,
        difficulty: ledger.difficulty(),
        pending_size: ledger.pending_transactions().len(),
        last_interval_secs,
    })
}
