use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{
    AppState, ChainResponse, DifficultyResponse, MineResponse, ValidateResponse,
};

/// Get the full chain snapshot.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: ledger.len(),
        difficulty: ledger.difficulty(),
        chain: ledger.snapshot(),
    };
    HttpResponse::Ok().json(resp)
}

/// Validate the whole chain.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let verdict = ledger.validate();
    let resp = ValidateResponse {
        valid: verdict.is_ok(),
        length: ledger.len(),
        difficulty: ledger.difficulty(),
        fault: verdict.err().map(|f| f.to_string()),
    };
    HttpResponse::Ok().json(resp)
}

/// Mine the current pending buffer into a new block.
///
/// The ledger lock is held for the whole Proof-of-Work search: mining is a
/// blocking, single-writer operation and other requests wait their turn.
#[post("/mine/")]
pub async fn mine_block(state: web::Data<AppState>) -> impl Responder {
    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    let block = ledger.mine_pending();

    let resp = MineResponse {
        mined_index: block.index,
        hash: block.hash.clone(),
        nonce: block.nonce,
        difficulty: ledger.difficulty(),
    };
    info!(
        "MINER - sealed block #{} (hash={}, nonce={})",
        resp.mined_index, resp.hash, resp.nonce
    );
    HttpResponse::Ok().json(resp)
}

/// Get the fixed PoW difficulty.
#[get("/difficulty/")]
pub async fn get_difficulty(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(DifficultyResponse {
        difficulty: ledger.difficulty(),
    })
}
