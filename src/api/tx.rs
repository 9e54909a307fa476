use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, warn};

use super::models::{AppState, NewTxRequest, NewTxResponse, PendingResponse};

/// Submit a transaction into the pending buffer.
///
/// The ledger core stores whatever it is handed (empty names, zero and
/// negative amounts included); the one ingestion-boundary check is that the
/// amount is a finite number, since NaN and infinity have no JSON rendering
/// in the block preimage.
#[post("/tx/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    if !body.amount.is_finite() {
        warn!(
            "POST /tx/ - rejected: non-finite amount from sender={:?}",
            body.sender
        );
        return HttpResponse::BadRequest().body("amount must be a finite number");
    }

    let pending_size = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.add_transaction(body.sender.clone(), body.recipient.clone(), body.amount);
        ledger.pending_transactions().len()
    };
    debug!(
        "POST /tx/ - {} -> {} ({}) queued (pending={})",
        body.sender, body.recipient, body.amount, pending_size
    );

    HttpResponse::Ok().json(NewTxResponse { pending_size })
}

/// List the transactions waiting for the next mined block.
#[get("/tx/pending/")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let transactions = ledger.pending_transactions().to_vec();
    HttpResponse::Ok().json(PendingResponse {
        size: transactions.len(),
        transactions,
    })
}
