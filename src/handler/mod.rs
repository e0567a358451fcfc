use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::common::logging::{self, events};
use crate::structures::{HealthResponse, HEALTH_CONTRACT_VERSION};

/// Health check : journalise l'événement reçu puis renvoie l'objet de statut fixe.
pub fn health(event: &Value, request_id: &str) -> HealthResponse {
    info!(
        event = events::HEALTH_INVOKED,
        request_id = %request_id,
        contract_version = HEALTH_CONTRACT_VERSION,
        payload = %event,
        msg = "Health function called"
    );
    HealthResponse::running()
}

// Point d'entrée branché sur la boucle du runtime Lambda. Ne renvoie jamais d'erreur.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<HealthResponse, Error> {
    logging::init();
    let (payload, context) = event.into_parts();
    Ok(health(&payload, &context.request_id))
}
