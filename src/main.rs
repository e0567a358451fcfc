// Point d'entrée Lambda de la fonction charging-stations-health
// La boucle du runtime récupère un événement à la fois et répond avec l'objet de santé fixe
use lambda_runtime::{run, service_fn, Error};
use tracing::info;

use charging_stations_health::common::logging::{self, events};
use charging_stations_health::handler::function_handler;
use charging_stations_health::structures::HEALTH_CONTRACT_VERSION;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    info!(event = events::HANDLER_START, contract_version = HEALTH_CONTRACT_VERSION, msg = "Health handler starting");

    run(service_fn(function_handler)).await
}
