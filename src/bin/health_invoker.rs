// Invoque une fois la fonction de santé déployée et sort en erreur si la réponse
// ne correspond pas à {"code": 200, "status": "running"}
use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;

use charging_stations_health::common::logging;
use charging_stations_health::invoker::cli::MISSING_ACCOUNT;
use charging_stations_health::invoker::{run_health_check, Args, AwsLambdaInvoker};
use charging_stations_health::structures::InvokerError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();

    // Les erreurs d'usage s'arrêtent ici, avant toute création du client AWS
    let arn = match args.function_arn() {
        Ok(arn) => arn,
        Err(InvokerError::Usage(msg)) => {
            let kind = if msg == MISSING_ACCOUNT {
                ErrorKind::MissingRequiredArgument
            } else {
                ErrorKind::ValueValidation
            };
            Args::command().error(kind, msg).exit()
        }
        Err(e) => return Err(e.into()),
    };

    let run_id = logging::short_uuid();
    let invoker = AwsLambdaInvoker::new(arn.region()).await;
    let health = run_health_check(&invoker, &arn, &args.payload, &run_id).await?;

    println!("{}", serde_json::to_string(&health)?);
    Ok(())
}
