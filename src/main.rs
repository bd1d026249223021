use std::env;

use navette::engine::Engine;
use navette::fares::FareTable;
use navette::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let fare_path =
        env::var("FARE_TABLE_PATH").unwrap_or_else(|_| "data/prices.csv".to_string());

    let engine = Engine::new(FareTable::load(fare_path));

    serve(engine).await;
}
