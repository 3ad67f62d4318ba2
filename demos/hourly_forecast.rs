use openmeteo_frames::{LatLon, OpenMeteo, OpenMeteoError};
use std::env;

#[tokio::main]
async fn main() -> Result<(), OpenMeteoError> {
    // Set RUST_LOG=info to see cache hits, retries and response metadata.
    env_logger::init();
    configure_polars_display();

    let client = OpenMeteo::new().await?;
    let st_louis = LatLon(38.748, -90.439);

    let hourly = client.hourly().location(st_louis).call().await?;
    println!("{}", hourly.frame());

    let quarter_hours = client
        .minutely_15()
        .location(st_louis)
        .forecast_days(1)
        .call()
        .await?;
    println!("{}", quarter_hours.frame().head(Some(8)));

    let daily = client.daily().location(st_louis).call().await?;
    for code in daily.weather_codes()?.into_iter().flatten() {
        println!("{}", code.description());
    }

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
