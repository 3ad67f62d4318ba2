use chrono::NaiveDate;
use openmeteo_frames::{LatLon, OpenMeteo, OpenMeteoError};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), OpenMeteoError> {
    env_logger::init();

    let client = OpenMeteo::new().await?;
    let history = client
        .historical()
        .location(LatLon(38.748, -90.439))
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
        .call()
        .await?;

    println!("{} hourly rows, columns {:?}", history.height(), history.column_names());
    history.write_parquet(Path::new("history_2024.parquet"))?;

    Ok(())
}
