use criterion::{black_box, criterion_group, criterion_main, Criterion};
use openmeteo_frames::{
    time_axis, ApiResponse, Granularity, VariablesBlock, WeatherFrame,
    HOURLY_HISTORICAL_VARIABLES,
};

/// One year of hourly archive data in the shape Open-Meteo returns it.
fn archive_year_body() -> String {
    let rows = 365 * 24;
    let start = 1_704_067_200i64;
    let time: Vec<String> = (0..rows).map(|i| (start + i as i64 * 3600).to_string()).collect();
    let values: Vec<String> = (0..rows).map(|i| format!("{:.1}", (i % 50) as f64)).collect();
    let values = values.join(",");
    let series: Vec<String> = HOURLY_HISTORICAL_VARIABLES
        .iter()
        .map(|v| format!("\"{}\": [{}]", v, values))
        .collect();
    format!(
        "{{\"latitude\": 38.75, \"longitude\": -90.44, \"hourly\": {{\"time\": [{}], {}}}}}",
        time.join(","),
        series.join(",")
    )
}

fn bench_decode(c: &mut Criterion) {
    let body = archive_year_body();

    c.bench_function("time_axis_year_15min", |b| {
        b.iter(|| time_axis(black_box(0), black_box(365 * 86_400), black_box(900)))
    });

    c.bench_function("decode_archive_year", |b| {
        b.iter(|| {
            let mut response = ApiResponse::parse_first(black_box(&body)).unwrap();
            let meta = response.meta();
            let raw = response.take_block(Granularity::Hourly).unwrap();
            let block =
                VariablesBlock::from_raw(raw, HOURLY_HISTORICAL_VARIABLES, Granularity::Hourly)
                    .unwrap();
            WeatherFrame::from_block(
                &block,
                HOURLY_HISTORICAL_VARIABLES,
                &[("latitude", 38.748), ("longitude", -90.439)],
                meta,
                Granularity::Hourly,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
