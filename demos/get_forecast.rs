use eltiempo::{ElTiempo, ElTiempoError};

#[tokio::main]
async fn main() -> Result<(), ElTiempoError> {
    let client = ElTiempo::new();
    let forecast = client.forecast().station("cordoba").call().await?;

    for day in &forecast {
        println!(
            "{:>10}  {:>3}° / {:>3}°  rain {:>4.1} mm ({:>3.0}%)  clouds {:>3.0}%  wind {:>2} km/h  sun {}-{}  uv {}",
            day.date.to_string(),
            day.max_temperature,
            day.min_temperature,
            day.precipitation,
            day.precipitation_probability * 100.0,
            day.cloud_percentage * 100.0,
            day.wind_speed,
            day.sunrise,
            day.sunset,
            day.ultraviolet_radiation,
        );
    }

    Ok(())
}
