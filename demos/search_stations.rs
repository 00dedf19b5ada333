use eltiempo::{ElTiempo, ElTiempoError};

#[tokio::main]
async fn main() -> Result<(), ElTiempoError> {
    let client = ElTiempo::new();
    let stations = client
        .search_stations()
        .query("cordoba")
        .limit(20)
        .call()
        .await?;

    println!("Found {} stations", stations.len());
    for station in &stations {
        println!("{} -> {}", station["id"], station["name"]);
    }

    Ok(())
}
