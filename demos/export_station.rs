//! Exports today's observations of one station to `output.csv` and `output.xlsx`.
//!
//! Reads the cleaning table from `in.txt` in the working directory if it exists.

use swob::{today_utc, SwobClient, SwobError};

#[tokio::main]
async fn main() -> Result<(), SwobError> {
    let client = SwobClient::new()?;
    let date = today_utc();

    let stations = client.stations(date).await;
    println!("{} stations reported on {}", stations.len(), date);

    let collection = client
        .station_data()
        .station("VSL")
        .date(date)
        .call()
        .await;
    println!(
        "Collected {} snapshots with {} fields ({} documents skipped)",
        collection.len(),
        collection.titles.len(),
        collection.skipped.len()
    );

    if collection.write_csv("output.csv") {
        println!("Wrote output.csv");
    }
    if collection.write_spreadsheet("output.xlsx") {
        println!("Wrote output.xlsx");
    }

    Ok(())
}
