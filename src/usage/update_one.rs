// :snippet-start: update-one-usage-example
use mongodb::{bson::doc, error::Result, Client};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Movie {
    title: String,
    runtime: i32,
    genres: Vec<String>,
}

/// Updates the runtime and genres of "Cool Runnings 2", inserting the movie
/// first so there is something to update.
pub async fn run(uri: &str) -> Result<()> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database("sample_mflix");
    let collection = database.collection::<Movie>("movies");

    collection
        .insert_one(Movie {
            title: "Cool Runnings 2".to_string(),
            runtime: 90,
            genres: vec![
                "Adventure".to_string(),
                "Family".to_string(),
                "Comedy".to_string(),
            ],
        })
        .await?;

    let query = doc! { "title": "Cool Runnings 2" };
    let update = doc! {
        "$set": { "runtime": 99 },
        "$addToSet": { "genres": "Sports" },
        "$currentDate": { "lastUpdated": true },
    };

    let result = collection.update_one(query, update).upsert(true).await?;
    println!("Modified document count: {}", result.modified_count);
    // Only contains a value when an upsert is performed.
    println!("Upserted id: {:?}", result.upserted_id);

    Ok(())
}
// :snippet-end:
