// :snippet-start: find-one-usage-example
use mongodb::{bson::doc, error::Result, Client};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Movie {
    title: String,
    imdb: Imdb,
}

#[derive(Debug, Serialize, Deserialize)]
struct Imdb {
    rating: f64,
}

/// Prints the best-rated movie whose title sorts before "The Room".
pub async fn run(uri: &str) -> Result<()> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database("sample_mflix");
    let collection = database.collection::<Movie>("movies");

    let result = collection
        .find_one(doc! { "title": { "$lt": "The Room" } })
        .projection(doc! { "title": 1, "imdb": 1, "_id": 0 })
        .sort(doc! { "imdb.rating": -1 })
        .await?;

    println!("{:?}", result);

    Ok(())
}
// :snippet-end:
