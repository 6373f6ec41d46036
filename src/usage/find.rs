// :snippet-start: find-usage-example
use futures::TryStreamExt;
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

/// Prints the title and IMDB rating of every movie shorter than 15 minutes.
pub async fn run(uri: &str) -> Result<()> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database("sample_mflix");
    let collection = database.collection::<Movie>("movies");

    let mut cursor = collection
        .find(doc! { "runtime": { "$lt": 15 } })
        .projection(doc! { "title": 1, "imdb": 1, "_id": 0 })
        .sort(doc! { "title": -1 })
        .await?;
    while let Some(movie) = cursor.try_next().await? {
        println!("{:?}", movie);
    }

    Ok(())
}
// :snippet-end:
