// :snippet-start: delete-many-usage-example
use mongodb::{bson::doc, error::Result, Client};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Movie {
    #[serde(rename = "_id")]
    id: i32,
    title: String,
    imdb: Imdb,
}

#[derive(Debug, Serialize, Deserialize)]
struct Imdb {
    rating: f64,
}

/// Deletes every movie with an IMDB rating below 1.9.
pub async fn run(uri: &str) -> Result<()> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database("sample_mflix");
    let collection = database.collection::<Movie>("movies");

    let query = doc! { "imdb.rating": { "$lt": 1.9 } };

    match collection.delete_many(query).await {
        Ok(result) => println!("Deleted document count: {}", result.deleted_count),
        Err(error) => eprintln!("Unable to delete due to an error: {}", error),
    }

    Ok(())
}
// :snippet-end:
