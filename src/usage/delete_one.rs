// :snippet-start: delete-one-usage-example
use mongodb::{bson::doc, error::Result, Client};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Movie {
    #[serde(rename = "_id")]
    id: i32,
    title: String,
}

/// Deletes "The Garbage Pail Kids Movie" from the collection.
pub async fn run(uri: &str) -> Result<()> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database("sample_mflix");
    let collection = database.collection::<Movie>("movies");

    let query = doc! { "title": "The Garbage Pail Kids Movie" };

    match collection.delete_one(query).await {
        Ok(result) => println!("Deleted document count: {}", result.deleted_count),
        Err(error) => eprintln!("Unable to delete due to an error: {}", error),
    }

    Ok(())
}
// :snippet-end:
