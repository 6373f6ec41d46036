#![allow(dead_code)]

use std::sync::Once;

use mongodb::{
    bson::{doc, Document},
    Client,
    Collection,
};
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mongodb_docs_examples::config;

static URI: Lazy<String> = Lazy::new(|| config::load().connection_uri);

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// Connects to the deployment the examples run against.
pub async fn client() -> Client {
    init_tracing();
    Client::with_uri_str(URI.as_str())
        .await
        .expect("failed to connect to the test deployment")
}

pub fn get_coll<T: Send + Sync>(client: &Client, db_name: &str, coll_name: &str) -> Collection<T> {
    client.database(db_name).collection(coll_name)
}

/// Drops the collection and inserts the given fixture documents, so each test
/// starts from a known state regardless of what ran before it.
pub async fn init_coll<T>(
    client: &Client,
    db_name: &str,
    coll_name: &str,
    fixtures: impl IntoIterator<Item = T>,
) -> Collection<T>
where
    T: Serialize + Send + Sync,
{
    let coll = get_coll(client, db_name, coll_name);
    coll.drop().await.expect("failed to drop collection");
    let fixtures: Vec<T> = fixtures.into_iter().collect();
    if !fixtures.is_empty() {
        coll.insert_many(fixtures)
            .await
            .expect("failed to insert fixture documents");
    }
    coll
}

/// Whether the deployment supports multi-document transactions and change
/// streams. Tests that need a replica set skip themselves on standalones.
pub async fn is_replica_set(client: &Client) -> bool {
    let reply: Document = client
        .database("admin")
        .run_command(doc! { "hello": 1 })
        .await
        .expect("hello command failed");
    reply.contains_key("setName") || reply.contains_key("msg")
}

/// Whether the server is at least the given version, per buildInfo.
pub async fn server_version_gte(client: &Client, major: u32, minor: u32) -> bool {
    let reply: Document = client
        .database("admin")
        .run_command(doc! { "buildInfo": 1 })
        .await
        .expect("buildInfo command failed");
    let version = reply.get_str("version").expect("buildInfo missing version");
    let mut parts = version.split('.').map(|p| p.parse::<u32>().unwrap_or(0));
    let server_major = parts.next().unwrap_or(0);
    let server_minor = parts.next().unwrap_or(0);
    (server_major, server_minor) >= (major, minor)
}

/// Logs a message that the default test harness would otherwise swallow,
/// e.g. when a test skips itself due to the deployment topology.
pub fn log_uncaptured(message: impl AsRef<str>) {
    tracing::warn!("{}", message.as_ref());
    eprintln!("{}", message.as_ref());
}
