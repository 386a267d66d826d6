//! Black-box tests for the JSON API.
//!
//! Each test spawns the router over a fresh in-memory store on an
//! ephemeral port and drives it with a real HTTP client.

use std::sync::Arc;

use serde_json::{Value, json};
use stockroom_api::api_router;
use stockroom_store_sqlite::SqliteStore;
use tokio::net::TcpListener;

/// Spawn the API over a fresh in-memory store; returns its base URL.
async fn spawn_server() -> String {
  let store = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  let app = api_router(Arc::new(store));

  let listener = TcpListener::bind("127.0.0.1:0")
    .await
    .expect("bind ephemeral port");
  let addr = listener.local_addr().expect("local addr");
  tokio::spawn(async move {
    axum::serve(listener, app).await.expect("server");
  });

  format!("http://{addr}")
}

fn body(name: &str, bought: i64, sold: i64) -> Value {
  json!({ "name": name, "bought": bought, "sold": sold })
}

// ─── Items ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_list_round_trip() {
  let base = spawn_server().await;
  let http = reqwest::Client::new();

  let resp = http
    .post(format!("{base}/items"))
    .json(&body("Widget", 10, 3))
    .send()
    .await
    .unwrap();
  assert_eq!(resp.status(), 201);

  let created: Value = resp.json().await.unwrap();
  assert_eq!(created["name"], "Widget");
  assert_eq!(created["remaining"], 7);

  let listed: Vec<Value> = http
    .get(format!("{base}/items"))
    .send()
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0], created);
}

#[tokio::test]
async fn create_rejects_invalid_input_with_400() {
  let base = spawn_server().await;
  let http = reqwest::Client::new();

  // sold > bought
  let resp = http
    .post(format!("{base}/items"))
    .json(&body("Widget", 3, 5))
    .send()
    .await
    .unwrap();
  assert_eq!(resp.status(), 400);
  let err: Value = resp.json().await.unwrap();
  assert!(err["error"].as_str().unwrap().contains("sold"));

  // empty name
  let resp = http
    .post(format!("{base}/items"))
    .json(&body("   ", 1, 0))
    .send()
    .await
    .unwrap();
  assert_eq!(resp.status(), 400);

  // Nothing was written.
  let listed: Vec<Value> = http
    .get(format!("{base}/items"))
    .send()
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
  assert!(listed.is_empty());
}

#[tokio::test]
async fn update_overwrites_and_404s_on_missing() {
  let base = spawn_server().await;
  let http = reqwest::Client::new();

  let created: Value = http
    .post(format!("{base}/items"))
    .json(&body("Widget", 10, 3))
    .send()
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
  let id = created["id"].as_i64().unwrap();

  let resp = http
    .put(format!("{base}/items/{id}"))
    .json(&body("Widget", 10, 10))
    .send()
    .await
    .unwrap();
  assert_eq!(resp.status(), 200);
  let updated: Value = resp.json().await.unwrap();
  assert_eq!(updated["remaining"], 0);

  let resp = http
    .put(format!("{base}/items/{}", id + 1))
    .json(&body("Widget", 1, 0))
    .send()
    .await
    .unwrap();
  assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn update_rejects_invalid_input_with_400() {
  let base = spawn_server().await;
  let http = reqwest::Client::new();

  let created: Value = http
    .post(format!("{base}/items"))
    .json(&body("Widget", 10, 3))
    .send()
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
  let id = created["id"].as_i64().unwrap();

  let resp = http
    .put(format!("{base}/items/{id}"))
    .json(&body("Widget", 3, 5))
    .send()
    .await
    .unwrap();
  assert_eq!(resp.status(), 400);

  // The row is untouched.
  let listed: Vec<Value> = http
    .get(format!("{base}/items"))
    .send()
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
  assert_eq!(listed[0]["sold"], 3);
}

#[tokio::test]
async fn delete_then_delete_again_404s() {
  let base = spawn_server().await;
  let http = reqwest::Client::new();

  let created: Value = http
    .post(format!("{base}/items"))
    .json(&body("Widget", 1, 0))
    .send()
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
  let id = created["id"].as_i64().unwrap();

  let resp = http
    .delete(format!("{base}/items/{id}"))
    .send()
    .await
    .unwrap();
  assert_eq!(resp.status(), 204);

  let resp = http
    .delete(format!("{base}/items/{id}"))
    .send()
    .await
    .unwrap();
  assert_eq!(resp.status(), 404);

  let listed: Vec<Value> = http
    .get(format!("{base}/items"))
    .send()
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
  assert!(listed.is_empty());
}

#[tokio::test]
async fn list_filters_by_query_param() {
  let base = spawn_server().await;
  let http = reqwest::Client::new();

  for b in [body("Widget", 1, 0), body("Wide Belt", 1, 0), body("Bolt", 1, 0)] {
    http
      .post(format!("{base}/items"))
      .json(&b)
      .send()
      .await
      .unwrap();
  }

  let listed: Vec<Value> = http
    .get(format!("{base}/items?q=wid"))
    .send()
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
  let names: Vec<_> = listed.iter().map(|i| i["name"].as_str().unwrap()).collect();
  assert_eq!(names, ["Wide Belt", "Widget"]);
}

// ─── CSV export ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn export_returns_current_view_as_csv() {
  let base = spawn_server().await;
  let http = reqwest::Client::new();

  http
    .post(format!("{base}/items"))
    .json(&body("Widget", 10, 3))
    .send()
    .await
    .unwrap();

  let resp = http
    .get(format!("{base}/export.csv"))
    .send()
    .await
    .unwrap();
  assert_eq!(resp.status(), 200);
  assert!(
    resp
      .headers()
      .get("content-type")
      .unwrap()
      .to_str()
      .unwrap()
      .starts_with("text/csv")
  );
  assert!(
    resp
      .headers()
      .get("content-disposition")
      .unwrap()
      .to_str()
      .unwrap()
      .contains("vendor_inventory.csv")
  );

  let text = resp.text().await.unwrap();
  let mut lines = text.lines();
  assert_eq!(lines.next(), Some("ID,Name,Bought,Sold,Remaining"));
  let row = lines.next().unwrap();
  assert!(row.ends_with(",Widget,10,3,7"));
}

#[tokio::test]
async fn export_honours_the_filter() {
  let base = spawn_server().await;
  let http = reqwest::Client::new();

  http
    .post(format!("{base}/items"))
    .json(&body("Widget", 1, 0))
    .send()
    .await
    .unwrap();
  http
    .post(format!("{base}/items"))
    .json(&body("Bolt", 1, 0))
    .send()
    .await
    .unwrap();

  let text = http
    .get(format!("{base}/export.csv?q=widg"))
    .send()
    .await
    .unwrap()
    .text()
    .await
    .unwrap();
  assert!(text.contains("Widget"));
  assert!(!text.contains("Bolt"));
}
