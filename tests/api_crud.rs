//! End-to-end CRUD tests against a running server.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    for (i, name) in ["First Course", "Second Course", "Third Course"]
        .iter()
        .enumerate()
    {
        let created = common::create_course(&client, addr, name).await;
        assert_eq!(created["id"], (i as u64) + 1);
        assert_eq!(created["name"], *name);
    }
}

#[tokio::test]
async fn test_create_after_seeding_uses_max_plus_one() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    for name in ["one!", "two!", "three"] {
        common::create_course(&client, addr, name).await;
    }

    let created = common::create_course(&client, addr, "New Course").await;
    assert_eq!(created, json!({"id": 4, "name": "New Course"}));
}

#[tokio::test]
async fn test_get_by_id_roundtrip() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    let created = common::create_course(&client, addr, "Systems Programming").await;

    let res = client
        .get(format!("http://{}/api/courses/{}", addr, created["id"]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_unknown_id_is_404() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/api/courses/99", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Course not found"}));
}

#[tokio::test]
async fn test_create_rejects_missing_name() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("http://{}/api/courses", addr))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "name is required"}));
}

#[tokio::test]
async fn test_update_rejects_short_name_and_keeps_store() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    common::create_course(&client, addr, "Original Name").await;

    let res = client
        .put(format!("http://{}/api/courses/1", addr))
        .json(&json!({"name": "Hi"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "name must be at least 3 characters long");

    // Store unchanged
    let res = client
        .get(format!("http://{}/api/courses/1", addr))
        .send()
        .await
        .unwrap();
    let course: Value = res.json().await.unwrap();
    assert_eq!(course["name"], "Original Name");
}

#[tokio::test]
async fn test_update_changes_name_only() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    common::create_course(&client, addr, "Before Rename").await;

    let res = client
        .put(format!("http://{}/api/courses/1", addr))
        .json(&json!({"name": "After Rename"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated, json!({"id": 1, "name": "After Rename"}));
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("http://{}/api/courses/5", addr))
        .json(&json!({"name": "Valid Name"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Course not found"}));
}

#[tokio::test]
async fn test_delete_removes_record() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    for name in ["one!", "two!", "three"] {
        common::create_course(&client, addr, name).await;
    }

    let res = client
        .delete(format!("http://{}/api/courses/2", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let removed: Value = res.json().await.unwrap();
    assert_eq!(removed, json!({"id": 2, "name": "two!"}));

    let res = client
        .get(format!("http://{}/api/courses", addr))
        .send()
        .await
        .unwrap();
    let remaining: Value = res.json().await.unwrap();
    let ids: Vec<u64> = remaining
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_delete_unknown_id_is_404() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("http://{}/api/courses/1", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn test_unmatched_route_is_404() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/api/students", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Route not found"}));
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let addr = common::spawn_server().await;
    let client = reqwest::Client::new();

    common::create_course(&client, addr, "Stable Course").await;

    let mut snapshots = Vec::new();
    for _ in 0..3 {
        let res = client
            .get(format!("http://{}/api/courses", addr))
            .send()
            .await
            .unwrap();
        snapshots.push(res.json::<Value>().await.unwrap());
    }
    assert!(snapshots.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_parallel_creates_get_distinct_ids() {
    let addr = common::spawn_server().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        handles.push(tokio::spawn(async move {
            let client = reqwest::Client::new();
            let created =
                common::create_course(&client, addr, &format!("Concurrent {}", i)).await;
            created["id"].as_u64().unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}
