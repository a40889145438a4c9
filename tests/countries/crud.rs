//! Add, get, edit and delete over HTTP.

use serde_json::json;

use country_atlas::{Country, ServiceConfig, ValidationMode};

use crate::support::{in_memory_service, input, list_json, start_default, start_server, zed_alpha};

#[tokio::test]
async fn add_returns_created_record() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/countries/addCountry"))
        .json(&json!({ "name": "Beta", "alpha2Code": "BB", "alpha3Code": "BBB", "visited": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let created: Country = resp.json().await.unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(created.name, "Beta");
    assert!(created.visited);

    let all = list_json(&client, &base, "?limit=false").await;
    assert_eq!(all.len(), 3);
    assert_eq!(all[2], created);
}

#[tokio::test]
async fn add_ignores_client_id() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/addCountry"))
        .json(&json!({ "id": 77, "name": "Beta", "alpha2Code": "BB", "alpha3Code": "BBB" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let created: Country = resp.json().await.unwrap();
    assert_eq!(created.id, 3);
    assert!(!created.visited);
}

#[tokio::test]
async fn add_duplicate_alpha2_is_rejected() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/countries/addCountry"))
        .json(&input("Beta", "AA", "BBB"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Country already exists." }));

    assert_eq!(list_json(&client, &base, "?limit=false").await.len(), 2);
}

#[tokio::test]
async fn add_reports_every_missing_field() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/countries/addCountry"))
        .json(&json!({ "visited": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "alpha2Code", "alpha3Code"]);
    assert_eq!(body["errors"][0]["message"], "Name field cannot be empty.");
}

#[tokio::test]
async fn name_only_validation() {
    let service = in_memory_service(
        zed_alpha(),
        ServiceConfig {
            validation: ValidationMode::NameOnly,
            ..ServiceConfig::default()
        },
    );
    let base = start_server(service).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/countries/addCountry"))
        .json(&json!({ "alpha2Code": "BB" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);

    let resp = client
        .post(format!("{base}/api/countries/addCountry"))
        .json(&json!({ "name": "Codeless" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn add_can_redirect_to_listing() {
    let service = in_memory_service(
        zed_alpha(),
        ServiceConfig {
            redirect_after_add: true,
            ..ServiceConfig::default()
        },
    );
    let base = start_server(service.clone()).await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let resp = client
        .post(format!("{base}/api/countries/addCountry"))
        .json(&input("Beta", "BB", "BBB"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("location").unwrap(), "/api/countries");
    assert_eq!(service.store().len().unwrap(), 3);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/countries/addCountry"))
        .header("content-type", "application/json")
        .body("{ nope")
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn get_by_code_is_case_insensitive() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    let lower: Country = client
        .get(format!("{base}/api/countries/aa"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let upper: Country = client
        .get(format!("{base}/api/countries/AAA"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.id, 2);
}

#[tokio::test]
async fn get_missing_returns_404() {
    let base = start_default(zed_alpha()).await;

    let resp = reqwest::get(format!("{base}/api/countries/QQ")).await.unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Country not found." }));
}

#[tokio::test]
async fn edit_by_code_replaces_whole_record() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/api/countries/edit/zz"))
        .json(&json!({ "name": "Zedonia", "alpha2Code": "ZD" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Country updated successfully.");
    assert_eq!(
        body["country"],
        json!({ "id": 1, "name": "Zedonia", "alpha2Code": "ZD", "alpha3Code": "", "visited": false })
    );

    let resp = reqwest::get(format!("{base}/api/countries/ZD")).await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn edit_treats_null_as_omitted() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/api/countries/edit/AA"))
        .json(&json!({ "name": "Alpha", "alpha2Code": "AA", "alpha3Code": "AAA", "visited": null }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["country"]["visited"], false);
}

#[tokio::test]
async fn edit_by_id() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/api/countries/editById/2"))
        .json(&input("Alpha", "AA", "AAA"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["country"]["id"], 2);
    assert_eq!(body["country"]["visited"], false);
}

#[tokio::test]
async fn edit_missing_returns_404_and_changes_nothing() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    for path in ["edit/QQ", "editById/42", "editById/not-a-number"] {
        let resp = client
            .put(format!("{base}/api/countries/{path}"))
            .json(&input("Q", "QQ", "QQQ"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404, "{path}");
    }

    let all = list_json(&client, &base, "").await;
    assert_eq!(all, crate::support::zed_alpha());
}

#[tokio::test]
async fn delete_removes_exactly_one() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/api/countries/delete/zzz"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Country deleted successfully." }));

    let all = list_json(&client, &base, "").await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, 2);

    let resp = client
        .delete(format!("{base}/api/countries/delete/zzz"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn ids_keep_growing_after_delete() {
    let base = start_default(zed_alpha()).await;
    let client = reqwest::Client::new();

    client
        .delete(format!("{base}/api/countries/delete/ZZ"))
        .send()
        .await
        .unwrap();

    let created: Country = client
        .post(format!("{base}/api/countries/addCountry"))
        .json(&input("Beta", "BB", "BBB"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.id, 3);
}
