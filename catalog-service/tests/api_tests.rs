mod common;

use common::TestApp;
use common::TEST_PASSWORD;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "displayName": "Nicola",
            "username": "nicola",
            "password": "pass_word1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "nicola");
    assert_eq!(body["displayName"], "Nicola");
    assert_eq!(body["id"], 1);
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;
    app.register_and_login("nicola").await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "displayName": "Someone Else",
            "username": "nicola",
            "password": "other_pass2"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["statusCode"], 409);
    assert_eq!(body["message"], "username already exists");
}

#[tokio::test]
async fn test_register_validation_reports_each_field() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "displayName": "",
            "username": "x".repeat(51),
            "password": "nodigits"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["message"], "Validation failed");
    assert!(body["messages"]["displayName"].is_string());
    assert!(body["messages"]["username"].is_string());
    assert!(body["messages"]["password"].is_string());
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.post("/auth/register")
        .json(&json!({
            "displayName": "Nicola",
            "username": "nicola",
            "password": TEST_PASSWORD
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "nicola", "password": TEST_PASSWORD }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["header"], "Bearer Token");

    let token = body["accessToken"].as_str().unwrap();
    assert!(!token.is_empty());

    let claims = app.token_issuer.validate(token).expect("Token should validate");
    assert_eq!(claims.username(), "nicola");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.register_and_login("nicola").await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "nicola", "password": "wrong_pass9" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Incorrect password");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "ghost", "password": "pass_word1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_blank_username_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "   ", "password": "pass_word1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["messages"]["username"].is_string());
    assert!(body["messages"]["password"].is_null());
}

#[tokio::test]
async fn test_login_mistyped_body_is_json_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": 5, "password": "pass_word1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["statusCode"], 400);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_current_user() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;

    let response = app
        .get_authenticated("/auth/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "nicola");
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/products")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get_authenticated("/products", "not-a-token")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["statusCode"], 401);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::spawn().await;
    let foreign = auth::TokenIssuer::new(b"some-other-secret", 1)
        .unwrap()
        .issue("nicola")
        .unwrap();

    let response = app
        .get_authenticated("/categories", &foreign)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_get_product() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;
    let laptop = app.create_category(&token, "Laptop").await;

    let created = app.create_product(&token, "Dell Xenos 3000", laptop).await;
    assert_eq!(created["productName"], "Dell Xenos 3000");
    assert_eq!(created["price"].as_f64(), Some(1299.99));
    assert_eq!(created["category"]["id"], laptop);
    assert_eq!(created["category"]["name"], "Laptop");

    let id = created["id"].as_i64().unwrap();
    let response = app
        .get_authenticated(&format!("/products/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let fetched: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_product_unknown_category() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;

    let response = app
        .post_authenticated("/products", &token)
        .json(&json!({ "productName": "Ghost", "categoryId": 99 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .get_authenticated("/products?unpaged=true", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_create_product_validation() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;

    let response = app
        .post_authenticated("/products", &token)
        .json(&json!({
            "productName": "",
            "price": -10,
            "quantity": -1,
            "categoryId": 1
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["messages"]["productName"].is_string());
    assert!(body["messages"]["price"].is_string());
    assert!(body["messages"]["quantity"].is_string());
}

#[tokio::test]
async fn test_create_product_mistyped_price_is_json_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;
    let laptop = app.create_category(&token, "Laptop").await;

    let response = app
        .post_authenticated("/products", &token)
        .json(&json!({
            "productName": "Dell Xenos 3000",
            "price": "abc",
            "quantity": 1,
            "categoryId": laptop
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["statusCode"], 400);
    assert!(body["message"].as_str().unwrap().contains("price"));
}

#[tokio::test]
async fn test_create_product_price_precision() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;
    let laptop = app.create_category(&token, "Laptop").await;

    for price in [json!(9.999), json!(100_000_000_000_000_000_u64)] {
        let response = app
            .post_authenticated("/products", &token)
            .json(&json!({
                "productName": "Dell Xenos 3000",
                "price": price,
                "quantity": 1,
                "categoryId": laptop
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert!(body["messages"]["price"].is_string());
    }
}

#[tokio::test]
async fn test_update_product() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;
    let laptop = app.create_category(&token, "Laptop").await;
    let phone = app.create_category(&token, "Phone").await;
    let created = app.create_product(&token, "Iphone 14", laptop).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .put_authenticated(&format!("/products/{}", id), &token)
        .json(&json!({
            "productName": "Iphone 15",
            "price": 999,
            "quantity": 3,
            "description": "Moved to phones",
            "categoryId": phone
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], id);
    assert_eq!(body["productName"], "Iphone 15");
    assert_eq!(body["quantity"], 3);
    assert_eq!(body["category"]["name"], "Phone");
}

#[tokio::test]
async fn test_update_unknown_product() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;
    let laptop = app.create_category(&token, "Laptop").await;

    let response = app
        .put_authenticated("/products/42", &token)
        .json(&json!({ "productName": "Nothing", "categoryId": laptop }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_returns_removed_view() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;
    let laptop = app.create_category(&token, "Laptop").await;
    let created = app.create_product(&token, "Dell Xenos 3000", laptop).await;
    let path = format!("/products/{}", created["id"]);

    let response = app
        .delete_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, created);

    let response = app
        .get_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_product_id_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;

    let response = app
        .get_authenticated("/products/abc", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_paged() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;
    let laptop = app.create_category(&token, "Laptop").await;
    app.create_product(&token, "Dell Xenos 3000", laptop).await;
    app.create_product(&token, "Iphone 15", laptop).await;

    let response = app
        .get_authenticated("/products?page=0&size=1", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["content"].as_array().unwrap().len(), 1);
    assert_eq!(body["content"][0]["productName"], "Dell Xenos 3000");
    assert_eq!(body["totalElements"], 2);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["first"], true);

    let response = app
        .get_authenticated("/products?page=1&size=1", &token)
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["content"][0]["productName"], "Iphone 15");
    assert_eq!(body["last"], true);
}

#[tokio::test]
async fn test_list_products_defaults_and_empty_store() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;

    let response = app
        .get_authenticated("/products", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["pageNumber"], 0);
    assert_eq!(body["pageSize"], 10);
    assert_eq!(body["totalElements"], 0);
    assert_eq!(body["content"], json!([]));

    let response = app
        .get_authenticated("/products?unpaged=true", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_products_unpaged() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;
    let laptop = app.create_category(&token, "Laptop").await;
    app.create_product(&token, "Dell Xenos 3000", laptop).await;
    app.create_product(&token, "Iphone 15", laptop).await;

    let response = app
        .get_authenticated("/products?unpaged=true", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|product| product["productName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Dell Xenos 3000", "Iphone 15"]);
}

#[tokio::test]
async fn test_list_products_zero_size_rejected() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;

    let response = app
        .get_authenticated("/products?size=0", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_category_lifecycle() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola").await;
    let laptop = app.create_category(&token, "Laptop").await;

    let response = app
        .post_authenticated("/categories", &token)
        .json(&json!({ "name": "Laptop" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let product = app.create_product(&token, "Dell Xenos 3000", laptop).await;

    let response = app
        .delete_authenticated(&format!("/categories/{}", laptop), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    app.delete_authenticated(&format!("/products/{}", product["id"]), &token)
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .delete_authenticated(&format!("/categories/{}", laptop), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .get_authenticated("/categories", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!([]));
}
