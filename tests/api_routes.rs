//! Router-level tests against the in-memory repository provider.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{body_json, send, test_app, token_for, InMemoryRepos};

#[tokio::test]
async fn login_returns_token_and_user() {
    let repos = InMemoryRepos::new().with_account(1, "jdoe", "hunter22");
    let app = test_app(repos);

    let response = send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": "jdoe", "password": "hunter22" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["username"], "jdoe");
    assert_eq!(body["user"]["email"], "jdoe@example.com");
}

#[tokio::test]
async fn login_accepts_email_as_identifier() {
    let repos = InMemoryRepos::new().with_account(1, "jdoe", "hunter22");
    let app = test_app(repos);

    let response = send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": "jdoe@example.com", "password": "hunter22" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let repos = InMemoryRepos::new().with_account(1, "jdoe", "hunter22");
    let app = test_app(repos);

    let response = send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": "jdoe", "password": "wrong" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid credentials" })
    );
}

#[tokio::test]
async fn missing_authorization_yields_exact_error_body() {
    let app = test_app(InMemoryRepos::new());

    let response = send(&app, "GET", "/api/devices", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Authentication required" })
    );
}

#[tokio::test]
async fn tampered_token_yields_403() {
    let app = test_app(InMemoryRepos::new());
    let mut token = token_for(1, "jdoe");
    token.push('x');

    let response = send(&app, "GET", "/api/devices", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid token" }));
}

#[tokio::test]
async fn devices_are_scoped_to_the_caller() {
    let repos = InMemoryRepos::new()
        .with_account(1, "jdoe", "hunter22")
        .with_account(2, "other", "hunter22")
        .with_device(10, "1", "Unit A")
        .with_device(11, "2", "Unit B")
        .with_transaction("1", 10, 500, 1)
        .with_transaction("1", 10, 250, 2)
        .with_transaction("2", 11, 999, 3);
    let app = test_app(repos);

    let token = token_for(1, "jdoe");
    let response = send(&app, "GET", "/api/devices", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let devices = body.as_array().unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0]["device_name"], "Unit A");
    assert_eq!(devices[0]["balance"], 750.0);
}

#[tokio::test]
async fn device_balance_for_foreign_device_is_zero() {
    let repos = InMemoryRepos::new()
        .with_device(11, "2", "Unit B")
        .with_transaction("2", 11, 999, 3);
    let app = test_app(repos);

    let token = token_for(1, "jdoe");
    let response = send(&app, "GET", "/api/devices/11/balance", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "balance": 0.0 }));
}

#[tokio::test]
async fn transactions_filter_by_date_and_echo_filtered_total() {
    let repos = InMemoryRepos::new()
        .with_device(10, "1", "Unit A")
        .with_transaction("1", 10, 100, 1)
        .with_transaction("1", 10, 200, 10)
        .with_transaction("1", 10, 300, 20);
    let app = test_app(repos);

    let token = token_for(1, "jdoe");
    let response = send(
        &app,
        "GET",
        "/api/transactions?start_date=2025-06-05&end_date=2025-06-15",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body["transactions"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["amount"], 200.0);
    assert_eq!(rows[0]["device_name"], "Unit A");
    assert_eq!(body["pagination"], json!({ "total": 1, "page": 1, "limit": 20 }));
}

#[tokio::test]
async fn transactions_are_newest_first_and_paginated() {
    let repos = InMemoryRepos::new()
        .with_device(10, "1", "Unit A")
        .with_transaction("1", 10, 100, 1)
        .with_transaction("1", 10, 200, 2)
        .with_transaction("1", 10, 300, 3);
    let app = test_app(repos);

    let token = token_for(1, "jdoe");
    let response = send(
        &app,
        "GET",
        "/api/transactions?page=1&limit=2",
        Some(&token),
        None,
    )
    .await;

    let body = body_json(response).await;
    let rows = body["transactions"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["amount"], 300.0);
    assert_eq!(rows[1]["amount"], 200.0);
    assert_eq!(body["pagination"]["total"], 3);
}

#[tokio::test]
async fn withdrawal_creation_returns_code_and_id() {
    let repos = InMemoryRepos::new();
    let app = test_app(repos.clone());

    let token = token_for(1, "jdoe");
    let response = send(
        &app,
        "POST",
        "/api/withdrawals",
        Some(&token),
        Some(json!({
            "amount": 5000.0,
            "withdrawal_account": "+254700000000",
            "account_name": "John Doe"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Withdrawal request submitted successfully");

    let code = body["transaction_code"].as_str().unwrap();
    assert_eq!(code.len(), 9);
    assert!(code.starts_with('W'));
    assert!(code[1..].chars().all(|c| c.is_ascii_digit()));
    assert!(body["withdrawal_id"].as_i64().unwrap() > 0);

    // Recorded as pending with the default payment method
    let stored = repos.withdrawals.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].payment_method, "M-Pesa");
    assert_eq!(stored[0].account_no, "1");
}

#[tokio::test]
async fn withdrawal_with_zero_amount_is_rejected() {
    let app = test_app(InMemoryRepos::new());

    let token = token_for(1, "jdoe");
    let response = send(
        &app,
        "POST",
        "/api/withdrawals",
        Some(&token),
        Some(json!({
            "amount": 0.0,
            "withdrawal_account": "+254700000000",
            "account_name": "John Doe"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Amount must be greater than zero" })
    );
}

#[tokio::test]
async fn failed_withdrawal_leaves_no_record() {
    let repos = InMemoryRepos::new();
    repos
        .fail_withdrawals
        .store(true, std::sync::atomic::Ordering::SeqCst);
    let app = test_app(repos.clone());

    let token = token_for(1, "jdoe");
    let response = send(
        &app,
        "POST",
        "/api/withdrawals",
        Some(&token),
        Some(json!({
            "amount": 5000.0,
            "withdrawal_account": "+254700000000",
            "account_name": "John Doe"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Internal server error" })
    );
    assert!(repos.withdrawals.lock().unwrap().is_empty());

    // Listing confirms nothing became visible
    let response = send(&app, "GET", "/api/withdrawals", Some(&token), None).await;
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn withdrawal_listing_filters_by_status() {
    let repos = InMemoryRepos::new();
    let app = test_app(repos);

    let token = token_for(1, "jdoe");
    for _ in 0..2 {
        send(
            &app,
            "POST",
            "/api/withdrawals",
            Some(&token),
            Some(json!({
                "amount": 100.0,
                "withdrawal_account": "+254700000000",
                "account_name": "John Doe"
            })),
        )
        .await;
    }

    let response = send(
        &app,
        "GET",
        "/api/withdrawals?status=pending",
        Some(&token),
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 2);

    let response = send(
        &app,
        "GET",
        "/api/withdrawals?status=completed",
        Some(&token),
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 0);

    let response = send(
        &app,
        "GET",
        "/api/withdrawals?status=bogus",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn support_ticket_round_trip() {
    let app = test_app(InMemoryRepos::new());

    let token = token_for(1, "jdoe");
    let response = send(
        &app,
        "POST",
        "/api/support",
        Some(&token),
        Some(json!({
            "name": "John Doe",
            "email": "jdoe@example.com",
            "category": "payments",
            "subject": "Missing payout",
            "message": "My withdrawal has not arrived."
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Support ticket submitted successfully");
    let number = body["ticket_number"].as_str().unwrap();
    assert!(number.starts_with("TKT"));
    assert_eq!(number.len(), 11);

    let response = send(&app, "GET", "/api/support?status=open", Some(&token), None).await;
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["tickets"][0]["priority"], "medium");
}

#[tokio::test]
async fn dashboard_stats_aggregate_the_account() {
    let repos = InMemoryRepos::new()
        .with_device(10, "1", "Unit A")
        .with_device(11, "1", "Unit B")
        .with_transaction("1", 10, 100, 1)
        .with_transaction("1", 11, 250, 2);
    let app = test_app(repos);

    let token = token_for(1, "jdoe");

    send(
        &app,
        "POST",
        "/api/withdrawals",
        Some(&token),
        Some(json!({
            "amount": 50.0,
            "withdrawal_account": "+254700000000",
            "account_name": "John Doe"
        })),
    )
    .await;

    let response = send(&app, "GET", "/api/dashboard/stats", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "total_devices": 2,
            "total_earnings": 350.0,
            "total_games": 2,
            "pending_withdrawals": 1
        })
    );
}

#[tokio::test]
async fn unknown_user_lookup_is_404() {
    let app = test_app(InMemoryRepos::new());

    let token = token_for(1, "jdoe");
    let response = send(&app, "GET", "/api/users/99", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn health_reports_disconnected_database() {
    let app = test_app(InMemoryRepos::new());

    let response = send(&app, "GET", "/api/health", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "disconnected");
    assert_eq!(body["environment"], "test");
    assert!(body["timestamp"].as_str().is_some());
}
