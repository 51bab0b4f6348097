//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: service call → HTTP request → typed resource

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use up_client::models::{
    AccountType, CardPurchaseMethodKind, TransactionStatus, WebhookDeliveryStatus, WebhookEventType,
};
use up_client::services::{ListAccountsOptions, ListCategoriesOptions, ListTransactionsOptions};
use up_client::{CancellationToken, Client, ClientConfig, Error, ListOptions};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let config = ClientConfig::builder()
        .base_url(format!("{}/api/v1", server.uri()))
        .build();
    let client = Client::with_config("up:yeah:secret", config).unwrap();
    (server, client)
}

fn money(value: &str, base_units: i64) -> Value {
    json!({"currencyCode": "AUD", "value": value, "valueInBaseUnits": base_units})
}

fn account(id: &str, name: &str, kind: &str) -> Value {
    json!({
        "type": "accounts",
        "id": id,
        "attributes": {
            "displayName": name,
            "accountType": kind,
            "ownershipType": "INDIVIDUAL",
            "balance": money("10.00", 1000),
            "createdAt": "2024-01-01T00:00:00Z"
        }
    })
}

fn transaction(id: &str, description: &str) -> Value {
    json!({
        "type": "transactions",
        "id": id,
        "attributes": {
            "status": "SETTLED",
            "rawText": null,
            "description": description,
            "message": null,
            "isCategorizable": true,
            "holdInfo": null,
            "roundUp": null,
            "cashback": null,
            "amount": money("-5.00", -500),
            "foreignAmount": null,
            "cardPurchaseMethod": null,
            "settledAt": "2024-01-02T00:00:00Z",
            "createdAt": "2024-01-01T00:00:00Z"
        },
        "relationships": {
            "account": {"data": {"type": "accounts", "id": "acc-1"}},
            "transferAccount": {"data": null},
            "category": {"data": null},
            "parentCategory": {"data": null},
            "tags": {"data": []}
        }
    })
}

fn webhook(id: &str, url: &str) -> Value {
    json!({
        "type": "webhooks",
        "id": id,
        "attributes": {
            "url": url,
            "description": null,
            "secretKey": "shh",
            "createdAt": "2024-01-01T00:00:00Z"
        }
    })
}

// ============================================================================
// Utility Tests
// ============================================================================

#[tokio::test]
async fn test_ping_sends_auth_and_decodes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/util/ping"))
        .and(header("Authorization", "Bearer up:yeah:secret"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"id": "ping-1", "statusEmoji": "⚡️"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let ping = client.utility().ping(&ctx).await.unwrap();
    assert_eq!(ping.meta.id, "ping-1");
}

#[tokio::test]
async fn test_unauthorized_surfaces_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/util/ping"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{
                "status": "401",
                "title": "Not Authorized",
                "detail": "The request was not authenticated."
            }]
        })))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let err = client.utility().ping(&ctx).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(
        err.to_string(),
        "Not Authorized: The request was not authenticated."
    );
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_list_accounts_filters_and_follows_pages() {
    let (server, client) = setup().await;
    let next = format!("{}/api/v1/accounts/page-2", server.uri());

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts"))
        .and(query_param("filter[accountType]", "SAVER"))
        .and(query_param("page[size]", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [account("acc-1", "Rainy Day", "SAVER")],
            "links": {"prev": null, "next": next}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [account("acc-2", "Holiday", "SAVER")],
            "links": {"prev": null, "next": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let opts = ListAccountsOptions {
        list: ListOptions::new().with_page_size(1),
        account_type: Some(AccountType::Saver),
        ..Default::default()
    };
    let accounts = client.accounts().list(&ctx, Some(&opts)).await.unwrap();

    let names: Vec<&str> = accounts
        .iter()
        .map(|a| a.attributes.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["Rainy Day", "Holiday"]);
}

#[tokio::test]
async fn test_get_account_encodes_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/acc%201"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": account("acc 1", "Spending", "TRANSACTIONAL")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let found = client.accounts().get(&ctx, "acc 1").await.unwrap();
    assert_eq!(found.attributes.account_type, AccountType::Transactional);
}

#[tokio::test]
async fn test_get_missing_account_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{
                "status": "404",
                "title": "Not Found",
                "detail": "The resource could not be found.",
                "source": {"parameter": "id"}
            }]
        })))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let err = client.accounts().get(&ctx, "nope").await.unwrap_err();
    let api = err.api_error().unwrap();
    let source = api.first().and_then(|e| e.source.as_ref()).unwrap();
    assert_eq!(source.parameter.as_deref(), Some("id"));
}

// ============================================================================
// Transaction Tests
// ============================================================================

#[tokio::test]
async fn test_list_transactions_by_account_with_range() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/acc-1/transactions"))
        .and(query_param("filter[status]", "SETTLED"))
        .and(query_param("filter[since]", "2024-01-01T00:00:00Z"))
        .and(query_param("filter[until]", "2024-02-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [transaction("tx-1", "Bakery"), transaction("tx-2", "Cafe")],
            "links": {"prev": null, "next": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let opts = ListTransactionsOptions {
        status: Some(TransactionStatus::Settled),
        since: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        until: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
        ..Default::default()
    };
    let txs = client
        .transactions()
        .list_by_account(&ctx, "acc-1", Some(&opts))
        .await
        .unwrap();

    assert_eq!(txs.len(), 2);
    assert_eq!(txs.data[1].attributes.description, "Cafe");
}

#[tokio::test]
async fn test_list_transactions_keeps_unlisted_card_method() {
    let (server, client) = setup().await;
    let next = format!("{}/api/v1/transactions/page-2", server.uri());

    let mut wallet = transaction("tx-2", "Grocer");
    wallet["attributes"]["cardPurchaseMethod"] =
        json!({"method": "APPLE_PAY", "cardNumberSuffix": "0042"});

    Mock::given(method("GET"))
        .and(path("/api/v1/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [transaction("tx-1", "Bakery")],
            "links": {"prev": null, "next": next}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/transactions/page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [transaction("tx-3", "Cafe"), wallet],
            "links": {"prev": null, "next": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let txs = client.transactions().list(&ctx, None).await.unwrap();

    let ids: Vec<&str> = txs.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["tx-1", "tx-3", "tx-2"]);
    assert_eq!(
        txs.data[2]
            .attributes
            .card_purchase_method
            .as_ref()
            .map(|m| m.method.clone()),
        Some(CardPurchaseMethodKind::Other("APPLE_PAY".into()))
    );
}

#[tokio::test]
async fn test_get_transaction() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/transactions/tx-9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": transaction("tx-9", "Rent")})),
        )
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let tx = client.transactions().get(&ctx, "tx-9").await.unwrap();
    assert_eq!(tx.attributes.amount.value_in_base_units, -500);
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_list_categories_by_parent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .and(query_param("filter[parent]", "good-life"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "type": "categories",
                "id": "booze",
                "attributes": {"name": "Booze"},
                "relationships": {
                    "parent": {"data": {"type": "categories", "id": "good-life"}},
                    "children": {"data": []}
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let opts = ListCategoriesOptions {
        parent: Some("good-life".into()),
    };
    let categories = client.categories().list(&ctx, Some(&opts)).await.unwrap();
    assert_eq!(categories.data[0].relationships.parent.id(), Some("good-life"));
}

#[tokio::test]
async fn test_categorize_and_clear() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/transactions/tx-1/relationships/category"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"data": {"type": "categories", "id": "takeaway"}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/transactions/tx-1/relationships/category"))
        .and(body_json(json!({"data": null})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let categories = client.categories();
    categories
        .update_transaction_category(&ctx, "tx-1", "takeaway")
        .await
        .unwrap();
    categories
        .remove_transaction_category(&ctx, "tx-1")
        .await
        .unwrap();
}

// ============================================================================
// Tag Tests
// ============================================================================

#[tokio::test]
async fn test_add_and_remove_tags() {
    let (server, client) = setup().await;
    let body = json!({"data": [{"type": "tags", "id": "Holiday"}]});

    Mock::given(method("POST"))
        .and(path("/api/v1/transactions/tx-1/relationships/tags"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/transactions/tx-1/relationships/tags"))
        .and(body_json(body))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let tags = client.tags();
    tags.add_to_transaction(&ctx, "tx-1", &["Holiday"])
        .await
        .unwrap();
    tags.remove_from_transaction(&ctx, "tx-1", &["Holiday"])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_tags() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"type": "tags", "id": "Holiday"}, {"type": "tags", "id": "Pizza Night"}],
            "links": {"prev": null, "next": null}
        })))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let tags = client.tags().list(&ctx, None).await.unwrap();
    let ids: Vec<&str> = tags.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["Holiday", "Pizza Night"]);
}

// ============================================================================
// Webhook Tests
// ============================================================================

#[tokio::test]
async fn test_create_webhook() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/webhooks"))
        .and(body_json(json!({
            "data": {"attributes": {"url": "https://example.com/hook", "description": "ci"}}
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": webhook("wh-1", "https://example.com/hook")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let created = client
        .webhooks()
        .create(&ctx, "https://example.com/hook", Some("ci"))
        .await
        .unwrap();
    assert_eq!(created.id, "wh-1");
    assert_eq!(created.attributes.secret_key.as_deref(), Some("shh"));
}

#[tokio::test]
async fn test_create_webhook_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/webhooks"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{
                "status": "400",
                "title": "Invalid Request",
                "detail": "URL must use HTTPS.",
                "source": {"pointer": "/data/attributes/url"}
            }]
        })))
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let err = client
        .webhooks()
        .create(&ctx, "http://example.com/hook", None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_webhook_lifecycle() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/webhooks/wh-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": webhook("wh-1", "https://example.com/hook")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/webhooks/wh-1/ping"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "type": "webhook-events",
                "id": "evt-1",
                "attributes": {"eventType": "PING", "createdAt": "2024-01-01T00:00:00Z"},
                "relationships": {"webhook": {"data": {"type": "webhooks", "id": "wh-1"}}}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/webhooks/wh-1/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "type": "webhook-delivery-logs",
                "id": "log-1",
                "attributes": {
                    "request": {"body": "{}"},
                    "response": {"statusCode": 200, "body": "ok"},
                    "deliveryStatus": "DELIVERED",
                    "createdAt": "2024-01-01T00:00:01Z"
                },
                "relationships": {
                    "webhookEvent": {"data": {"type": "webhook-events", "id": "evt-1"}}
                }
            }],
            "links": {"prev": null, "next": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/webhooks/wh-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let webhooks = client.webhooks();

    let found = webhooks.get(&ctx, "wh-1").await.unwrap();
    assert_eq!(found.attributes.url, "https://example.com/hook");

    let event = webhooks.ping(&ctx, "wh-1").await.unwrap();
    assert_eq!(event.attributes.event_type, WebhookEventType::Ping);

    let logs = webhooks.list_logs(&ctx, "wh-1", None).await.unwrap();
    assert_eq!(
        logs.data[0].attributes.delivery_status,
        WebhookDeliveryStatus::Delivered
    );
    assert_eq!(
        logs.data[0]
            .attributes
            .response
            .as_ref()
            .map(|r| r.status_code),
        Some(200)
    );

    webhooks.delete(&ctx, "wh-1").await.unwrap();
}

#[tokio::test]
async fn test_list_webhooks_paginates() {
    let (server, client) = setup().await;
    let next = format!("{}/api/v1/webhooks?page%5Bafter%5D=wh-1", server.uri());

    Mock::given(method("GET"))
        .and(path("/api/v1/webhooks"))
        .and(query_param("page[after]", "wh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [webhook("wh-2", "https://b.example.com")],
            "links": {"prev": null, "next": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [webhook("wh-1", "https://a.example.com")],
            "links": {"prev": null, "next": next}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let all = client.webhooks().list(&ctx, None).await.unwrap();
    let ids: Vec<&str> = all.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["wh-1", "wh-2"]);
}
