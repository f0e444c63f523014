use std::time::Duration;

use rust_decimal::Decimal;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinswitch_api_client::auth::Credentials;
use coinswitch_api_client::error::CoinSwitchError;
use coinswitch_api_client::rest::CoinSwitchClient;
use coinswitch_api_client::rest::market::Coin;
use coinswitch_api_client::rest::order::NewOrderParams;
use coinswitch_api_client::types::{Address, OrderStatus};

fn build_client(server: &MockServer) -> CoinSwitchClient {
    CoinSwitchClient::builder(Credentials::new("test_key"))
        .base_url(server.uri())
        .build()
}

#[tokio::test]
async fn test_get_coins() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {
            "symbol": "btc",
            "name": "Bitcoin",
            "isActive": true,
            "isFiat": false,
            "logoUrl": "https://files.coinswitch.co/public/coins/btc.png"
        },
        {
            "symbol": "eth",
            "name": "Ethereum",
            "isActive": false
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/coins"))
        .and(header("x-api-key", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let coins = client.get_coins().execute().await.unwrap();

    assert_eq!(coins.len(), 2);
    assert_eq!(coins[0].symbol.as_deref(), Some("btc"));
    assert_eq!(coins[1].is_active, Some(false));
    assert_eq!(serde_json::to_value(&coins).unwrap(), response);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("x-user-ip").is_none());
}

#[tokio::test]
async fn test_user_ip_header_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coins"))
        .and(header("x-api-key", "test_key"))
        .and(header("x-user-ip", "203.0.113.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CoinSwitchClient::builder(Credentials::new("test_key").with_ip("203.0.113.7"))
        .base_url(server.uri())
        .build();
    let coins: Vec<Coin> = client.get_coins().await.unwrap();
    assert!(coins.is_empty());
}

#[tokio::test]
async fn test_get_rate_posts_json_body() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": true,
        "code": "OK",
        "message": "OK",
        "data": {
            "rate": 31.87,
            "minerFee": 0.002,
            "limitMinDepositCoin": 0.001,
            "limitMaxDepositCoin": 10,
            "limitMinDestinationCoin": 0.0319,
            "limitMaxDestinationCoin": 318.7
        }
    });

    Mock::given(method("POST"))
        .and(path("/rate"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "depositCoin": "btc",
            "destinationCoin": "eth"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rate = client.get_rate("btc", "eth").await.unwrap();

    assert_eq!(rate.rate, "31.87".parse::<Decimal>().unwrap());
    assert_eq!(rate.miner_fee, Some("0.002".parse().unwrap()));
    assert_eq!(rate.limit_max_deposit_coin, Some(Decimal::from(10)));
}

#[tokio::test]
async fn test_get_pairs_without_filters_sends_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pairs"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "depositCoin": "btc", "destinationCoin": "eth", "isActive": true },
            { "depositCoin": "btc", "destinationCoin": "ltc", "isActive": false }
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pairs = client.get_pairs(None, None).await.unwrap();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[1].destination_coin, "ltc");
    assert_eq!(pairs[1].is_active, Some(false));
}

#[tokio::test]
async fn test_get_rates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bulk-rate"))
        .and(body_json(serde_json::json!({ "depositCoin": "btc" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "depositCoin": "btc",
                "destinationCoin": "eth",
                "rate": 31.87,
                "minerFee": 0.002
            }
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rates = client.get_rates(Some("btc"), None).await.unwrap();

    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].destination_coin, "eth");
    assert_eq!(rates[0].rate.rate, "31.87".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn test_create_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/order"))
        .and(body_json(serde_json::json!({
            "depositCoin": "btc",
            "destinationCoin": "eth",
            "depositCoinAmount": 0.5,
            "destinationAddress": { "address": "0xdest" },
            "refundAddress": { "address": "1Refund" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": "ord-123",
            "exchangeAddress": { "address": "3Deposit", "tag": null },
            "expectedDepositCoinAmount": 0.5,
            "expectedDestinationCoinAmount": 15.935
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = NewOrderParams::new("btc", "eth", Address::new("0xdest"))
        .deposit_coin_amount("0.5".parse().unwrap())
        .refund_address(Address::new("1Refund"));
    let order = client.create_order(&params).await.unwrap();

    assert_eq!(order.order_id, "ord-123");
    assert_eq!(order.exchange_address, Address::new("3Deposit"));
    assert_eq!(
        order.expected_destination_coin_amount,
        Some("15.935".parse().unwrap())
    );
}

#[tokio::test]
async fn test_get_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/order/ord-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": "ord-123",
            "status": "exchanging",
            "depositCoin": "btc",
            "destinationCoin": "eth",
            "depositCoinAmount": 0.5,
            "exchangeAddress": { "address": "3Deposit" },
            "destinationAddress": { "address": "0xdest" },
            "inputTransactionHash": "f00d",
            "createdAt": 1_700_000_000_000_i64,
            "validTill": 1_700_003_600_000_i64
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client.get_order("ord-123").await.unwrap();

    assert_eq!(order.status, OrderStatus::Exchanging);
    assert_eq!(order.input_transaction_hash.as_deref(), Some("f00d"));
    assert!(order.output_transaction_hash.is_none());
    let valid_for = order.valid_till.unwrap() - order.created_at.unwrap();
    assert_eq!(valid_for.whole_seconds(), 3600);
}

#[tokio::test]
async fn test_get_orders() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "code": "OK",
            "message": "OK",
            "data": {
                "count": 1,
                "items": [{
                    "orderId": "ord-1",
                    "status": "complete",
                    "depositCoin": "btc",
                    "destinationCoin": "eth"
                }]
            }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client.get_orders().await.unwrap();

    assert_eq!(orders.count, Some(1));
    assert_eq!(orders.items[0].order_id, "ord-1");
    assert!(orders.items[0].status.is_final());
}

#[tokio::test]
async fn test_unauthorized_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coins"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "code": "UNAUTHORIZED",
            "message": "Invalid API key"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_coins().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    match err {
        CoinSwitchError::Unauthorized(api) => {
            assert_eq!(api.message.as_deref(), Some("Invalid API key"));
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_server_error_surfaces_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_rate("btc", "eth").await.unwrap_err();

    match err {
        CoinSwitchError::Api(api) => {
            assert_eq!(api.status, 503);
            assert!(api.message.is_none());
            assert_eq!(api.body, "upstream unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coins"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"symbol\": \"btc\""))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_coins().await.unwrap_err();

    match err {
        CoinSwitchError::Decode { body, .. } => assert_eq!(body, "[{\"symbol\": \"btc\""),
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_request_is_reusable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = client.get_orders();
    assert!(request.execute().await.unwrap().is_empty());
    assert!(request.execute().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transport_error() {
    let client = CoinSwitchClient::builder(Credentials::new("test_key"))
        .base_url("http://127.0.0.1:1")
        .build();

    let err = client.get_coins().await.unwrap_err();
    assert!(matches!(err, CoinSwitchError::Transport(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coins"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = CoinSwitchClient::builder(Credentials::new("test_key"))
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build();

    let err = client.get_coins().await.unwrap_err();
    assert!(err.is_timeout());
}
