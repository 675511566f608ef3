//! Adapter behavior against a mock JSON-RPC endpoint.

use mockito::{Matcher, Server, ServerGuard};
use num_bigint::BigUint;
use serde_json::json;
use tee_identity::Address;
use tee_ledger::{LedgerClient, LedgerConfig, LedgerError};

fn contract() -> Address {
    "0x00000000000000000000000000000000000000ff".parse().unwrap()
}

fn account() -> Address {
    "0x1122334455667788990011223344556677889900".parse().unwrap()
}

fn client_for(server: &ServerGuard) -> LedgerClient {
    let config = LedgerConfig::new(server.url().parse().unwrap(), contract());
    LedgerClient::new(config).unwrap()
}

#[tokio::test]
async fn balance_is_queried_and_decoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "jsonrpc": "2.0",
            "method": "eth_call",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": format!("0x{:064x}", 1_000_000u64),
            })
            .to_string(),
        )
        .create_async()
        .await;

    let balance = client_for(&server)
        .get_account_balance(&account())
        .await
        .unwrap();
    assert_eq!(balance, BigUint::from(1_000_000u64));
    mock.assert_async().await;
}

#[tokio::test]
async fn call_data_carries_selector_and_account() {
    let mut server = Server::new_async().await;
    let expected = format!(
        "0x{}",
        hex::encode(tee_ledger::balance_call_data(&account()))
    );
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "params": [{"to": contract().to_string(), "data": expected}, "latest"],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"jsonrpc": "2.0", "id": 1, "result": format!("0x{:064x}", 0u64)}).to_string(),
        )
        .create_async()
        .await;

    let balance = client_for(&server)
        .get_account_balance(&account())
        .await
        .unwrap();
    assert_eq!(balance, BigUint::from(0u32));
    mock.assert_async().await;
}

#[tokio::test]
async fn rpc_error_is_surfaced() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32000, "message": "execution reverted"},
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client_for(&server)
        .get_account_balance(&account())
        .await
        .unwrap_err();
    match err {
        LedgerError::Rpc { code, message } => {
            assert_eq!(code, -32000);
            assert_eq!(message, "execution reverted");
        }
        other => panic!("expected rpc error, got {other}"),
    }
}

#[tokio::test]
async fn short_result_word_is_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": "0x1234"}).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .get_account_balance(&account())
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidResponse(_)));
}

#[tokio::test]
async fn non_string_result_is_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": 7}).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .get_account_balance(&account())
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidResponse(_)));
}

#[tokio::test]
async fn connectivity_probe_reports_both_ways() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "eth_chainId"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": "0x1"}).to_string())
        .create_async()
        .await;

    assert!(client_for(&server).is_connected().await);
    mock.assert_async().await;

    let mut broken = Server::new_async().await;
    let _mock = broken
        .mock("POST", "/")
        .with_status(500)
        .create_async()
        .await;
    assert!(!client_for(&broken).is_connected().await);
}
