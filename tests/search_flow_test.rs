use anyhow::Result;
use httpmock::prelude::*;
use realm_search::{
    ElectrumGateway, FailureReason, LookupOutcome, RealmRecord, SearchRealmFlow, Settings,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn test_settings(server: &MockServer) -> Settings {
    Settings {
        gateway_url: server.base_url(),
        settle_delay_ms: 10,
        request_timeout_secs: 5,
    }
}

fn flow_against(server: &MockServer) -> SearchRealmFlow<ElectrumGateway> {
    let settings = test_settings(server);
    let gateway = ElectrumGateway::new(&settings).unwrap();
    SearchRealmFlow::new(Arc::new(gateway), Duration::from_millis(10))
}

#[tokio::test]
async fn claimed_realm_resolves_end_to_end() -> Result<()> {
    let server = MockServer::start();

    let info_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/blockchain.atomicals.get_realm_info")
            .query_param("params", r#"["alice"]"#);
        then.status(200).json_body(json!({
            "success": true,
            "response": {"result": {"atomical_id": "abc123"}}
        }));
    });

    let location_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/blockchain.atomicals.get_location")
            .query_param("params", r#"["abc123"]"#);
        then.status(200).json_body(json!({
            "success": true,
            "response": {"location": "outpoint:0", "owner": "bc1qalice"}
        }));
    });

    let mut flow = flow_against(&server);
    let store = flow.store();
    flow.change_name("alice");
    flow.lookup_requested();

    let outcome = store.wait_for_terminal().await;

    info_mock.assert();
    location_mock.assert();
    assert_eq!(
        outcome,
        LookupOutcome::Found(RealmRecord::new(json!({
            "location": "outpoint:0",
            "owner": "bc1qalice"
        })))
    );

    Ok(())
}

#[tokio::test]
async fn unclaimed_realm_reports_not_found_without_location_call() -> Result<()> {
    let server = MockServer::start();

    // 沒有 atomical_id 就是沒被認領
    server.mock(|when, then| {
        when.method(GET).path("/blockchain.atomicals.get_realm_info");
        then.status(200)
            .json_body(json!({"success": true, "response": {"result": {}}}));
    });

    let location_mock = server.mock(|when, then| {
        when.method(GET).path("/blockchain.atomicals.get_location");
        then.status(200).json_body(json!({"success": true, "response": {}}));
    });

    let mut flow = flow_against(&server);
    let store = flow.store();
    flow.change_name("nobody");
    flow.lookup_requested();

    let outcome = store.wait_for_terminal().await;

    assert_eq!(outcome, LookupOutcome::Failed(FailureReason::NotFound));
    location_mock.assert_hits(0);

    Ok(())
}

#[tokio::test]
async fn http_404_reports_not_found() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/blockchain.atomicals.get_realm_info");
        then.status(404);
    });

    let mut flow = flow_against(&server);
    let store = flow.store();
    flow.change_name("alice");
    flow.lookup_requested();

    assert_eq!(
        store.wait_for_terminal().await,
        LookupOutcome::Failed(FailureReason::NotFound)
    );

    Ok(())
}

#[tokio::test]
async fn server_error_reports_transient_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/blockchain.atomicals.get_realm_info");
        then.status(500);
    });

    let mut flow = flow_against(&server);
    let store = flow.store();
    flow.change_name("alice");
    flow.lookup_requested();

    assert_eq!(
        store.wait_for_terminal().await,
        LookupOutcome::Failed(FailureReason::TransientError)
    );

    Ok(())
}

#[tokio::test]
async fn gateway_envelope_failure_reports_transient_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/blockchain.atomicals.get_realm_info");
        then.status(200)
            .json_body(json!({"success": false, "message": "not synced"}));
    });

    let mut flow = flow_against(&server);
    let store = flow.store();
    flow.change_name("alice");
    flow.lookup_requested();

    assert_eq!(
        store.wait_for_terminal().await,
        LookupOutcome::Failed(FailureReason::TransientError)
    );

    Ok(())
}

#[tokio::test]
async fn unreachable_gateway_reports_rate_limited() -> Result<()> {
    // 沒人在聽的 port，連線會直接被拒絕
    let settings = Settings {
        gateway_url: "http://127.0.0.1:9".to_string(),
        settle_delay_ms: 10,
        request_timeout_secs: 5,
    };
    let gateway = ElectrumGateway::new(&settings).unwrap();
    let mut flow = SearchRealmFlow::new(Arc::new(gateway), Duration::from_millis(10));
    let store = flow.store();
    flow.change_name("alice");
    flow.lookup_requested();

    assert_eq!(
        store.wait_for_terminal().await,
        LookupOutcome::Failed(FailureReason::RateLimited)
    );

    Ok(())
}

#[tokio::test]
async fn empty_name_never_touches_the_gateway() -> Result<()> {
    let server = MockServer::start();
    let info_mock = server.mock(|when, then| {
        when.method(GET).path("/blockchain.atomicals.get_realm_info");
        then.status(200).json_body(json!({"success": true, "response": {}}));
    });

    let mut flow = flow_against(&server);
    let store = flow.store();
    flow.change_name("   ");
    flow.lookup_requested();

    assert_eq!(
        store.wait_for_terminal().await,
        LookupOutcome::Failed(FailureReason::EmptyQuery)
    );
    info_mock.assert_hits(0);

    Ok(())
}
