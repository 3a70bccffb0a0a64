// Request-contract tests against a mock backend: each operation must issue
// the exact method, path, and parameter placement it is documented with.

use std::sync::Arc;
use std::time::Duration;

use device_dashboard::DashboardError;
use device_dashboard::application::alert_service::{AlertFilter, AlertService};
use device_dashboard::application::monitor_service::MonitorService;
use device_dashboard::application::report_service::ReportService;
use device_dashboard::application::simulation_service::SimulationService;
use device_dashboard::application::user_service::UserService;
use device_dashboard::infrastructure::config::BackendSettings;
use device_dashboard::infrastructure::http_client::ApiClient;
use device_dashboard::infrastructure::token_store::{MemoryTokenStore, TokenProvider};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer, token: Option<&str>) -> Arc<ApiClient> {
    client_with_timeouts(server, token, 5_000, 30_000).await
}

async fn client_with_timeouts(
    server: &MockServer,
    token: Option<&str>,
    timeout_ms: u64,
    export_timeout_ms: u64,
) -> Arc<ApiClient> {
    let tokens = Arc::new(MemoryTokenStore::default());
    if let Some(token) = token {
        tokens.store(token).await.unwrap();
    }
    let settings = BackendSettings {
        base_url: server.uri(),
        timeout_ms,
        export_timeout_ms,
    };
    Arc::new(ApiClient::new(&settings, tokens).unwrap())
}

#[tokio::test]
async fn test_login_posts_credentials_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/account/token/"))
        .and(query_param("username", "kate"))
        .and(query_param("password", "s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "token": "jwt-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = UserService::new(client(&server, None).await);
    let token = service.login("kate", "s3cret").await.unwrap();
    assert_eq!(token, "jwt-1");
}

#[tokio::test]
async fn test_login_rejection_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/account/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "wrong password"
        })))
        .mount(&server)
        .await;

    let service = UserService::new(client(&server, None).await);
    let err = service.login("kate", "nope").await.unwrap_err();
    assert!(matches!(err, DashboardError::Authentication(message) if message == "wrong password"));
}

#[tokio::test]
async fn test_device_listing_sends_pagination_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/components/user/devices"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "5"))
        .and(query_param("searchQuery", "pump"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "devices": [
                { "id": 3, "name": "Pump 3", "status": "running", "healthIndex": 91.0 }
            ],
            "pagination": { "total": 11, "page": 2, "pageSize": 5, "totalPages": 3 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = UserService::new(client(&server, Some("tok")).await);
    let page = service.devices(Some("pump"), 2, 5).await.unwrap();
    assert_eq!(page.devices.len(), 1);
    assert_eq!(page.devices[0].name, "Pump 3");
    assert_eq!(page.pagination.total_pages, 3);
}

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/components/user/devices/count"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "deviceCount": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = UserService::new(client(&server, Some("secret-token")).await);
    assert_eq!(service.device_count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_bearer_token_omitted_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/components/user/devices/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "deviceCount": 0
        })))
        .mount(&server)
        .await;

    let service = UserService::new(client(&server, None).await);
    service.device_count().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_register_posts_fields_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/account/register/"))
        .and(query_param("username", "kate"))
        .and(query_param("password", "s3cret"))
        .and(query_param("phone", "13800000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "registered"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = UserService::new(client(&server, None).await);
    service.register("kate", "s3cret", "13800000000").await.unwrap();
}

#[tokio::test]
async fn test_user_info_and_defective_devices_are_plain_gets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/account/info/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "kate",
            "email": "kate@example.com",
            "role": "0"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/components/user/devices/defective"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "devices": [{ "id": 5, "name": "Fan 5", "status": "degraded" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = UserService::new(client(&server, Some("tok")).await);

    let info = service.user_info().await.unwrap();
    assert_eq!(info.username, "kate");
    assert_eq!(info.email.as_deref(), Some("kate@example.com"));

    let defective = service.defective_devices().await.unwrap();
    assert_eq!(defective[0].status.as_deref(), Some("degraded"));
}

#[tokio::test]
async fn test_device_by_id_sends_id_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/components/getdevice"))
        .and(query_param("deviceId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "device": { "id": 42, "name": "Turbine 42", "status": "running", "healthIndex": 85.0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = UserService::new(client(&server, Some("tok")).await);
    let device = service.device_by_id(42).await.unwrap();
    assert_eq!(device.name, "Turbine 42");
}

#[tokio::test]
async fn test_unconfirmed_alerts_posts_json_filter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/alerts/getUnconfirmedAlerts"))
        .and(body_json(json!({ "page": 1, "pageSize": 10 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "total": 1,
            "alerts": [{
                "id": 7,
                "deviceId": 3,
                "deviceName": "Pump 3",
                "severity": "HIGH",
                "confirmed": false,
                "timestamp": "2026-08-01T09:30:00"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = AlertService::new(client(&server, Some("tok")).await);
    let page = service.unconfirmed_alerts(&AlertFilter::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.alerts[0].device_name, "Pump 3");
    assert!(!page.alerts[0].confirmed);
}

#[tokio::test]
async fn test_confirm_alerts_coerces_string_ids() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/alerts/confirmAlert"))
        .and(body_json(json!({ "alertIds": [1, 2] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "updatedCount": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = AlertService::new(client(&server, Some("tok")).await);
    assert_eq!(service.confirm_alerts(["1", "2"]).await.unwrap(), 2);
}

#[tokio::test]
async fn test_confirm_alerts_rejects_non_numeric_ids() {
    let server = MockServer::start().await;

    let service = AlertService::new(client(&server, Some("tok")).await);
    let err = service.confirm_alerts(["seven"]).await.unwrap_err();
    assert!(matches!(err, DashboardError::InvalidInput(_)));

    // Nothing went on the wire
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_alerts_sends_ids_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/alerts/deleteAlerts"))
        .and(body_json(json!({ "alertIds": [4, 5] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "updatedCount": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = AlertService::new(client(&server, Some("tok")).await);
    assert_eq!(service.delete_alerts(&[4, 5]).await.unwrap(), 2);
}

#[tokio::test]
async fn test_alert_export_is_binary_with_extended_timeout() {
    let server = MockServer::start().await;
    // Slower than the default timeout; only the export timeout lets this
    // response through.
    Mock::given(method("GET"))
        .and(path("/api/alerts/exportAlertsToXLSX"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(400))
                .set_body_bytes(b"PK\x03\x04fake-xlsx".to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = AlertService::new(client_with_timeouts(&server, Some("tok"), 200, 5_000).await);
    let bytes = service.export_alerts_xlsx().await.unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn test_monitor_paths_embed_device_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/monitor/42/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "values": [90.0, 88.0, 85.0]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/monitor/42/cards"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "cards": [
                { "name": "Temperature", "value": 61.2, "unit": "C", "health": 88.0 },
                { "name": "Vibration", "value": 2.4, "unit": "mm/s", "health": -1.0 }
            ],
            "totalPages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = MonitorService::new(client(&server, Some("tok")).await);
    let health = service.health_series(42).await.unwrap();
    assert_eq!(health.latest(), Some(85.0));

    let cards = service.metric_cards(42, 1, 12).await.unwrap();
    assert_eq!(cards.total_pages, 2);
    assert!(!cards.cards[1].has_gauge());
}

#[tokio::test]
async fn test_backend_envelope_failure_surfaces() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/monitor/42/energy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "device offline"
        })))
        .mount(&server)
        .await;

    let service = MonitorService::new(client(&server, Some("tok")).await);
    let err = service.energy_series(42).await.unwrap_err();
    assert!(matches!(err, DashboardError::Backend(message) if message == "device offline"));
}

#[tokio::test]
async fn test_http_status_failure_surfaces() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reports/alerts/getAllAlertStats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = ReportService::new(client(&server, Some("tok")).await);
    let err = service.all_alert_stats().await.unwrap_err();
    match err {
        DashboardError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_report_stats_and_attributes_contracts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reports/alerts/getWeeklyAlertStats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "days": [
                { "date": "2026-08-03", "count": 4 },
                { "date": "2026-08-04", "count": 1 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reports/devices/getDeviceAttributes"))
        .and(query_param("deviceId", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "deviceId": 9,
            "attributes": [
                { "name": "Temperature", "value": 61.2, "unit": "C" },
                { "name": "Pressure", "value": 3.1, "unit": "bar" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = ReportService::new(client(&server, Some("tok")).await);

    let weekly = service.weekly_alert_stats().await.unwrap();
    assert_eq!(weekly.days.len(), 2);
    assert_eq!(weekly.days[0].count, 4);

    let attributes = service.device_attributes(9).await.unwrap();
    assert_eq!(attributes.device_id, 9);
    assert_eq!(attributes.attributes[1].name, "Pressure");
}

#[tokio::test]
async fn test_model_listing_sends_search_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/simulation/getModels"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "10"))
        .and(query_param("searchQuery", "bearing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "models": [{ "id": 7, "name": "Bearing wear v2" }],
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = SimulationService::new(client(&server, Some("tok")).await);
    let page = service.models(Some("bearing"), 1, 10).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.models[0].id, 7);
}

#[tokio::test]
async fn test_report_export_sends_device_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reports/devices/exportDeviceAttributes"))
        .and(query_param("deviceId", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04attrs".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let service = ReportService::new(client(&server, Some("tok")).await);
    let bytes = service.export_device_attributes(9).await.unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn test_simulation_submit_sends_multipart_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/simulation/getSimulationResult"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "taskId": "t-1",
            "imageUrl": "/results/t-1.png",
            "damageLocation": "outer bearing race",
            "lifespan": 12.5,
            "healthIndex": 76.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = SimulationService::new(client(&server, Some("tok")).await);
    let result = service
        .submit(7, 42, "vibration.csv", b"ts,value\n0,1.0\n".to_vec())
        .await
        .unwrap();
    assert_eq!(result.task_id.as_deref(), Some("t-1"));
    assert_eq!(result.health_index, 76.0);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"modelId\""));
    assert!(body.contains("name=\"deviceId\""));
    assert!(body.contains("filename=\"vibration.csv\""));
}
