//! Integration tests
//!
//! End-to-end requests through the complete route tree, backed by the
//! recording gateway instead of MySQL.

use std::sync::Arc;

use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::test::request;

use crate::{
    domain::{ProcedureArg, ViewName},
    infrastructure::http::server::HttpServer,
    tests::{common::RecordingGateway, config::test_config},
};

/// Send one request through a fresh server and decode the JSON reply
async fn send(
    gateway: Arc<RecordingGateway>,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let server = HttpServer::new(test_config(), gateway).unwrap();
    let routes = server.create_routes().unwrap();

    let mut builder = request().method(method).path(path);
    if let Some(body) = body {
        builder = builder.json(&body);
    }
    let response = builder.reply(&routes).await;

    let status = response.status();
    let body = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
    (status, body)
}

fn airport() -> Value {
    json!({
        "ip_airportID": "ATL",
        "ip_airport_name": "Atlanta Hartsfield_Jackson International",
        "ip_city": "Atlanta",
        "ip_state": "Georgia",
        "ip_country": "USA",
        "ip_locationID": "port_1"
    })
}

#[tokio::test]
async fn add_airport_dispatches_six_arguments() {
    let gateway = Arc::new(RecordingGateway::new());
    let (status, body) = send(gateway.clone(), "POST", "/api/airports", Some(airport())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK"}));

    let calls = gateway.calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "add_airport");
    assert_eq!(calls[0].1.len(), 6);
    assert_eq!(calls[0].1[0], ProcedureArg::Text("ATL".to_string()));
}

#[tokio::test]
async fn invalid_airport_is_rejected_without_dispatch() {
    let gateway = Arc::new(RecordingGateway::new());

    let mut payload = airport();
    payload["ip_airportID"] = json!("US");
    let (status, body) = send(gateway.clone(), "POST", "/api/airports", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "'ip_airportID' must be exactly 3 characters");

    let mut payload = airport();
    payload["ip_country"] = json!("USAX");
    let (status, body) = send(gateway.clone(), "POST", "/api/airports", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "'ip_country' must be exactly 3 characters");

    assert!(gateway.calls().await.is_empty());
}

#[tokio::test]
async fn add_airplane_branches_on_plane_type() {
    let gateway = Arc::new(RecordingGateway::new());
    let airplane = |plane_type: &str| {
        json!({
            "ip_airlineID": "Delta",
            "ip_tail_num": "n106js",
            "ip_seat_capacity": 200,
            "ip_speed": 800,
            "ip_plane_type": plane_type,
            "ip_maintenanced": false
        })
    };

    let (status, body) = send(gateway.clone(), "POST", "/api/airplanes", Some(airplane("airbus"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'ip_neo' for Airbus");

    let (status, body) = send(gateway.clone(), "POST", "/api/airplanes", Some(airplane("Boeing"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'ip_model' for Boeing");

    let mut boeing = airplane("Boeing");
    boeing["ip_model"] = json!("737");
    boeing["ip_neo"] = json!(true);
    let (status, _) = send(gateway.clone(), "POST", "/api/airplanes", Some(boeing)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(gateway.clone(), "POST", "/api/airplanes", Some(airplane("Cessna"))).await;
    assert_eq!(status, StatusCode::OK);

    let calls = gateway.calls().await;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1[7], ProcedureArg::Text("737".to_string()));
    assert!(calls[0].1[8].is_null());
    assert!(calls[1].1[7].is_null());
    assert!(calls[1].1[8].is_null());
}

#[tokio::test]
async fn add_person_employee_drops_customer_fields() {
    let gateway = Arc::new(RecordingGateway::new());
    let payload = json!({
        "ip_personID": "p61",
        "ip_first_name": "Sabrina",
        "ip_last_name": "",
        "ip_locationID": "port_1",
        "ip_taxID": "T1",
        "ip_experience": "5"
    });

    let (status, _) = send(gateway.clone(), "POST", "/api/people", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let calls = gateway.calls().await;
    let args = &calls[0].1;
    assert_eq!(args.len(), 8);
    assert!(args[2].is_null());
    assert_eq!(args[5], ProcedureArg::Integer(5));
    assert!(args[6].is_null());
    assert!(args[7].is_null());
}

#[tokio::test]
async fn offer_flight_checks_support_pair_and_time() {
    let gateway = Arc::new(RecordingGateway::new());
    let flight = json!({
        "ip_flightID": "dl_42",
        "ip_routeID": "americas_one",
        "ip_support_airline": "Delta",
        "ip_progress": 0,
        "ip_next_time": "09:30:00",
        "ip_cost": 200
    });

    let (status, body) = send(gateway.clone(), "POST", "/api/flights", Some(flight.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Both 'ip_support_airline' and 'ip_support_tail' must be provided together or both omitted"
    );

    let mut late = flight.clone();
    late["ip_support_tail"] = json!("n106js");
    late["ip_next_time"] = json!("25:00:00");
    let (status, body) = send(gateway.clone(), "POST", "/api/flights", Some(late)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "'ip_next_time' must be in HH:MM:SS format");

    let mut ok = flight;
    ok["ip_support_tail"] = json!("n106js");
    let (status, _) = send(gateway.clone(), "POST", "/api/flights", Some(ok)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(gateway.calls().await[0].1.len(), 7);
}

#[tokio::test]
async fn flight_actions_take_identifier_from_path() {
    let cases = [
        ("POST", "/api/flights/dl_10/land", "flight_landing"),
        ("POST", "/api/flights/dl_10/takeoff", "flight_takeoff"),
        ("POST", "/api/flights/dl_10/board", "passengers_board"),
        ("POST", "/api/flights/dl_10/disembark", "passengers_disembark"),
        ("POST", "/api/flights/dl_10/recycle-crew", "recycle_crew"),
        ("DELETE", "/api/flights/dl_10", "retire_flight"),
    ];

    for (method, path, procedure) in cases {
        let gateway = Arc::new(RecordingGateway::new());
        let (status, body) = send(gateway.clone(), method, path, None).await;

        assert_eq!(status, StatusCode::OK, "{} {}", method, path);
        assert_eq!(body["status"], "OK");
        let calls = gateway.calls().await;
        assert_eq!(calls, vec![(procedure.to_string(), vec![ProcedureArg::Text("dl_10".to_string())])]);
    }
}

#[tokio::test]
async fn path_and_body_operations() {
    let gateway = Arc::new(RecordingGateway::new());

    let (status, _) = send(
        gateway.clone(),
        "POST",
        "/api/flights/dl_10/assign-pilot",
        Some(json!({"ip_personID": "p1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        gateway.clone(),
        "POST",
        "/api/pilots/p1/license",
        Some(json!({"ip_license": "Boeing"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(gateway.clone(), "POST", "/api/flights/dl_10/assign-pilot", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing or invalid 'ip_personID': must be a string");

    let calls = gateway.calls().await;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "assign_pilot");
    assert_eq!(
        calls[0].1,
        vec![ProcedureArg::Text("dl_10".to_string()), ProcedureArg::Text("p1".to_string())]
    );
    assert_eq!(calls[1].0, "grant_or_revoke_pilot_license");
    assert_eq!(calls[1].1[0], ProcedureArg::Text("p1".to_string()));
}

#[tokio::test]
async fn encoded_path_identifiers_are_decoded() {
    let gateway = Arc::new(RecordingGateway::new());

    let (status, _) = send(gateway.clone(), "POST", "/api/flights/dl%2010/land", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        gateway.clone(),
        "POST",
        "/api/pilots/%20p1%20/license",
        Some(json!({"ip_license": "Boeing"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let calls = gateway.calls().await;
    assert_eq!(
        calls,
        vec![
            ("flight_landing".to_string(), vec![ProcedureArg::Text("dl 10".to_string())]),
            (
                "grant_or_revoke_pilot_license".to_string(),
                vec![
                    ProcedureArg::Text(" p1 ".to_string()),
                    ProcedureArg::Text("Boeing".to_string())
                ]
            ),
        ]
    );
}

#[tokio::test]
async fn blank_or_undecodable_path_identifiers_are_rejected() {
    let gateway = Arc::new(RecordingGateway::new());

    let (status, body) = send(gateway.clone(), "POST", "/api/flights/%20/land", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing URL parameter 'flight_id'");

    let (status, body) = send(gateway.clone(), "DELETE", "/api/flights/%20%20", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing URL parameter 'flight_id'");

    let (status, body) = send(gateway.clone(), "POST", "/api/flights/%FF/takeoff", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL path segment is not valid UTF-8");

    assert!(gateway.calls().await.is_empty());
}

#[tokio::test]
async fn simulation_cycle_needs_no_body() {
    let gateway = Arc::new(RecordingGateway::new());
    let (status, body) = send(gateway.clone(), "POST", "/api/simulation-cycle", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK"}));
    assert_eq!(gateway.calls().await, vec![("simulation_cycle".to_string(), vec![])]);
}

#[tokio::test]
async fn downstream_error_passes_through_verbatim() {
    let message = "Duplicate entry 'ATL' for key 'airport.PRIMARY'";
    let gateway = Arc::new(RecordingGateway::failing(message));
    let (status, body) = send(gateway.clone(), "POST", "/api/airports", Some(airport())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": message}));
    assert_eq!(gateway.calls().await.len(), 1);
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let gateway = Arc::new(RecordingGateway::new());
    let server = HttpServer::new(test_config(), gateway.clone()).unwrap();
    let routes = server.create_routes().unwrap();

    let res = request()
        .method("POST")
        .path("/api/airports")
        .header("content-type", "application/json")
        .body("{\"ip_airportID\": ")
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let (status, body) = send(gateway.clone(), "POST", "/api/airports", Some(json!(["ATL"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Request body must be a JSON object");

    let (status, body) = send(gateway.clone(), "POST", "/api/airports", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing or invalid 'ip_airportID': must be a string");

    assert!(gateway.calls().await.is_empty());
}

#[tokio::test]
async fn views_are_allow_listed() {
    let row = json!({"departing_from": "ATL", "arriving_at": "LAX", "num_flights": 1, "next_arrival": "10:00:00"})
        .as_object()
        .cloned()
        .unwrap();
    let gateway = Arc::new(RecordingGateway::new().with_rows(vec![row]));

    let (status, body) = send(gateway.clone(), "GET", "/api/views/flights_in_the_air", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["next_arrival"], "10:00:00");

    let (status, body) = send(gateway.clone(), "GET", "/api/views/airplane", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid view"}));

    assert_eq!(gateway.view_reads().await, vec![ViewName::FlightsInTheAir]);
}

#[tokio::test]
async fn unknown_routes_and_methods() {
    let gateway = Arc::new(RecordingGateway::new());

    let (status, body) = send(gateway.clone(), "GET", "/api/runways", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));

    let (status, _) = send(gateway.clone(), "GET", "/api/airports", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(gateway.clone(), "GET", "/api/flights/dl_10/land", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    assert!(gateway.calls().await.is_empty());
}

#[tokio::test]
async fn health_reflects_database_reachability() {
    let (status, body) = send(Arc::new(RecordingGateway::new()), "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let gateway = Arc::new(RecordingGateway::unreachable("Connection refused"));
    let (status, body) = send(gateway, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["db"], "error");
    assert_eq!(body["message"], "Connection refused");
}

#[tokio::test]
async fn metrics_count_dispatched_operations() {
    let gateway = Arc::new(RecordingGateway::new());
    let server = HttpServer::new(test_config(), gateway).unwrap();
    let routes = server.create_routes().unwrap();

    request()
        .method("POST")
        .path("/api/flights/dl_10/land")
        .reply(&routes)
        .await;

    let res = request().method("GET").path("/api/metrics").reply(&routes).await;
    assert_eq!(res.status(), StatusCode::OK);
    let text = std::str::from_utf8(res.body()).unwrap();
    assert!(text.contains("flight_tracking_operations_total{operation=\"flight_landing\",outcome=\"success\"} 1"));
}

#[tokio::test]
async fn cors_headers_on_cross_origin_requests() {
    let gateway = Arc::new(RecordingGateway::new());
    let server = HttpServer::new(test_config(), gateway).unwrap();
    let routes = server.create_routes().unwrap();

    let res = request()
        .method("GET")
        .path("/api/health")
        .header("origin", "http://localhost:3000")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("access-control-allow-origin"));
}
