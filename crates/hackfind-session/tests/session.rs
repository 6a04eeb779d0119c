//! End-to-end session tests against mocked geocoding and search providers.

use std::time::Duration;

use hackfind_core::Strictness;
use hackfind_geocode::NominatimClient;
use hackfind_search::TavilyClient;
use hackfind_session::{LocationSession, SessionConfig, SessionError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> SessionConfig {
    SessionConfig {
        step_timeout_secs: 30,
        max_results: 5,
        strictness: Strictness::Strict,
    }
}

fn session_against(
    geocode_url: &str,
    search_url: &str,
    api_key: Option<&str>,
    config: &SessionConfig,
) -> LocationSession {
    let geocoder = NominatimClient::with_base_url(30, "HackathonFinder/1.0", geocode_url)
        .expect("geocoder construction should not fail");
    let searcher = TavilyClient::with_base_url(api_key.map(str::to_owned), 30, search_url)
        .expect("searcher construction should not fail");
    LocationSession::new(geocoder, searcher, config)
}

async fn mock_geocode_success(server: &MockServer) {
    let body = serde_json::json!({
        "address": {
            "city": "San Francisco",
            "state": "California",
            "country": "United States"
        }
    });
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn location_event_accumulates_filtered_events() {
    let geocode_server = MockServer::start().await;
    let search_server = MockServer::start().await;

    mock_geocode_success(&geocode_server).await;

    let search_body = serde_json::json!({
        "results": [
            {
                "title": "SF Hacks 2026",
                "snippet": "A 48-hour hackathon in San Francisco, California.",
                "raw_content": "Held at the Moscone Center. Registration open.",
                "published_date": "2026-03-01"
            },
            {
                "title": "Upcoming Hackathons Near You",
                "snippet": "Browse hackathons in San Francisco, California.",
                "raw_content": "Held at various venues across California."
            }
        ]
    });
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&search_body))
        .mount(&search_server)
        .await;

    let mut session = session_against(
        &geocode_server.uri(),
        &search_server.uri(),
        Some("tvly-test"),
        &test_config(),
    );

    let events = session
        .on_location(37.77, -122.41)
        .await
        .expect("location event should not fail");

    assert_eq!(events.len(), 1, "generic listing should be filtered out");
    assert_eq!(events[0].name, "SF Hacks 2026");
    assert_eq!(events[0].location.as_deref(), Some("Near 37.77, -122.41"));
    assert_eq!(events[0].date.as_deref(), Some("2026-03-01"));

    let state = session.state();
    assert_eq!(state.accumulated.len(), 1);
    let (coord, recorded) = &state.accumulated[0];
    assert_eq!((coord.lat, coord.lng), (37.77, -122.41));
    assert_eq!(recorded, &events);
}

#[tokio::test]
async fn location_event_degrades_to_empty_when_collaborators_fail() {
    let geocode_server = MockServer::start().await;
    let search_server = MockServer::start().await;

    // Geocoder down; search server has no mocks, so any request 404s.
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&geocode_server)
        .await;

    let mut session = session_against(
        &geocode_server.uri(),
        &search_server.uri(),
        Some("tvly-test"),
        &test_config(),
    );

    let events = session
        .on_location(37.77, -122.41)
        .await
        .expect("collaborator failures must not surface");

    assert!(events.is_empty());
    let state = session.state();
    assert_eq!(state.accumulated.len(), 1);
    let (coord, recorded) = &state.accumulated[0];
    assert_eq!((coord.lat, coord.lng), (37.77, -122.41));
    assert!(recorded.is_empty());
}

#[tokio::test]
async fn missing_credential_degrades_to_empty() {
    let geocode_server = MockServer::start().await;
    let search_server = MockServer::start().await;
    mock_geocode_success(&geocode_server).await;

    let mut session = session_against(
        &geocode_server.uri(),
        &search_server.uri(),
        None,
        &test_config(),
    );

    let events = session
        .on_location(37.77, -122.41)
        .await
        .expect("missing credential must not surface");
    assert!(events.is_empty());
    assert_eq!(session.state().accumulated.len(), 1);
}

#[tokio::test]
async fn invalid_coordinate_surfaces_to_caller() {
    let geocode_server = MockServer::start().await;
    let search_server = MockServer::start().await;

    let mut session = session_against(
        &geocode_server.uri(),
        &search_server.uri(),
        Some("tvly-test"),
        &test_config(),
    );

    let err = session.on_location(123.0, 0.0).await.unwrap_err();
    assert!(matches!(err, SessionError::InvalidCoordinate(_)));
    assert!(session.state().accumulated.is_empty());
}

#[tokio::test]
async fn step_budget_overrun_surfaces_as_timeout() {
    let geocode_server = MockServer::start().await;
    let search_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "address": {} }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&geocode_server)
        .await;

    let config = SessionConfig {
        step_timeout_secs: 0,
        ..test_config()
    };
    let mut session = session_against(
        &geocode_server.uri(),
        &search_server.uri(),
        Some("tvly-test"),
        &config,
    );

    let err = session.on_location(37.77, -122.41).await.unwrap_err();
    assert!(matches!(err, SessionError::StepTimeout { budget_secs: 0 }));
    // A timed-out step records nothing and does not tear the session down.
    assert!(session.state().accumulated.is_empty());
    assert!(!session.terminated());
}

#[tokio::test]
async fn end_is_idempotent_and_run_returns() {
    let geocode_server = MockServer::start().await;
    let search_server = MockServer::start().await;

    let session = session_against(
        &geocode_server.uri(),
        &search_server.uri(),
        None,
        &test_config(),
    );

    let first = session.on_end();
    let second = session.on_end();
    assert!(first.end);
    assert!(second.end);
    assert!(session.terminated());

    tokio::time::timeout(Duration::from_secs(1), session.run())
        .await
        .expect("run must return once the termination flag is set");
}

#[tokio::test]
async fn run_suspends_until_end_event() {
    let geocode_server = MockServer::start().await;
    let search_server = MockServer::start().await;

    let session = session_against(
        &geocode_server.uri(),
        &search_server.uri(),
        None,
        &test_config(),
    );

    let run_and_signal = async {
        tokio::join!(session.run(), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            session.on_end();
        });
    };

    tokio::time::timeout(Duration::from_secs(1), run_and_signal)
        .await
        .expect("run must return after the end event");
}

#[tokio::test]
async fn late_location_event_is_still_processed() {
    let geocode_server = MockServer::start().await;
    let search_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&geocode_server)
        .await;

    let mut session = session_against(
        &geocode_server.uri(),
        &search_server.uri(),
        None,
        &test_config(),
    );

    session.on_end();
    let events = session
        .on_location(37.77, -122.41)
        .await
        .expect("late events are accepted");
    assert!(events.is_empty());
    assert_eq!(session.state().accumulated.len(), 1);
    assert!(session.terminated());
}
