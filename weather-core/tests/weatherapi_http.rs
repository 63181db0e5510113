//! Drives the WeatherAPI client against a one-shot local HTTP server.

use reqwest::Client;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};
use weather_core::{FetchError, Language, WeatherApiProvider, WeatherSource};

const FIXTURE: &str = include_str!("fixtures/current_tashkent.json");

/// Serve exactly one response and hand back the request line that was received.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");

        let mut received = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.expect("read");
            if n == 0 {
                break;
            }
            received.extend_from_slice(&chunk[..n]);
            if received.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&received).lines().next().unwrap_or_default().to_string()
    });

    (format!("http://{addr}/v1"), handle)
}

fn provider(base_url: String) -> WeatherApiProvider {
    let http = Client::builder().no_proxy().build().expect("client");
    WeatherApiProvider::with_client("TEST_KEY".to_string(), base_url, http)
}

#[tokio::test]
async fn ok_response_is_decoded() {
    let (base, server) = serve_once("200 OK", FIXTURE).await;

    let reading = provider(base).current("Tashkent", Language::Ru).await.expect("reading");
    let request_line = server.await.expect("server task");

    assert_eq!(reading.location.name, "Tashkent");
    assert_eq!(reading.current.wind_dir, "NW");
    assert_eq!(
        request_line,
        "GET /v1/current.json?key=TEST_KEY&q=Tashkent&aqi=no&lang=ru HTTP/1.1"
    );
}

#[tokio::test]
async fn error_status_is_not_decoded() {
    // Valid reading JSON behind a 400: the status alone decides.
    let (base, server) = serve_once("400 Bad Request", FIXTURE).await;

    let err = provider(base).current("Nowhere", Language::En).await.unwrap_err();
    server.await.expect("server task");

    assert!(matches!(err, FetchError::Status(400)), "got {err:?}");
}

#[tokio::test]
async fn empty_location_is_city_not_found() {
    let (base, server) =
        serve_once("200 OK", r#"{"location":{"name":""},"current":{"temp_c":1.0}}"#).await;

    let err = provider(base).current("Atlantis", Language::Uz).await.unwrap_err();
    server.await.expect("server task");

    assert!(matches!(err, FetchError::CityNotFound), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let (base, server) = serve_once("200 OK", "not json").await;

    let err = provider(base).current("Tashkent", Language::En).await.unwrap_err();
    server.await.expect("server task");

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = provider(format!("http://{addr}/v1"))
        .current("Tashkent", Language::En)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}
