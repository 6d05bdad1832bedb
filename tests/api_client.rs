use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use launch_tracker::{
    api::{LaunchApi, SpaceXClient},
    config::ApiConfig,
};

const LAUNCHPAD_JSON: &str = r#"{
    "id": "5e9e4502f509094188566f88",
    "name": "KSC LC 39A",
    "full_name": "Kennedy Space Center Historic Launch Complex 39A",
    "locality": "Cape Canaveral",
    "region": "Florida",
    "latitude": 28.6080585,
    "longitude": -80.6039558,
    "status": "active",
    "launch_attempts": 55,
    "launch_successes": 55,
    "details": null
}"#;

const LAUNCH_PAGE_JSON: &str = r#"{
    "docs": [
        {
            "id": "633f72130531f07b4fdf59c3",
            "name": "USSF-67",
            "date_utc": "2023-01-15T22:56:00.000Z",
            "success": true,
            "links": { "patch": { "small": null, "large": null }, "webcast": null, "wikipedia": null },
            "launchpad": "5e9e4502f509094188566f88",
            "details": null,
            "flight_number": 193
        }
    ],
    "totalDocs": 205,
    "limit": 1,
    "offset": 0
}"#;

/// Read one HTTP request, headers and body
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Answer a single request with a canned response. Returns the base URL and
/// a receiver for the raw request text.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        tx.send(request).ok();
    });

    (format!("http://{}", addr), rx)
}

fn client(base_url: String) -> SpaceXClient {
    SpaceXClient::new(&ApiConfig {
        base_url,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn list_launches_posts_page_query() {
    let (base_url, request) = serve_once("200 OK", LAUNCH_PAGE_JSON).await;

    let launches = client(base_url).list_launches(20, 40).await.unwrap();
    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0].name, "USSF-67");
    assert_eq!(launches[0].flight_number, 193);

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /v5/launches/query HTTP/1.1"));
    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(body["options"]["limit"], 20);
    assert_eq!(body["options"]["offset"], 40);
    assert_eq!(body["options"]["sort"]["date_utc"], "desc");
}

#[tokio::test]
async fn get_launchpad_by_id() {
    let (base_url, request) = serve_once("200 OK", LAUNCHPAD_JSON).await;

    let pad = client(base_url)
        .get_launchpad("5e9e4502f509094188566f88")
        .await
        .unwrap();
    assert_eq!(pad.name, "KSC LC 39A");
    assert_eq!(pad.details, None);

    let request = request.await.unwrap();
    assert!(request.starts_with("GET /v4/launchpads/5e9e4502f509094188566f88 HTTP/1.1"));
}

#[tokio::test]
async fn missing_launchpad_carries_status() {
    let (base_url, _request) = serve_once("404 Not Found", "Not Found").await;

    let err = client(base_url).get_launchpad("nope").await.unwrap_err();

    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "Failed to fetch launchpad: Not Found");
}

#[tokio::test]
async fn server_error_on_launches() {
    let (base_url, _request) = serve_once("500 Internal Server Error", "{}").await;

    let err = client(base_url).list_launches(20, 0).await.unwrap_err();

    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "Failed to fetch launches: Internal Server Error");
}

#[tokio::test]
async fn malformed_body_is_a_network_error() {
    let (base_url, _request) = serve_once("200 OK", "{\"docs\": 3}").await;

    let err = client(base_url).list_launches(20, 0).await.unwrap_err();

    assert_eq!(err.status, None);
}

#[tokio::test]
async fn refused_connection_has_no_status() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{}", addr))
        .get_launchpad("5e9e4502f509094188566f88")
        .await
        .unwrap_err();

    assert_eq!(err.status, None);
    assert_eq!(err.message, "Network error occurred");
}
