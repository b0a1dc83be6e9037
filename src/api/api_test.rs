use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use super::*;
use crate::config::ClientConfig;
use crate::filter::FilterInputs;
use crate::test_support::png;

#[test]
fn error_detail_uses_detail_string() {
    assert_eq!(error_detail(r#"{"detail":"experiment not found"}"#, UPDATE_FAILED), "experiment not found");
}

#[test]
fn error_detail_falls_back_on_non_json_body() {
    assert_eq!(error_detail("<html>502 Bad Gateway</html>", SAVE_FAILED), "save failed");
    assert_eq!(error_detail("", DELETE_FAILED), "delete failed");
}

#[test]
fn error_detail_falls_back_on_missing_or_structured_detail() {
    assert_eq!(error_detail(r#"{"ok":false}"#, CREATE_FAILED), "create failed");
    assert_eq!(error_detail(r#"{"detail":"  "}"#, CREATE_FAILED), "create failed");
    assert_eq!(
        error_detail(r#"{"detail":[{"loc":["body","name"],"msg":"field required"}]}"#, CREATE_FAILED),
        "create failed"
    );
}

#[test]
fn api_error_displays_message_verbatim() {
    let err = ApiError::Server { status: 400, message: "only image files are supported".to_owned() };
    assert_eq!(err.to_string(), "only image files are supported");
    assert_eq!(ApiError::Transport("connection refused".to_owned()).message(), "connection refused");
}

#[test]
fn resolve_url_joins_relative_paths() {
    assert_eq!(
        resolve_url("http://127.0.0.1:8000", "/static/reactions/a.png"),
        "http://127.0.0.1:8000/static/reactions/a.png"
    );
    assert_eq!(resolve_url("http://h/", "static/a.png"), "http://h/static/a.png");
}

#[test]
fn resolve_url_passes_absolute_urls_through() {
    assert_eq!(resolve_url("http://h", "https://cdn.test/a.png"), "https://cdn.test/a.png");
}

#[test]
fn http_store_resolves_assets_against_configured_base() {
    let config = ClientConfig::new("http://lab.example:8000/").unwrap();
    let store = HttpStore::new(&config);
    assert_eq!(store.base(), "http://lab.example:8000");
    assert_eq!(store.asset_url("/static/reactions/x.png"), "http://lab.example:8000/static/reactions/x.png");
}

/// Serve exactly one request with `status` and a JSON `body`.
///
/// The handle resolves to the raw request as received.
async fn serve_once(status: &str, body: &str) -> (HttpStore, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });
    let store = HttpStore::new(&ClientConfig::new(&format!("http://{addr}")).unwrap());
    (store, server)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut raw = Vec::new();
    let mut buf = [0_u8; 4096];
    while !request_complete(&raw) {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&raw).into_owned()
}

fn request_complete(raw: &[u8]) -> bool {
    let Some(head_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&raw[..head_end]).to_ascii_lowercase();
    let body = &raw[head_end + 4..];
    if let Some(len) = head.lines().find_map(|line| line.strip_prefix("content-length:")) {
        return body.len() >= len.trim().parse::<usize>().unwrap();
    }
    if head.contains("transfer-encoding: chunked") {
        return body.ends_with(b"0\r\n\r\n");
    }
    true
}

#[tokio::test]
async fn server_detail_becomes_the_error_message() {
    let (store, server) = serve_once("400 Bad Request", r#"{"detail":"bad name"}"#).await;

    let err = store.create_notebook("lab").await.unwrap_err();
    assert_eq!(err, ApiError::Server { status: 400, message: "bad name".to_owned() });
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /notebooks HTTP/1.1"), "{request}");
    assert!(request.contains(r#""name":"lab""#), "{request}");
}

#[tokio::test]
async fn non_json_error_body_uses_operation_fallback() {
    let (store, server) = serve_once("500 Internal Server Error", "<html>oops</html>").await;

    let err = store.delete_experiment(9).await.unwrap_err();
    assert_eq!(err, ApiError::Server { status: 500, message: DELETE_FAILED.to_owned() });
    assert_eq!(err.to_string(), "delete failed");
    assert!(server.await.unwrap().starts_with("DELETE /experiments/9 HTTP/1.1"));
}

#[tokio::test]
async fn failed_list_reports_load_failed() {
    let (store, server) = serve_once("503 Service Unavailable", "").await;

    let err = store.list_notebooks().await.unwrap_err();
    assert_eq!(err.message(), "load failed");
    server.await.unwrap();
}

#[tokio::test]
async fn experiment_query_is_form_encoded_in_order() {
    let (store, server) = serve_once("200 OK", "[]").await;
    let filters = FilterInputs {
        date: "2024-01-01".to_owned(),
        start_date: "2023-01-01".to_owned(),
        end_date: String::new(),
        title: "a b&c".to_owned(),
    };

    let items = store.list_experiments(3, &filters.criteria()).await.unwrap();
    assert!(items.is_empty());
    let request = server.await.unwrap();
    assert!(
        request.starts_with("GET /experiments?notebook_id=3&date=2024-01-01&title=a+b%26c HTTP/1.1"),
        "{request}"
    );
}

#[tokio::test]
async fn list_notebooks_decodes_server_order() {
    let body = r#"[{"id":2,"name":"Organic","created_at":"2024-01-01T00:00:00"},{"id":1,"name":"Inorganic"}]"#;
    let (store, server) = serve_once("200 OK", body).await;

    let notebooks = store.list_notebooks().await.unwrap();
    let ids: Vec<_> = notebooks.iter().map(|nb| nb.id).collect();
    assert_eq!(ids, [2, 1]);
    assert!(server.await.unwrap().starts_with("GET /notebooks HTTP/1.1"));
}

#[tokio::test]
async fn upload_sends_multipart_file_field() {
    let (store, server) = serve_once("200 OK", r#"{"url":"/static/reactions/x.png"}"#).await;

    let url = store.upload_image(&png("flask.png")).await.unwrap();
    assert_eq!(url, "/static/reactions/x.png");
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /upload-reaction-image HTTP/1.1"), "{request}");
    assert!(request.to_ascii_lowercase().contains("content-type: multipart/form-data"), "{request}");
    assert!(request.contains(r#"name="file""#), "{request}");
    assert!(request.contains(r#"filename="flask.png""#), "{request}");
    assert!(request.contains("image/png"), "{request}");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let store = HttpStore::new(&ClientConfig::new(&format!("http://{addr}")).unwrap());

    let err = store.list_notebooks().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}
