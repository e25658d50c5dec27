use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use rust_edurecords::models::Resource;
use rust_edurecords::storage::{HttpRecordStore, RecordStore};

/// 单次应答的 HTTP 服务，返回收到的原始请求文本
async fn respond_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&request) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (base, handle)
}

/// 头部结束且按 Content-Length 读完请求体
fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(split) = text.find("\r\n\r\n") else {
        return false;
    };
    let length = text[..split]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= split + 4 + length
}

#[tokio::test]
async fn list_parses_json_array() {
    let (base, server) = respond_once("200 OK", r#"[{"id":1,"name":"Math"}]"#).await;
    let store = HttpRecordStore::new(&base).unwrap();

    let items = store.list(Resource::Courses).await.unwrap();
    assert_eq!(items, vec![json!({"id": 1, "name": "Math"})]);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /courses HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
}

#[tokio::test]
async fn non_success_status_carries_body_verbatim() {
    let (base, server) =
        respond_once("422 Unprocessable Entity", r#"{"error":"name missing"}"#).await;
    let store = HttpRecordStore::new(&base).unwrap();

    let err = store
        .create(Resource::Students, json!({"firstName": "Ana"}))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E002");
    assert_eq!(
        err.message(),
        r#"422 Unprocessable Entity - {"error":"name missing"}"#
    );

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /students HTTP/1.1"));
    assert!(request.ends_with(r#"{"firstName":"Ana"}"#));
}

#[tokio::test]
async fn empty_body_is_success() {
    let (base, server) = respond_once("200 OK", "").await;
    let store = HttpRecordStore::new(&base).unwrap();

    store.delete(Resource::Grades, 7).await.unwrap();
    let request = server.await.unwrap();
    assert!(request.starts_with("DELETE /grades/7 HTTP/1.1"));
}

#[tokio::test]
async fn update_sends_partial_body() {
    let (base, server) = respond_once("200 OK", r#"{"id":3,"prova":9,"trabalho":8}"#).await;
    let store = HttpRecordStore::new(&base).unwrap();

    let updated = store
        .update(Resource::Grades, 3, json!({"prova": 9, "trabalho": 8}))
        .await
        .unwrap();
    assert_eq!(updated, Some(json!({"id": 3, "prova": 9, "trabalho": 8})));

    let request = server.await.unwrap();
    assert!(request.starts_with("PUT /grades/3 HTTP/1.1"));
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let store = HttpRecordStore::new(&base).unwrap();
    let err = store.list(Resource::Students).await.unwrap_err();
    assert_eq!(err.code(), "E001");
}
