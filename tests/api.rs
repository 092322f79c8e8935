#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use paydesk::api::cache::{request_key, Query, ResponseCache};
    use paydesk::api::resources::{AdminExport, RecordQuery};
    use paydesk::api::{error_message, should_retry, ApiClient, ApiError};
    use paydesk::libs::config::{Config, ServerConfig};
    use paydesk::libs::pay_cycle::PayCycle;
    use paydesk::libs::records::AttendanceStatus;
    use paydesk::libs::upload::UploadKind;
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Local HTTP server answering each connection with the next scripted
    /// status (the last one repeats) after `delay`.
    struct StubServer {
        url: String,
        hits: Arc<AtomicUsize>,
        methods: Arc<parking_lot::Mutex<Vec<String>>>,
    }

    impl StubServer {
        async fn start(statuses: Vec<u16>, delay: Duration) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let url = format!("http://{}", listener.local_addr().unwrap());
            let hits = Arc::new(AtomicUsize::new(0));
            let methods = Arc::new(parking_lot::Mutex::new(Vec::new()));

            let (counter, seen) = (hits.clone(), methods.clone());
            tokio::spawn(async move {
                while let Ok((mut socket, _)) = listener.accept().await {
                    let n = counter.fetch_add(1, Ordering::SeqCst);
                    let status = statuses.get(n).or(statuses.last()).copied().unwrap_or(200);
                    let seen = seen.clone();
                    tokio::spawn(async move {
                        let request = read_request(&mut socket).await;
                        seen.lock().push(request.split(' ').next().unwrap_or_default().to_string());
                        tokio::time::sleep(delay).await;
                        let body = if status < 300 { r#"{"data": []}"# } else { r#"{"message": "token not ready"}"# };
                        let response = format!(
                            "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        socket.write_all(response.as_bytes()).await.unwrap();
                        socket.shutdown().await.ok();
                    });
                }
            });

            StubServer { url, hits, methods }
        }

        fn client(&self, retry_delay: Duration) -> ApiClient {
            ApiClient::new(&self.url, Some("token".to_string()), Duration::from_secs(60), retry_delay)
        }

        fn hits(&self) -> usize {
            self.hits.load(Ordering::SeqCst)
        }
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    fn query(pairs: &[(&str, &str)]) -> Query {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_request_key_sorts_parameters() {
        let a = query(&[("startDate", "2025-03-06"), ("endDate", "2025-04-05")]);
        let b = query(&[("endDate", "2025-04-05"), ("startDate", "2025-03-06")]);
        assert_eq!(request_key("/attendance/", &a), request_key("attendance", &b));
        assert_eq!(request_key("attendance", &a), "attendance?endDate=2025-04-05&startDate=2025-03-06");
        assert_eq!(request_key("tags", &Query::new()), "tags");
    }

    #[test]
    fn test_cache_hit_and_invalidation() {
        let cache = ResponseCache::new(Duration::from_secs(120));
        cache.insert("attendance?status=LATE", json!({"data": [1]}));
        cache.insert("attendance/a1", json!({"data": {}}));
        cache.insert("breaks", json!({"data": []}));
        cache.insert("attendance-archive", json!({"data": []}));

        assert_eq!(cache.get("attendance?status=LATE"), Some(json!({"data": [1]})));

        cache.invalidate("attendance/a1");
        assert!(cache.get("attendance?status=LATE").is_none());
        assert!(cache.get("attendance/a1").is_none());
        assert!(cache.get("breaks").is_some());
        assert!(cache.get("attendance-archive").is_some());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_ttl_never_serves() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.insert("employees", json!({"data": []}));
        assert!(cache.get("employees").is_none());
    }

    #[tokio::test]
    async fn test_request_lock_is_shared_and_released() {
        let cache = Arc::new(ResponseCache::new(Duration::from_secs(60)));
        let first = cache.request_lock("attendance");
        let second = cache.request_lock("attendance");
        assert!(Arc::ptr_eq(&first, &second));

        let guard = first.lock().await;
        assert!(second.try_lock().is_err());
        drop(guard);

        drop(first);
        drop(second);
        cache.release_lock("attendance");
        let fresh = cache.request_lock("attendance");
        assert_eq!(Arc::strong_count(&fresh), 2);
    }

    #[test]
    fn test_should_retry_only_first_unauthorized() {
        assert!(should_retry(StatusCode::UNAUTHORIZED, 0));
        assert!(!should_retry(StatusCode::UNAUTHORIZED, 1));
        assert!(!should_retry(StatusCode::FORBIDDEN, 0));
        assert!(!should_retry(StatusCode::INTERNAL_SERVER_ERROR, 0));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"message": "Record locked"}"#), "Record locked");
        assert_eq!(error_message(r#"{"error": "Unauthorized"}"#), "Unauthorized");
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_message("   "), "no details provided");
    }

    #[test]
    fn test_record_query_parameters() {
        let cycle = PayCycle::current(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()).unwrap();
        let mut query = RecordQuery::for_cycle(&cycle).employee(Some("e9".to_string()));
        query.status = Some(AttendanceStatus::HalfDay);

        let params = query.to_query();
        assert_eq!(params.get("startDate").map(String::as_str), Some("2025-03-06"));
        assert_eq!(params.get("endDate").map(String::as_str), Some("2025-04-05"));
        assert_eq!(params.get("employeeId").map(String::as_str), Some("e9"));
        assert_eq!(params.get("status").map(String::as_str), Some("HALF_DAY"));
        assert!(RecordQuery::default().to_query().is_empty());
    }

    #[test]
    fn test_endpoints() {
        let client = ApiClient::new("http://localhost:3000/api/", None, Duration::from_secs(1), Duration::ZERO);
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.url("/attendance"), "http://localhost:3000/api/attendance");
        assert_eq!(client.url(UploadKind::Csv.endpoint()), "http://localhost:3000/api/attendance/upload/csv");
        assert_eq!(AdminExport::Penalties.path(), "admin/export/penalties");
        assert!(!client.has_token());
    }

    #[test]
    fn test_client_requires_server_config() {
        let missing = ApiClient::from_config(&Config::default());
        assert!(matches!(missing, Err(ApiError::NotConfigured)));

        let blank = Config {
            server: Some(ServerConfig {
                api_url: "  ".to_string(),
                auth_retry_delay_ms: 1000,
            }),
            ..Default::default()
        };
        assert!(matches!(ApiClient::from_config(&blank), Err(ApiError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_read_retried_once_after_unauthorized() {
        let server = StubServer::start(vec![401, 200], Duration::ZERO).await;
        let client = server.client(Duration::from_millis(50));

        let started = Instant::now();
        let rows: Vec<Value> = client.list("attendance", &Query::new()).await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(server.hits(), 2);
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_second_unauthorized_is_reported() {
        let server = StubServer::start(vec![401, 401, 200], Duration::ZERO).await;
        let client = server.client(Duration::from_millis(10));

        let result = client.list::<Value>("breaks", &Query::new()).await;
        assert!(matches!(result, Err(ApiError::Status { status: 401, .. })));
        assert_eq!(server.hits(), 2);
    }

    #[tokio::test]
    async fn test_mutations_are_not_retried() {
        let server = StubServer::start(vec![401], Duration::ZERO).await;
        let client = server.client(Duration::from_millis(10));

        let patch = client.patch("attendance/a1", &json!({"editReason": "typo"})).await;
        assert!(matches!(patch, Err(ApiError::Status { status: 401, .. })));
        assert_eq!(server.hits(), 1);

        let delete = client.delete_break("b1", &json!({"reason": "duplicate"})).await;
        assert!(matches!(delete, Err(ApiError::Status { status: 401, .. })));
        assert_eq!(server.hits(), 2);
        assert_eq!(*server.methods.lock(), vec!["PATCH", "DELETE"]);
    }

    #[tokio::test]
    async fn test_concurrent_reads_share_one_fetch() {
        let server = StubServer::start(vec![200], Duration::from_millis(100)).await;
        let client = server.client(Duration::ZERO);
        let params = query(&[("startDate", "2025-03-06")]);

        let (first, second) = tokio::join!(
            client.get_cached("attendance", &params),
            client.get_cached("attendance", &params)
        );
        assert_eq!(first.unwrap(), second.unwrap());
        assert_eq!(server.hits(), 1);
    }

    #[tokio::test]
    async fn test_delete_drops_cached_reads() {
        let server = StubServer::start(vec![200], Duration::ZERO).await;
        let client = server.client(Duration::ZERO);

        client.list::<Value>("attendance", &Query::new()).await.unwrap();
        client.list::<Value>("attendance", &Query::new()).await.unwrap();
        assert_eq!(server.hits(), 1);

        client.delete_attendance("a1", &json!({"reason": "duplicate"})).await.unwrap();
        assert_eq!(server.hits(), 2);

        client.list::<Value>("attendance", &Query::new()).await.unwrap();
        assert_eq!(server.hits(), 3);
        assert_eq!(*server.methods.lock(), vec!["GET", "DELETE", "GET"]);
    }
}
