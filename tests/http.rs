use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct AuthBody {
    token: String,
    user: UserBody,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    id: i64,
    email: String,
}

#[derive(Debug, Deserialize)]
struct EntryBody {
    id: i64,
    mood: String,
    note: Option<String>,
    entry_date: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct EntryEnvelope {
    entry: EntryBody,
}

#[derive(Debug, Deserialize)]
struct ListBody {
    entries: Vec<EntryBody>,
    #[serde(rename = "totalCount")]
    total_count: i64,
    #[serde(rename = "currentPage")]
    current_page: i64,
    #[serde(rename = "totalPages")]
    total_pages: i64,
    today: String,
}

#[derive(Debug, Deserialize)]
struct CountsBody {
    #[serde(rename = "Happy")]
    happy: i64,
    #[serde(rename = "Sad")]
    sad: i64,
    #[serde(rename = "Angry")]
    angry: i64,
    #[serde(rename = "Okay")]
    okay: i64,
}

#[derive(Debug, Deserialize)]
struct AnalyticsBody {
    #[serde(rename = "moodCounts")]
    mood_counts: CountsBody,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

fn unique_database_path() -> String {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "mood_tracker_http_{}_{}.db",
        std::process::id(),
        unique_suffix()
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(resp) = client.get(base_url.to_string()).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_mood_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATABASE_PATH", unique_database_path())
        .env("APP_JWT_SECRET", "http-test-secret")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

/// Registers a fresh user and returns its bearer token.
async fn register(client: &Client, base_url: &str) -> AuthBody {
    let email = format!("user{}@example.com", unique_suffix());
    let response = client
        .post(format!("{base_url}/api/auth/register"))
        .json(&serde_json::json!({ "email": email, "password": "hunter22" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: AuthBody = response.json().await.unwrap();
    assert_eq!(body.user.email, email);
    body
}

#[tokio::test]
async fn http_mood_lifecycle_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let auth = register(&client, &server.base_url).await;

    let created = client
        .post(format!("{}/api/moods", server.base_url))
        .bearer_auth(&auth.token)
        .json(&serde_json::json!({ "mood": "Happy", "note": "good day" }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: EntryEnvelope = created.json().await.unwrap();
    assert_eq!(created.entry.mood, "Happy");
    assert_eq!(created.entry.note.as_deref(), Some("good day"));
    assert_eq!(created.entry.created_at, created.entry.updated_at);

    // A second entry the same day is refused.
    let duplicate = client
        .post(format!("{}/api/moods", server.base_url))
        .bearer_auth(&auth.token)
        .json(&serde_json::json!({ "mood": "Okay" }))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = duplicate.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("already logged"));

    let updated = client
        .put(format!("{}/api/moods/{}", server.base_url, created.entry.id))
        .bearer_auth(&auth.token)
        .json(&serde_json::json!({ "mood": "Sad", "note": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);
    let updated: EntryEnvelope = updated.json().await.unwrap();
    assert_eq!(updated.entry.mood, "Sad");
    assert_eq!(updated.entry.note, None);
    assert_eq!(updated.entry.created_at, created.entry.created_at);
    assert!(updated.entry.updated_at > created.entry.created_at);

    let listed: ListBody = client
        .get(format!("{}/api/moods?page=1&limit=5", server.base_url))
        .bearer_auth(&auth.token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.total_count, 1);
    assert_eq!(listed.current_page, 1);
    assert_eq!(listed.total_pages, 1);
    assert_eq!(listed.entries[0].entry_date, listed.today);

    let deleted = client
        .delete(format!("{}/api/moods/{}", server.base_url, created.entry.id))
        .bearer_auth(&auth.token)
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let listed: ListBody = client
        .get(format!("{}/api/moods", server.base_url))
        .bearer_auth(&auth.token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.total_count, 0);
    assert!(listed.entries.is_empty());
}

#[tokio::test]
async fn http_requests_without_a_token_are_unauthorized() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let bare = client
        .get(format!("{}/api/moods", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(bare.status(), StatusCode::UNAUTHORIZED);

    let forged = client
        .get(format!("{}/api/moods/analytics", server.base_url))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .unwrap();
    assert_eq!(forged.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn http_login_round_trip_and_bad_password() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let auth = register(&client, &server.base_url).await;

    let login = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&serde_json::json!({ "email": auth.user.email, "password": "hunter22" }))
        .send()
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);
    let body: AuthBody = login.json().await.unwrap();
    assert_eq!(body.user.id, auth.user.id);

    let wrong = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&serde_json::json!({ "email": auth.user.email, "password": "wrong-pass" }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let again = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&serde_json::json!({ "email": auth.user.email, "password": "hunter22" }))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_validation_failures_report_fields() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let auth = register(&client, &server.base_url).await;

    let bad_mood = client
        .post(format!("{}/api/moods", server.base_url))
        .bearer_auth(&auth.token)
        .json(&serde_json::json!({ "mood": "Ecstatic" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_mood.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = bad_mood.json().await.unwrap();
    assert_eq!(body["errors"][0]["field"], "mood");

    let long_note = "x".repeat(151);
    let bad_note = client
        .post(format!("{}/api/moods", server.base_url))
        .bearer_auth(&auth.token)
        .json(&serde_json::json!({ "mood": "Happy", "note": long_note }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_note.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = bad_note.json().await.unwrap();
    assert_eq!(body["errors"][0]["field"], "note");
}

#[tokio::test]
async fn http_foreign_entries_look_missing() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let owner = register(&client, &server.base_url).await;
    let intruder = register(&client, &server.base_url).await;

    let created: EntryEnvelope = client
        .post(format!("{}/api/moods", server.base_url))
        .bearer_auth(&owner.token)
        .json(&serde_json::json!({ "mood": "Angry" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let foreign = client
        .put(format!("{}/api/moods/{}", server.base_url, created.entry.id))
        .bearer_auth(&intruder.token)
        .json(&serde_json::json!({ "mood": "Happy" }))
        .send()
        .await
        .unwrap();
    assert_eq!(foreign.status(), StatusCode::NOT_FOUND);

    let missing = client
        .delete(format!("{}/api/moods/999999", server.base_url))
        .bearer_auth(&intruder.token)
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_analytics_always_lists_every_mood() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let auth = register(&client, &server.base_url).await;

    let empty: AnalyticsBody = client
        .get(format!("{}/api/moods/analytics", server.base_url))
        .bearer_auth(&auth.token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(empty.mood_counts.happy, 0);
    assert_eq!(empty.mood_counts.sad, 0);
    assert_eq!(empty.mood_counts.angry, 0);
    assert_eq!(empty.mood_counts.okay, 0);

    let created = client
        .post(format!("{}/api/moods", server.base_url))
        .bearer_auth(&auth.token)
        .json(&serde_json::json!({ "mood": "Happy" }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let counts: AnalyticsBody = client
        .get(format!("{}/api/moods/analytics", server.base_url))
        .bearer_auth(&auth.token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(counts.mood_counts.happy, 1);
    assert_eq!(
        counts.mood_counts.happy
            + counts.mood_counts.sad
            + counts.mood_counts.angry
            + counts.mood_counts.okay,
        1
    );
}
