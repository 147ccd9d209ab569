use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const START_DATE: &str = "2025-12-02";
const TARGET_DATE: &str = "2026-02-23";

#[derive(Debug, Deserialize)]
struct ChecklistResponse {
    start_date: String,
    target_date: String,
    checked_count: u64,
    total_days: u64,
    percent: u64,
    days: Vec<DayCell>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum DayCell {
    Ordinary { date: String, checked: bool },
    Arrival { date: String },
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

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "moving_day_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/checklist")).send().await {
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

async fn spawn_server(data_path: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_moving_day"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("MOVE_START_DATE", START_DATE)
        .env("MOVE_TARGET_DATE", TARGET_DATE)
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
    let server = Arc::new(spawn_server(&unique_data_path()).await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_checklist(client: &Client, base_url: &str) -> ChecklistResponse {
    client
        .get(format!("{base_url}/api/checklist"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn toggle(client: &Client, base_url: &str, date: &str) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/toggle"))
        .json(&serde_json::json!({ "date": date }))
        .send()
        .await
        .unwrap()
}

fn cell_checked(checklist: &ChecklistResponse, date: &str) -> bool {
    checklist.days.iter().any(|cell| {
        matches!(cell, DayCell::Ordinary { date: d, checked } if d == date && *checked)
    })
}

#[tokio::test]
async fn http_checklist_reports_the_fixed_range() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let checklist = fetch_checklist(&client, &server.base_url).await;
    assert_eq!(checklist.start_date, START_DATE);
    assert_eq!(checklist.target_date, TARGET_DATE);
    assert_eq!(checklist.total_days, 84);
    assert_eq!(checklist.days.len(), 84);

    match checklist.days.first().unwrap() {
        DayCell::Ordinary { date, .. } => assert_eq!(date, START_DATE),
        other => panic!("first cell should be ordinary, got {other:?}"),
    }
    match checklist.days.last().unwrap() {
        DayCell::Arrival { date } => assert_eq!(date, TARGET_DATE),
        other => panic!("last cell should be the arrival, got {other:?}"),
    }
    let arrivals = checklist
        .days
        .iter()
        .filter(|cell| matches!(cell, DayCell::Arrival { .. }))
        .count();
    assert_eq!(arrivals, 1);

    let expected =
        (checklist.checked_count as f64 / checklist.total_days as f64 * 100.0).round() as u64;
    assert_eq!(checklist.percent, expected);
}

#[tokio::test]
async fn http_toggle_checks_then_unchecks() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let date = "2025-12-05";
    let before = fetch_checklist(&client, &server.base_url).await;
    let was_checked = cell_checked(&before, date);

    let flipped: ChecklistResponse = toggle(&client, &server.base_url, date)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(cell_checked(&flipped, date), !was_checked);
    if was_checked {
        assert_eq!(flipped.checked_count, before.checked_count - 1);
    } else {
        assert_eq!(flipped.checked_count, before.checked_count + 1);
    }

    let restored: ChecklistResponse = toggle(&client, &server.base_url, date)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(cell_checked(&restored, date), was_checked);
    assert_eq!(restored.checked_count, before.checked_count);
}

#[tokio::test]
async fn http_toggle_rejects_malformed_dates() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_checklist(&client, &server.base_url).await;

    let response = toggle(&client, &server.base_url, "not-a-date").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = toggle(&client, &server.base_url, "2026-13-40").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let after = fetch_checklist(&client, &server.base_url).await;
    assert_eq!(after.checked_count, before.checked_count);
}

#[tokio::test]
async fn http_out_of_range_toggle_is_stored_but_never_rendered() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let stray = "2030-01-01";
    let before = fetch_checklist(&client, &server.base_url).await;

    let after: ChecklistResponse = toggle(&client, &server.base_url, stray)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(after.checked_count, before.checked_count + 1);
    assert_eq!(after.days.len(), 84);
    assert!(after.days.iter().all(|cell| match cell {
        DayCell::Ordinary { date, .. } => date != stray,
        DayCell::Arrival { date } => date != stray,
    }));

    let restored: ChecklistResponse = toggle(&client, &server.base_url, stray)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(restored.checked_count, before.checked_count);
}

#[tokio::test]
async fn http_reset_clears_every_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    toggle(&client, &server.base_url, "2025-12-10").await;
    toggle(&client, &server.base_url, "2026-01-15").await;

    let response = client
        .post(format!("{}/api/reset", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let cleared: ChecklistResponse = response.json().await.unwrap();
    assert_eq!(cleared.checked_count, 0);
    assert_eq!(cleared.percent, 0);
    assert!(cleared.days.iter().all(|cell| match cell {
        DayCell::Ordinary { checked, .. } => !checked,
        DayCell::Arrival { .. } => true,
    }));
}

#[tokio::test]
async fn http_checked_day_survives_restart() {
    let _guard = TEST_LOCK.lock().await;
    let data_path = unique_data_path();
    let client = Client::new();

    let date = "2025-12-02";
    {
        let server = spawn_server(&data_path).await;
        let checked: ChecklistResponse = toggle(&client, &server.base_url, date)
            .await
            .json()
            .await
            .unwrap();
        assert!(cell_checked(&checked, date));
    }

    let server = spawn_server(&data_path).await;
    let restored = fetch_checklist(&client, &server.base_url).await;
    assert!(cell_checked(&restored, date));
    assert_eq!(restored.checked_count, 1);
}
