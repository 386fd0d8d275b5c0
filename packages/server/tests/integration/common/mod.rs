use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Client;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;

use inventory_server::config::{AppConfig, DatabaseConfig};
use inventory_server::state::AppState;

pub mod routes {
    pub const HEALTH: &str = "/api/health";
    pub const ASSETS: &str = "/api/assets";
    pub const SYSTEM_ASSETS: &str = "/api/system-assets";
    pub const PC_LAPTOPS: &str = "/api/pc-laptops";
    pub const EMPLOYEES: &str = "/api/employees";

    pub fn asset(id: &str) -> String {
        format!("/api/assets/{id}")
    }

    pub fn assets_by_category(category: &str) -> String {
        format!("/api/assets/category/{category}")
    }

    pub fn pc_laptop(id: &str) -> String {
        format!("/api/pc-laptops/{id}")
    }

    pub fn employee(id: &str) -> String {
        format!("/api/employees/{id}")
    }

    pub fn assign_pc_laptop(id: &str) -> String {
        format!("/api/employees/{id}/assign-pc-laptop")
    }

    pub fn assign_assets(id: &str) -> String {
        format!("/api/employees/{id}/assign-assets")
    }
}

/// A running test server backed by its own SQLite file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    _dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

/// Open a fresh, fully initialised database in a temporary directory.
pub async fn test_db() -> (DatabaseConnection, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("inventory.db").display()
    );
    let mut config = DatabaseConfig::with_url(url);
    config.max_connections = 5;

    let db = inventory_server::database::init_db(&config)
        .await
        .expect("Failed to initialize test database");
    inventory_server::database::ensure_indexes(&db)
        .await
        .expect("Failed to create indexes");
    (db, dir)
}

/// Keep consecutive creates on distinct timestamps.
pub async fn tick() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn with a tweaked configuration.
    pub async fn spawn_with(configure: impl FnOnce(&mut AppConfig)) -> Self {
        let (db, dir) = test_db().await;

        let mut config = AppConfig::with_database(DatabaseConfig::with_url("sqlite::memory:"));
        config.server.port = 0;
        configure(&mut config);

        let state = AppState {
            db: db.clone(),
            config,
        };
        let app = inventory_server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");

        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Create an asset via the API and return its `id`.
    pub async fn create_asset(&self, category: &str) -> String {
        let res = self
            .post(routes::ASSETS, &serde_json::json!({ "category": category }))
            .await;
        assert_eq!(res.status, 201, "create_asset failed: {}", res.text);
        res.id()
    }

    /// Create a bundle via the API and return its `id`.
    pub async fn create_pc_laptop(&self, slots: Value) -> String {
        let res = self.post(routes::PC_LAPTOPS, &slots).await;
        assert_eq!(res.status, 201, "create_pc_laptop failed: {}", res.text);
        res.id()
    }

    /// Create an employee via the API and return its `id`.
    pub async fn create_employee(&self, name: &str, email: &str) -> String {
        let res = self
            .post(
                routes::EMPLOYEES,
                &serde_json::json!({ "name": name, "email": email }),
            )
            .await;
        assert_eq!(res.status, 201, "create_employee failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    /// `data.id` of a success envelope.
    pub fn id(&self) -> String {
        self.body["data"]["id"]
            .as_str()
            .expect("response body should contain 'data.id'")
            .to_string()
    }

    /// Assert a failure envelope with the given status and error code.
    pub fn assert_error(&self, status: u16, code: &str) {
        assert_eq!(self.status, status, "unexpected status: {}", self.text);
        assert_eq!(self.body["success"], false);
        assert_eq!(self.body["error"], code);
        assert!(self.body["message"].is_string());
    }
}
