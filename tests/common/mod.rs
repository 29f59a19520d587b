#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use campus_life::api;
use campus_life::api::handlers::health_handler;
use campus_life::api::middleware::auth;
use campus_life::application::services::auth_service::hash_token;
use campus_life::application::services::{AuthService, LostAndFoundService, QrcodeService};
use campus_life::domain::entities::{
    ApprovalStatus, Campus, Contact, ContactWay, ItemKind, LostAndFoundFilter, LostAndFoundRecord,
    Qrcode, Session,
};
use campus_life::domain::repositories::{
    HealthRepository, LostAndFoundRepository, QrcodeRepository, SessionRepository,
};
use campus_life::error::AppError;
use campus_life::state::AppState;

pub const SIGNING_SECRET: &str = "test-signing-secret";

/// Student owning [`ALICE_TOKEN`].
pub const ALICE: &str = "202301010101";
pub const ALICE_TOKEN: &str = "alice-token";
/// Student owning [`BOB_TOKEN`].
pub const BOB: &str = "202302020202";
pub const BOB_TOKEN: &str = "bob-token";

fn storage_fault() -> AppError {
    AppError::internal_from("Database error", std::io::Error::other("connection reset"))
}

// ─── Lost and found ──────────────────────────────────────────────────────────

/// In-memory board with the same visibility and ordering rules as PostgreSQL.
#[derive(Default)]
pub struct InMemoryLostAndFound {
    records: Mutex<Vec<LostAndFoundRecord>>,
    pub calls: AtomicUsize,
    pub failing: AtomicBool,
}

impl InMemoryLostAndFound {
    pub fn with_records(records: Vec<LostAndFoundRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(storage_fault());
        }
        Ok(())
    }

    fn newest_first(mut records: Vec<LostAndFoundRecord>) -> Vec<LostAndFoundRecord> {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        records
    }
}

#[async_trait]
impl LostAndFoundRepository for InMemoryLostAndFound {
    async fn list_public(
        &self,
        filter: LostAndFoundFilter,
    ) -> Result<Vec<LostAndFoundRecord>, AppError> {
        self.enter()?;
        let records = self.records.lock().unwrap();
        Ok(Self::newest_first(
            records
                .iter()
                .filter(|r| r.is_public() && filter.matches(r))
                .cloned()
                .collect(),
        ))
    }

    async fn find_contact(&self, id: i64, student_id: &str) -> Result<Option<Contact>, AppError> {
        self.enter()?;
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|r| r.id == id && r.is_owned_by(student_id))
            .map(|r| Contact {
                contact_way: r.contact_way,
                contact: r.contact.clone(),
            }))
    }

    async fn find_latest_public(&self) -> Result<Option<LostAndFoundRecord>, AppError> {
        self.enter()?;
        let records = self.records.lock().unwrap();
        Ok(Self::newest_first(records.iter().filter(|r| r.is_public()).cloned().collect())
            .into_iter()
            .next())
    }

    async fn list_by_publisher(
        &self,
        student_id: &str,
        status: ApprovalStatus,
    ) -> Result<Vec<LostAndFoundRecord>, AppError> {
        self.enter()?;
        let records = self.records.lock().unwrap();
        Ok(Self::newest_first(
            records
                .iter()
                .filter(|r| r.is_owned_by(student_id) && r.approval == status)
                .cloned()
                .collect(),
        ))
    }
}

/// Builds a record published `minutes_ago` minutes before now.
pub fn record(
    id: i64,
    publisher: &str,
    approval: ApprovalStatus,
    minutes_ago: i64,
) -> LostAndFoundRecord {
    LostAndFoundRecord {
        id,
        is_found_notice: true,
        campus: Campus::Zhaohui,
        kind: ItemKind::Electronics,
        name: format!("Item {id}"),
        place: "Library 3F".to_string(),
        time: "2024-10-01 14:00".to_string(),
        introduction: "Black, scratched corner".to_string(),
        imgs: format!("{id}-a.png|{id}-b.png"),
        publisher: publisher.to_string(),
        contact_way: ContactWay::Phone,
        contact: format!("1380000{id:04}"),
        approval,
        created_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}

// ─── QR codes ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryQrcodes {
    qrcodes: Mutex<Vec<Qrcode>>,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
    pub failing: AtomicBool,
}

impl InMemoryQrcodes {
    pub fn with_qrcodes(qrcodes: Vec<Qrcode>) -> Self {
        Self {
            qrcodes: Mutex::new(qrcodes),
            ..Default::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: i64) -> Option<Qrcode> {
        self.qrcodes
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned()
    }

    /// Sets the counters as an external scan/feedback pipeline would.
    pub fn set_counters(&self, id: i64, scan_count: i64, feedback_count: i64) {
        let mut qrcodes = self.qrcodes.lock().unwrap();
        if let Some(q) = qrcodes.iter_mut().find(|q| q.id == id) {
            q.scan_count = scan_count;
            q.feedback_count = feedback_count;
        }
    }
}

#[async_trait]
impl QrcodeRepository for InMemoryQrcodes {
    async fn find_by_id(&self, id: i64) -> Result<Option<Qrcode>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(storage_fault());
        }
        Ok(self.get(id))
    }

    async fn save(&self, qrcode: &Qrcode) -> Result<bool, AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(storage_fault());
        }

        let mut qrcodes = self.qrcodes.lock().unwrap();
        let Some(stored) = qrcodes.iter_mut().find(|q| q.id == qrcode.id) else {
            return Ok(false);
        };

        stored.college = qrcode.college;
        stored.department = qrcode.department.clone();
        stored.description = qrcode.description.clone();
        stored.feedback_type = qrcode.feedback_type;
        stored.location = qrcode.location.clone();
        stored.status = qrcode.status;
        stored.updated_at = Utc::now();
        Ok(true)
    }
}

pub fn qrcode(id: i64) -> Qrcode {
    let created: DateTime<Utc> = Utc::now() - Duration::days(10);
    Qrcode {
        id,
        college: 3,
        department: "Student Union".to_string(),
        description: "Canteen feedback".to_string(),
        feedback_type: 1,
        location: "Canteen 2".to_string(),
        status: true,
        scan_count: 0,
        feedback_count: 0,
        created_at: created,
        updated_at: created,
    }
}

// ─── Sessions and health ─────────────────────────────────────────────────────

/// Sessions for [`ALICE`] and [`BOB`], hashed with [`SIGNING_SECRET`].
pub struct InMemorySessions {
    sessions: Mutex<Vec<Session>>,
}

impl InMemorySessions {
    pub fn seeded() -> Self {
        let session = |id: i64, student_id: &str, token: &str| Session {
            id,
            student_id: student_id.to_string(),
            name: format!("{student_id} test"),
            token_hash: hash_token(SIGNING_SECRET, token),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };

        Self {
            sessions: Mutex::new(vec![
                session(1, ALICE, ALICE_TOKEN),
                session(2, BOB, BOB_TOKEN),
            ]),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessions {
    async fn find_student_id(&self, token_hash: &str) -> Result<Option<String>, AppError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .iter()
            .find(|s| s.token_hash == token_hash && !s.is_revoked())
            .map(|s| s.student_id.clone()))
    }

    async fn touch(&self, token_hash: &str) -> Result<(), AppError> {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(s) = sessions.iter_mut().find(|s| s.token_hash == token_hash) {
            s.last_used_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn create(
        &self,
        student_id: &str,
        name: &str,
        token_hash: &str,
    ) -> Result<Session, AppError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = Session {
            id: sessions.len() as i64 + 1,
            student_id: student_id.to_string(),
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        sessions.push(session.clone());
        Ok(session)
    }

    async fn list(&self) -> Result<Vec<Session>, AppError> {
        Ok(self.sessions.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Session>, AppError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Session>, AppError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions.iter().find(|s| s.name == name).cloned())
    }

    async fn revoke(&self, id: i64) -> Result<(), AppError> {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(s) = sessions.iter_mut().find(|s| s.id == id) {
            s.revoked_at = Some(Utc::now());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeHealth {
    pub failing: AtomicBool,
}

#[async_trait]
impl HealthRepository for FakeHealth {
    async fn ping(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database unreachable", json!({})));
        }
        Ok(())
    }
}

// ─── Wiring ──────────────────────────────────────────────────────────────────

/// Repositories behind a test server, kept so tests can inspect them.
pub struct TestContext {
    pub lost_and_found: Arc<InMemoryLostAndFound>,
    pub qrcodes: Arc<InMemoryQrcodes>,
    pub health: Arc<FakeHealth>,
}

impl TestContext {
    pub fn new(records: Vec<LostAndFoundRecord>, qrcodes: Vec<Qrcode>) -> Self {
        Self {
            lost_and_found: Arc::new(InMemoryLostAndFound::with_records(records)),
            qrcodes: Arc::new(InMemoryQrcodes::with_qrcodes(qrcodes)),
            health: Arc::new(FakeHealth::default()),
        }
    }

    pub fn state(&self) -> AppState {
        AppState {
            lost_and_found_service: Arc::new(LostAndFoundService::new(
                self.lost_and_found.clone(),
            )),
            qrcode_service: Arc::new(QrcodeService::new(self.qrcodes.clone())),
            auth_service: Arc::new(AuthService::new(
                Arc::new(InMemorySessions::seeded()),
                SIGNING_SECRET.to_string(),
            )),
            health: self.health.clone(),
        }
    }

    /// `/health` plus the authenticated `/api` routes, without rate limiting.
    pub fn server(&self) -> TestServer {
        let state = self.state();
        let api_router = api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

        let app = Router::new()
            .route("/health", get(health_handler))
            .nest("/api", api_router)
            .with_state(state);

        TestServer::new(app).unwrap()
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
