#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use fake::{
    faker::{internet::en::SafeEmail, name::en::Name},
    Fake,
};
use slotbook_api::{
    router,
    services::booking::{BookingConfig, BookingService},
    ApiState,
};
use slotbook_core::models::user::User;
use slotbook_db::mock::memory::InMemoryStore;
use slotbook_mailer::mock::RecordingNotifier;
use uuid::Uuid;

/// An in-memory store, a recording notifier, and a service wired to both.
pub struct TestContext {
    pub store: InMemoryStore,
    pub notifier: RecordingNotifier,
    pub service: BookingService,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(BookingConfig::default())
    }

    pub fn with_config(config: BookingConfig) -> Self {
        Self::with_notifier(RecordingNotifier::new(), config)
    }

    pub fn with_notifier(notifier: RecordingNotifier, config: BookingConfig) -> Self {
        let store = InMemoryStore::new();
        let service = BookingService::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(notifier.clone()),
            config,
        );

        Self {
            store,
            notifier,
            service,
        }
    }

    /// Registers a user with a complete profile.
    pub async fn user(&self) -> User {
        self.user_with_personal_id(Some(format!("{}", (1_000_000..9_999_999).fake::<u32>())))
            .await
    }

    pub async fn user_with_personal_id(&self, personal_id: Option<String>) -> User {
        let user = User {
            id: Uuid::new_v4(),
            email: SafeEmail().fake(),
            name: Name().fake(),
            personal_id,
            created_at: Utc::now(),
        };
        self.store.insert_user(user.clone()).await;
        user
    }

    pub fn server(&self) -> TestServer {
        let state = Arc::new(ApiState {
            bookings: self.service.clone(),
        });
        TestServer::new(router(state)).expect("Failed to start test server")
    }
}

/// A fixed slot: Monday 5 January 2026, 15:00 in Bogotá.
pub fn slot() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 20, 0, 0).unwrap()
}
