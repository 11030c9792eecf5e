//! Shared fixtures: an in-memory transport and a manual clock.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde_json::{json, Value};

use neosvr_sdk::prelude::*;

/// Replays queued responses and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(HttpResponse::new(status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| HttpError::Transport("no response queued".to_string()))
    }
}

/// A clock that only moves when told to.
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self(Mutex::new(now)))
    }

    pub fn advance(&self, by: TimeDelta) {
        *self.0.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub const BASE_URL: &str = "https://api.test/api";

pub struct Harness {
    pub client: NeosClient,
    pub transport: Arc<MockTransport>,
    pub clock: Arc<ManualClock>,
}

pub fn harness() -> Harness {
    let transport = MockTransport::new();
    let clock = ManualClock::new(t0());
    let client = NeosClient::builder()
        .base_url(BASE_URL)
        .transport(transport.clone())
        .clock(clock.clone())
        .build()
        .unwrap();
    Harness {
        client,
        transport,
        clock,
    }
}

pub fn login_response() -> Value {
    json!({
        "userId": "U-alice",
        "token": "tok123",
        "secretMachineId": "machine",
        "expire": "2024-01-08T12:00:00Z",
        "rememberMe": false
    })
}

pub fn login_details() -> LoginDetails {
    LoginDetails::builder()
        .username("alice")
        .password("hunter2")
        .secret_machine_id("machine")
        .build()
        .unwrap()
}

impl Harness {
    /// Log in and forget the login request.
    pub async fn logged_in(self) -> Self {
        self.transport.push_json(200, login_response());
        self.client.auth().login(&login_details()).await.unwrap();
        self.transport.clear();
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }
}

pub fn record_json(id: &str, name: &str, record_type: &str, owner_id: &str) -> Value {
    json!({
        "id": id,
        "globalVersion": 1,
        "localVersion": 1,
        "lastModifyingUserId": owner_id,
        "name": name,
        "recordType": record_type,
        "path": "Inventory",
        "isPublic": false,
        "isForPatrons": false,
        "isListed": false,
        "isDeleted": false,
        "lastModificationTime": "2023-06-01T00:00:00.0000000Z",
        "visits": 0,
        "rating": 0,
        "ownerId": owner_id,
        "ownerName": "alice",
        "tags": [],
        "lastModifyingMachineId": "machine",
        "creationTime": "2023-05-01T00:00:00Z",
        "assetUri": "neosdb:///abc.7zbson"
    })
}
