//! # Neos SDK
//!
//! An async Rust client for the Neos cloud API: users, inventory records,
//! sessions, friends, messages and cloud variables.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Domain models and polymorphic record decoding
//! 2. **Auth**: Login details, session state, refresh gate, token file
//! 3. **HTTP API**: `NeosHttp` over a pluggable [`Transport`](http::Transport),
//!    with one response classification policy for every call
//! 4. **High-Level Client**: `NeosClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use neosvr_sdk::prelude::*;
//!
//! let client = NeosClient::builder().build()?;
//! let details = LoginDetails::builder()
//!     .username("alice")
//!     .password("hunter2")
//!     .build()?;
//! client.auth().login(&details).await?;
//!
//! for record in client.records().inventory().await? {
//!     println!("{} ({})", record.name(), record.record_type());
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared helpers: wire enums, owner ids, timestamps, assets, clock.
pub mod shared;

/// Domain modules (vertical slices): types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: login details, session gate, token persistence.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Transport seam, response classification and the low-level client.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `NeosClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{neosdb_to_http, Clock, OwnerType, SystemClock};

    // Domain types: records
    pub use crate::domain::record::{
        DirectoryRecord, LinkRecord, ObjectRecord, Record, RecordBase, RecordDecodeError,
        RecordType,
    };

    // Domain types: users, sessions, friends
    pub use crate::domain::friend::{Friend, FriendStatus};
    pub use crate::domain::session::{Session, SessionUser, WorldId};
    pub use crate::domain::user::{
        CurrentSessionAccessLevel, OnlineStatus, PublicRsaKey, User, UserStatus,
    };

    // Domain types: messages, cloud variables
    pub use crate::domain::cloud_var::{CloudVar, CloudVarDefinition};
    pub use crate::domain::message::{Message, MessageQuery, MessageType};

    // Errors
    pub use crate::error::{ApiError, AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth types
    pub use crate::auth::{
        generate_secret_machine_id, AuthCredentials, AuthState, LoginDetails,
        LoginDetailsBuilder,
    };

    // HTTP seam
    pub use crate::http::{HttpRequest, HttpResponse, Method, RequestBody, Transport};

    // Client + sub-clients
    pub use crate::client::{
        AuthClient, CloudVarsClient, FriendsClient, MessagesClient, NeosClient,
        NeosClientBuilder, RecordsClient, SessionsClient, UsersClient,
    };
}
