//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use conspects_core::AppError;
use conspects_core::result::AppResult;
use conspects_core::traits::transport::{ApiRequest, ApiResponse, HttpTransport};
use conspects_core::types::{EditionId, FileId};
use conspects_entity::edition::{Edition, EditionPermission};
use conspects_entity::file::FileDescriptor;

/// Scripted outcome for one request.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Return this response.
    Respond(ApiResponse),
    /// Return this response after a delay.
    Delayed(Duration, ApiResponse),
    /// Fail as if the network was down.
    NetworkDown,
}

/// In-memory transport that records requests and replays scripted answers.
#[derive(Debug)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    script: Mutex<VecDeque<Scripted>>,
    fallback: Scripted,
}

impl RecordingTransport {
    /// Answers requests from `outcomes` in order, then `204 No Content`.
    pub fn scripted(outcomes: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            script: Mutex::new(outcomes.into()),
            fallback: Scripted::Respond(ApiResponse::new(204, "")),
        })
    }

    /// Answers every request with `status` and an empty body.
    pub fn always(status: u16) -> Arc<Self> {
        Self::always_with(Scripted::Respond(ApiResponse::new(status, "")))
    }

    /// Answers every request with `outcome`.
    pub fn always_with(outcome: Scripted) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            script: Mutex::new(VecDeque::new()),
            fallback: outcome,
        })
    }

    /// Everything sent so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        self.requests.lock().expect("requests lock").push(request);
        let next = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        match next {
            Scripted::Respond(response) => Ok(response),
            Scripted::Delayed(delay, response) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            Scripted::NetworkDown => Err(AppError::transport("connection refused")),
        }
    }
}

/// An editable text file.
pub fn notes_file() -> FileDescriptor {
    FileDescriptor {
        id: FileId(5),
        name: "notes".to_string(),
        extension: "txt".to_string(),
        content: "b2xk".to_string(),
        can_be_edited: true,
        can_be_previewed: true,
        is_attachment: false,
    }
}

/// A sample edition.
pub fn sample_edition() -> Edition {
    Edition {
        id: EditionId(12),
        name: "Operating Systems 2024".to_string(),
        year: 2024,
        user_permission: EditionPermission::Edit,
    }
}
