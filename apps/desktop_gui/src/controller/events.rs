//! Events flowing from the backend worker to the UI thread.

use client_core::ClassifyError;
use shared::domain::Classification;

pub enum UiEvent {
    BackendReady,
    BackendFailed(String),
    Settled {
        attempt: u64,
        result: Result<Classification, ClassifyError>,
    },
}
