//! Backend commands queued from UI to backend worker.

use shared::protocol::PredictRequest;

pub enum BackendCommand {
    Classify {
        attempt: u64,
        payload: PredictRequest,
    },
}
