//! Screening core: input validation, the submission state machine, and the
//! HTTP client for the remote prediction service.
//!
//! The frontend owns a [`SubmissionController`] on its UI thread and drives
//! the single network exchange elsewhere (a worker thread in the desktop
//! app, a bare task in tests). The controller hands out a payload via
//! [`SubmitAction::Dispatch`] and later absorbs the settled result through
//! [`SubmissionController::settle`].

pub mod controller;
pub mod predictor;
pub mod validator;

pub use controller::{
    Outcome, SubmissionController, SubmissionState, SubmitAction, FAILURE_MESSAGE,
};
pub use predictor::{Classifier, ClassifyError, PredictorClient};
pub use validator::{validate, RawInput};
