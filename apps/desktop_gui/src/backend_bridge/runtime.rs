//! Backend worker: a dedicated thread running a tokio runtime that performs
//! the prediction exchange and reports settlements back to the UI thread.

use std::thread;

use client_core::{Classifier, PredictorClient};
use crossbeam_channel::{Receiver, Sender};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(api_url: Url, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let client = PredictorClient::new(api_url);
            let _ = ui_tx.try_send(UiEvent::BackendReady);

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Classify { attempt, payload } => {
                        tracing::debug!(attempt, "running classification request");
                        let result = client.classify(&payload).await;
                        if let Err(err) = &result {
                            tracing::warn!(attempt, error = %err, "classification failed");
                        }
                        if ui_tx.send(UiEvent::Settled { attempt, result }).is_err() {
                            // UI side is gone; nothing left to do.
                            return;
                        }
                    }
                }
            }
        });
    });
}
