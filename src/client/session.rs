//! Scoped budget sessions
//!
//! A [`Session`] is the only way commands reach a [`BudgetClient`]. Opening
//! one connects and downloads the budget; closing it shuts the client down.
//! The dispatcher closes every session it opens, whether or not the command
//! succeeded.

use super::{BudgetClient, ConnectOptions};
use crate::config::Settings;
use crate::error::{ActualError, ActualResult};

/// An open budget
pub struct Session<C: BudgetClient> {
    client: C,
}

impl<C: BudgetClient> Session<C> {
    /// Connect and download the configured budget
    ///
    /// Creates the data directory first. If the download fails the client
    /// is shut down before the error is returned.
    pub async fn open(mut client: C, settings: &Settings) -> ActualResult<Self> {
        std::fs::create_dir_all(&settings.data_dir).map_err(|e| {
            ActualError::Io(format!(
                "Failed to create data directory {}: {}",
                settings.data_dir.display(),
                e
            ))
        })?;

        let options = ConnectOptions {
            data_dir: settings.data_dir.clone(),
            server_url: settings.server_url.clone(),
            password: settings.password.clone(),
        };

        tracing::debug!(server = %settings.server_url, "connecting");
        client.init(&options).await?;

        tracing::debug!(sync_id = %settings.sync_id, "downloading budget");
        if let Err(e) = client
            .download_budget(&settings.sync_id, settings.encryption_password.as_deref())
            .await
        {
            if let Err(shutdown_err) = client.shutdown().await {
                tracing::warn!(error = %shutdown_err, "shutdown after failed download also failed");
            }
            return Err(e);
        }

        tracing::info!(sync_id = %settings.sync_id, "budget opened");
        Ok(Self { client })
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Shut the client down and hand it back
    pub async fn close(mut self) -> ActualResult<C> {
        self.client.shutdown().await?;
        tracing::debug!("session closed");
        Ok(self.client)
    }
}
