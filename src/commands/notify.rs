//! Success notification
//!
//! After a solved session the driver may ping an HTTP endpoint. This is a
//! separate step from the engine; a failed notification never changes the
//! session result.

use crate::config::NotifyConfig;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

/// Error type for notification failures
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("error transmitting data to server after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Delivery progress, reported to the player as it happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyProgress {
    /// Attempt `n` is about to be sent
    Sending(u32),
    /// Attempt `n` failed and another one follows
    Retrying(u32),
}

impl NotifyProgress {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Sending(_) => "sending...",
            Self::Retrying(_) => "Failed transmitting to server. Retrying",
        }
    }
}

/// Something to tell about a solved puzzle
pub trait Notifier {
    /// Deliver the notification, calling `progress` for every attempt
    ///
    /// # Errors
    ///
    /// Returns `NotifyError` if delivery failed.
    fn notify(&self, progress: &mut dyn FnMut(NotifyProgress)) -> Result<(), NotifyError>;
}

/// Sends a GET request to a fixed URL, retrying until a 200 comes back
pub struct HttpNotifier {
    url: String,
    attempts: u32,
    retry_delay: Duration,
    client: Client,
}

/// Prefix `http://` when the URL carries no scheme
#[must_use]
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

impl HttpNotifier {
    /// Build a notifier
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::Client` if the HTTP client cannot be created.
    pub fn new(url: &str, attempts: u32, retry_delay: Duration) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(Duration::from_secs(5)).build()?;
        Ok(Self {
            url: normalize_url(url),
            attempts,
            retry_delay,
            client,
        })
    }

    /// Build a notifier from the `[notify]` config section
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::Client` if the HTTP client cannot be created.
    pub fn from_config(config: &NotifyConfig) -> Result<Self, NotifyError> {
        Self::new(&config.url, config.attempts, config.retry_delay())
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Notifier for HttpNotifier {
    fn notify(&self, progress: &mut dyn FnMut(NotifyProgress)) -> Result<(), NotifyError> {
        for attempt in 1..=self.attempts {
            progress(NotifyProgress::Sending(attempt));
            match self.client.get(&self.url).send() {
                Ok(response) if response.status() == StatusCode::OK => {
                    info!(url = %self.url, attempt, "notification delivered");
                    return Ok(());
                }
                Ok(response) => {
                    warn!(url = %self.url, attempt, status = %response.status(), "unexpected status");
                }
                Err(err) => {
                    warn!(url = %self.url, attempt, error = %err, "failed transmitting to server");
                }
            }

            if attempt < self.attempts {
                progress(NotifyProgress::Retrying(attempt));
                thread::sleep(self.retry_delay);
            }
        }

        Err(NotifyError::Exhausted {
            attempts: self.attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_scheme() {
        assert_eq!(normalize_url("example.com/done"), "http://example.com/done");
        assert_eq!(normalize_url("localhost:8080"), "http://localhost:8080");
    }

    #[test]
    fn normalize_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://a.b/c"), "http://a.b/c");
        assert_eq!(normalize_url("https://a.b/c"), "https://a.b/c");
    }

    #[test]
    fn from_config_uses_settings() {
        let config = NotifyConfig {
            url: "example.com".to_string(),
            attempts: 3,
            retry_delay_ms: 10,
        };
        let notifier = HttpNotifier::from_config(&config).unwrap();
        assert_eq!(notifier.url(), "http://example.com");
        assert_eq!(notifier.attempts, 3);
        assert_eq!(notifier.retry_delay, Duration::from_millis(10));
    }

    #[test]
    fn unreachable_endpoint_exhausts_attempts() {
        // Port 1 on loopback refuses connections
        let notifier = HttpNotifier::new("127.0.0.1:1/", 2, Duration::ZERO).unwrap();
        let mut steps = Vec::new();
        let result = notifier.notify(&mut |step| steps.push(step));

        assert!(matches!(result, Err(NotifyError::Exhausted { attempts: 2 })));
        assert_eq!(
            steps,
            vec![
                NotifyProgress::Sending(1),
                NotifyProgress::Retrying(1),
                NotifyProgress::Sending(2),
            ]
        );
    }

    #[test]
    fn progress_messages() {
        assert_eq!(NotifyProgress::Sending(1).message(), "sending...");
        assert_eq!(
            NotifyProgress::Retrying(3).message(),
            "Failed transmitting to server. Retrying"
        );
    }
}
