//! One-shot acquisition of the user's position.
//!
//! The host environment exposes a [`GeolocationProvider`]. A [`LocationRequest`]
//! asks it exactly once per session: no retry, no polling, no cancellation.
//! The provider answers through a callback, possibly from another thread, and
//! the first answer is kept.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use once_cell::sync::OnceCell;
use placeguide_data::Coordinates;
use tracing::{debug, info, warn};

/// Message reported when the host has no geolocation capability.
pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by this host";

/// Options passed through to the provider.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout_ms: u64,
    /// Oldest cached fix the provider may return; 0 forces a fresh one
    pub max_cached_age_ms: u64,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 5000,
            max_cached_age_ms: 0,
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionErrorKind {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

/// A provider failure. The message is shown to the user verbatim.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionError {
    pub kind: PositionErrorKind,
    pub message: String,
}

impl PositionError {
    pub fn new(kind: PositionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PositionError {}

pub type PositionResult = Result<Coordinates, PositionError>;

/// Delivers the provider's single answer.
pub type PositionCallback = Box<dyn FnOnce(PositionResult) + Send + 'static>;

/// A host capability that can report the current position once.
pub trait GeolocationProvider {
    /// Whether the host offers geolocation at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Start a position lookup and answer through `callback`, now or later.
    fn get_current_position(&self, options: &PositionOptions, callback: PositionCallback);
}

/// Where a [`LocationRequest`] stands.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum LocationStatus {
    /// Not asked yet
    Idle,
    /// Asked; the provider has not answered
    Pending,
    Resolved(Coordinates),
    /// The provider failed; the message is its own
    Failed(String),
    Unsupported,
}

impl LocationStatus {
    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Self::Resolved(coords) => Some(*coords),
            _ => None,
        }
    }

    /// User-facing error text, if the request ended without a position.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            Self::Unsupported => Some(UNSUPPORTED_MESSAGE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    Resolved(Coordinates),
    Failed(String),
    Unsupported,
}

#[derive(Debug, Default)]
struct RequestState {
    issued: AtomicBool,
    outcome: OnceCell<Outcome>,
}

/// A fire-once request for the user's position.
///
/// Clones share the same request.
///
/// # Examples
///
/// ```rust
/// use placeguide::{Coordinates, FixedPositionProvider, LocationRequest, PositionOptions};
///
/// let request = LocationRequest::new();
/// let provider = FixedPositionProvider::new(Coordinates::new(34.61, -120.08));
///
/// let status = request.request(&provider, &PositionOptions::default());
/// assert_eq!(status.coordinates(), Some(Coordinates::new(34.61, -120.08)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocationRequest {
    state: Arc<RequestState>,
}

impl LocationRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask `provider` for the position.
    ///
    /// Only the first call does anything; later calls return the current
    /// status. An unsupported provider is never invoked.
    pub fn request<P>(&self, provider: &P, options: &PositionOptions) -> LocationStatus
    where
        P: GeolocationProvider + ?Sized,
    {
        if self.state.issued.swap(true, Ordering::SeqCst) {
            debug!("Location already requested this session");
            return self.status();
        }

        if !provider.is_supported() {
            warn!("{UNSUPPORTED_MESSAGE}");
            let _ = self.state.outcome.set(Outcome::Unsupported);
            return self.status();
        }

        info!(?options, "Requesting current position");
        let state = Arc::clone(&self.state);
        provider.get_current_position(
            options,
            Box::new(move |result| {
                let outcome = match result {
                    Ok(coords) => {
                        info!(lat = coords.lat, lng = coords.lng, "Position acquired");
                        Outcome::Resolved(coords)
                    }
                    Err(err) => {
                        warn!(kind = ?err.kind, message = %err.message, "Position lookup failed");
                        Outcome::Failed(err.message)
                    }
                };
                if state.outcome.set(outcome).is_err() {
                    warn!("Provider answered more than once; keeping the first answer");
                }
            }),
        );
        self.status()
    }

    #[must_use]
    pub fn status(&self) -> LocationStatus {
        match self.state.outcome.get() {
            Some(Outcome::Resolved(coords)) => LocationStatus::Resolved(*coords),
            Some(Outcome::Failed(message)) => LocationStatus::Failed(message.clone()),
            Some(Outcome::Unsupported) => LocationStatus::Unsupported,
            None if self.is_issued() => LocationStatus::Pending,
            None => LocationStatus::Idle,
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self.state.outcome.get() {
            Some(Outcome::Resolved(coords)) => Some(*coords),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_issued(&self) -> bool {
        self.state.issued.load(Ordering::SeqCst)
    }
}

/// Answers immediately with a fixed position.
#[derive(Debug, Clone, Copy)]
pub struct FixedPositionProvider {
    coordinates: Coordinates,
}

impl FixedPositionProvider {
    #[must_use]
    pub const fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

impl GeolocationProvider for FixedPositionProvider {
    fn get_current_position(&self, _options: &PositionOptions, callback: PositionCallback) {
        callback(Ok(self.coordinates));
    }
}

/// Answers immediately with an error.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    error: PositionError,
}

impl FailingProvider {
    #[must_use]
    pub const fn new(error: PositionError) -> Self {
        Self { error }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(PositionError::new(PositionErrorKind::PermissionDenied, message))
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(PositionError::new(PositionErrorKind::Timeout, message))
    }
}

impl GeolocationProvider for FailingProvider {
    fn get_current_position(&self, _options: &PositionOptions, callback: PositionCallback) {
        callback(Err(self.error.clone()));
    }
}

/// A host without geolocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedProvider;

impl GeolocationProvider for UnsupportedProvider {
    fn is_supported(&self) -> bool {
        false
    }

    fn get_current_position(&self, _options: &PositionOptions, callback: PositionCallback) {
        callback(Err(PositionError::new(
            PositionErrorKind::PositionUnavailable,
            UNSUPPORTED_MESSAGE,
        )));
    }
}
