//! Trip switch for upstream providers, shared across requests.
//!
//! A provider is usable until its first failure. From then on it is skipped
//! for the life of the process. With a cooldown configured, one trial call is
//! let through after the cooldown; success makes the provider usable again,
//! failure restarts the cooldown.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{info, warn};

/// Availability of one provider.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CircuitState {
    /// Calls go through.
    Closed,
    /// Calls are skipped.
    Open,
    /// A single trial call is in flight after the cooldown.
    HalfOpen,
}

impl fmt::Display for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Closed => "Closed",
            Self::Open => "Open",
            Self::HalfOpen => "HalfOpen",
        };
        f.write_str(label)
    }
}

/// Failure record of a tripped provider. Providers without one are closed.
#[derive(Debug)]
struct Trip {
    state: CircuitState,
    failures: u32,
    last_failure: Instant,
}

/// Point-in-time view of one provider, for status reporting.
#[derive(Clone, Debug)]
pub struct CircuitStatus {
    pub provider: String,
    pub state: CircuitState,
    pub failure_count: u32,
    pub last_failure: Option<Instant>,
}

pub struct CircuitBreaker {
    trips: Mutex<HashMap<String, Trip>>,
    cooldown: Option<Duration>,
}

impl CircuitBreaker {
    /// A breaker that never lets a tripped provider back in.
    pub fn new() -> Self {
        Self::with_cooldown(None)
    }

    /// A breaker that allows one trial call once `cooldown` has passed since
    /// the last failure. `None` is the same as [`CircuitBreaker::new`].
    pub fn with_cooldown(cooldown: Option<Duration>) -> Self {
        Self {
            trips: Mutex::new(HashMap::new()),
            cooldown,
        }
    }

    fn trips(&self) -> MutexGuard<'_, HashMap<String, Trip>> {
        self.trips.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Whether `provider` may be called now.
    ///
    /// An open provider whose cooldown has elapsed moves to HalfOpen and this
    /// call returns true; further calls return false until the trial call is
    /// recorded.
    pub fn is_allowed(&self, provider: &str) -> bool {
        let mut trips = self.trips();
        let Some(trip) = trips.get_mut(provider) else {
            return true;
        };

        match (trip.state, self.cooldown) {
            (CircuitState::Open, Some(cooldown)) if trip.last_failure.elapsed() >= cooldown => {
                info!("Trying '{}' again after {}s cooldown", provider, cooldown.as_secs());
                trip.state = CircuitState::HalfOpen;
                true
            }
            (CircuitState::Closed, _) => true,
            _ => false,
        }
    }

    /// A trial call succeeded; the provider is usable again. Successes while
    /// open are ignored.
    pub fn record_success(&self, provider: &str) {
        let mut trips = self.trips();
        if trips
            .get(provider)
            .is_some_and(|trip| trip.state == CircuitState::HalfOpen)
        {
            trips.remove(provider);
            info!("'{}' recovered, calls resume", provider);
        }
    }

    /// Trip the provider (or re-trip it after a failed trial call).
    pub fn record_failure(&self, provider: &str) {
        let mut trips = self.trips();
        let now = Instant::now();
        let trip = trips.entry(provider.to_string()).or_insert(Trip {
            state: CircuitState::Closed,
            failures: 0,
            last_failure: now,
        });

        trip.failures += 1;
        trip.last_failure = now;
        if trip.state != CircuitState::Open {
            trip.state = CircuitState::Open;
            match self.cooldown {
                Some(cooldown) => warn!(
                    "'{}' marked unavailable for {}s (failure #{})",
                    provider,
                    cooldown.as_secs(),
                    trip.failures
                ),
                None => warn!("'{}' marked unavailable until restart", provider),
            }
        }
    }

    pub fn status(&self, provider: &str) -> CircuitStatus {
        let trips = self.trips();
        let trip = trips.get(provider);
        CircuitStatus {
            provider: provider.to_string(),
            state: trip.map_or(CircuitState::Closed, |t| t.state),
            failure_count: trip.map_or(0, |t| t.failures),
            last_failure: trip.map(|t| t.last_failure),
        }
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new()
    }
}
