//! Page-lifetime dashboard state.
//!
//! `SessionState` is owned by the top-level view. Its fields are readable by
//! anyone, but the only writers are the transition methods below, driven by
//! `pipeline::submit`, `pipeline::refresh_history` and `reset`.

use crate::evaporation::EvaporationResult;
use crate::history::{truncate_history, HistoryEntry};
use crate::storage::StoragePlanningResult;
use crate::validation::{parse_surface_area, validate, ValidationError};
use crate::weather::{WeatherForm, WeatherInput, DEFAULT_SURFACE_AREA};
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Which service call a failure belongs to; selects the error prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Evaporation,
    StoragePlanning,
}

impl Stage {
    fn error_prefix(self) -> &'static str {
        match self {
            Stage::Evaporation => "Error calculating evaporation: ",
            Stage::StoragePlanning => "Error calculating storage planning: ",
        }
    }
}

/// Why a submission never reached the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission is already in flight
    #[error("A calculation is already in progress")]
    InFlight,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A validated submission, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub input: WeatherInput,
    /// m²
    pub surface_area: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub form: WeatherForm,
    /// Raw text of the reservoir surface area field, m²
    pub surface_area: String,
    pub evaporation: Option<EvaporationResult>,
    pub storage_planning: Option<StoragePlanningResult>,
    pub loading: bool,
    pub error: Option<String>,
    /// Newest first, at most `HISTORY_LIMIT` entries
    pub history: Vec<HistoryEntry>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            form: WeatherForm::default(),
            surface_area: DEFAULT_SURFACE_AREA.to_string(),
            evaporation: None,
            storage_planning: None,
            loading: false,
            error: None,
            history: Vec::new(),
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the current form and, if accepted, enter the loading state.
    ///
    /// Rejected while another submission is in flight; that path leaves the
    /// state untouched. A validation failure sets the error slot.
    pub fn begin_submission(&mut self) -> Result<Submission, SubmitRejected> {
        if self.loading {
            warn!("Ignoring submission while another calculation is in progress");
            return Err(SubmitRejected::InFlight);
        }

        let validated = validate(&self.form).and_then(|input| {
            parse_surface_area(&self.surface_area).map(|surface_area| Submission {
                input,
                surface_area,
            })
        });

        match validated {
            Ok(submission) => {
                self.error = None;
                self.loading = true;
                Ok(submission)
            }
            Err(e) => {
                info!("Submission rejected by validation: {}", e);
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Store a new evaporation result. Any storage plan from an earlier run
    /// is dropped so the two results always belong to the same submission.
    pub fn record_evaporation(&mut self, result: EvaporationResult) {
        self.evaporation = Some(result);
        self.storage_planning = None;
    }

    pub fn record_storage_planning(&mut self, result: StoragePlanningResult) {
        self.storage_planning = Some(result);
    }

    /// Surface a service failure and leave the loading state. Results from
    /// earlier stages stay in place.
    pub fn record_failure(&mut self, stage: Stage, message: &str) {
        self.error = Some(format!("{}{}", stage.error_prefix(), message));
        self.loading = false;
    }

    pub fn finish_submission(&mut self) {
        self.loading = false;
    }

    pub fn replace_history(&mut self, entries: Vec<HistoryEntry>) {
        self.history = truncate_history(entries);
    }

    /// Clear the form, surface area, results and error. History and the
    /// loading flag are kept.
    pub fn reset(&mut self) {
        self.form = WeatherForm::default();
        self.surface_area = DEFAULT_SURFACE_AREA.to_string();
        self.evaporation = None;
        self.storage_planning = None;
        self.error = None;
    }
}

/// Access to the session state from async code.
///
/// Implementations must not hold a borrow across calls: the pipeline awaits
/// between updates and other event handlers may read in the meantime.
pub trait SessionStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R;
}

impl SessionStore for SessionState {
    fn update<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(self)
    }
}

impl SessionStore for Rc<RefCell<SessionState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
