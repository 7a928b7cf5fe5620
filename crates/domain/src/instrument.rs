use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use kapelle_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentId(Uuid);

impl InstrumentId {
    /// Creates a random instrument identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an instrument identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for InstrumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for InstrumentId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Maintenance status of an instrument.
///
/// Any state is reachable from any other; every change appends one
/// maintenance-log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstrumentCondition {
    /// Playable without restrictions.
    Good,
    /// Playable but a repair is due.
    NeedsRepair,
    /// Withdrawn until maintenance is done.
    MaintenanceRequired,
}

impl InstrumentCondition {
    /// Returns a stable storage value for this condition.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::NeedsRepair => "needs-repair",
            Self::MaintenanceRequired => "maintenance-required",
        }
    }

    /// Returns all known conditions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[InstrumentCondition] = &[
            InstrumentCondition::Good,
            InstrumentCondition::NeedsRepair,
            InstrumentCondition::MaintenanceRequired,
        ];

        ALL
    }
}

impl FromStr for InstrumentCondition {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "good" => Ok(Self::Good),
            "needs-repair" => Ok(Self::NeedsRepair),
            "maintenance-required" => Ok(Self::MaintenanceRequired),
            _ => Err(AppError::Validation(format!(
                "unknown instrument condition '{value}'"
            ))),
        }
    }
}

/// One entry of an instrument's append-only maintenance history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceLogEntry {
    recorded_at: DateTime<Utc>,
    note: String,
}

impl MaintenanceLogEntry {
    /// Returns when the entry was recorded.
    #[must_use]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Returns the free-text note.
    #[must_use]
    pub fn note(&self) -> &str {
        self.note.as_str()
    }
}

/// A physically unique instrument with at most one holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    instrument_id: InstrumentId,
    name: NonEmptyString,
    instrument_type: NonEmptyString,
    unique_code: NonEmptyString,
    condition: InstrumentCondition,
    assigned_to: Option<NonEmptyString>,
    maintenance_log: Vec<MaintenanceLogEntry>,
}

impl Instrument {
    /// Creates a new instrument in good condition with no holder.
    pub fn new(
        name: impl Into<String>,
        instrument_type: impl Into<String>,
        unique_code: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            instrument_id: InstrumentId::new(),
            name: NonEmptyString::new(name)?,
            instrument_type: NonEmptyString::new(instrument_type)?,
            unique_code: NonEmptyString::new(unique_code)?,
            condition: InstrumentCondition::Good,
            assigned_to: None,
            maintenance_log: Vec::new(),
        })
    }

    /// Returns the instrument identifier.
    #[must_use]
    pub fn instrument_id(&self) -> InstrumentId {
        self.instrument_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the instrument type label.
    #[must_use]
    pub fn instrument_type(&self) -> &NonEmptyString {
        &self.instrument_type
    }

    /// Returns the unique inventory code.
    #[must_use]
    pub fn unique_code(&self) -> &NonEmptyString {
        &self.unique_code
    }

    /// Returns the current condition.
    #[must_use]
    pub fn condition(&self) -> InstrumentCondition {
        self.condition
    }

    /// Returns the current holder, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&NonEmptyString> {
        self.assigned_to.as_ref()
    }

    /// Returns the maintenance history, oldest first.
    #[must_use]
    pub fn maintenance_log(&self) -> &[MaintenanceLogEntry] {
        self.maintenance_log.as_slice()
    }

    /// Moves the instrument to a new condition and records the change.
    pub fn set_condition(&mut self, condition: InstrumentCondition, note: impl Into<String>) {
        self.condition = condition;
        self.maintenance_log.push(MaintenanceLogEntry {
            recorded_at: Utc::now(),
            note: note.into(),
        });
    }

    /// Hands the instrument to an assignee.
    ///
    /// Re-assigning the current holder is a no-op success; any other holder
    /// must be unassigned first.
    pub fn assign_to(&mut self, assignee: &str) -> AppResult<()> {
        let assignee = NonEmptyString::new(assignee)?;

        match &self.assigned_to {
            Some(current) if *current == assignee => Ok(()),
            Some(current) => Err(AppError::AlreadyAssigned(format!(
                "instrument '{}' is already assigned to '{}'",
                self.unique_code.as_str(),
                current.as_str()
            ))),
            None => {
                self.assigned_to = Some(assignee);
                Ok(())
            }
        }
    }

    /// Takes the instrument back from its holder.
    pub fn unassign(&mut self) -> AppResult<()> {
        if self.assigned_to.take().is_none() {
            return Err(AppError::NotFound(format!(
                "instrument '{}' has no assignee",
                self.unique_code.as_str()
            )));
        }

        Ok(())
    }
}
