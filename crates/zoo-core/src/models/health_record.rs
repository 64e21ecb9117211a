//! Health record models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::animal::Animal;
use super::ids::{AnimalId, RecordId};
use crate::error::{ZooError, ZooResult};
use crate::validation::{
    validate_date, validate_issue, validate_level, validate_string, DATE_FORMAT,
};

/// Category of a reported health issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Issue {
    #[serde(rename = "injuries")]
    Injuries,
    #[serde(rename = "illness")]
    Illness,
    #[serde(rename = "behavioral concerns")]
    BehavioralConcerns,
}

impl Issue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Issue::Injuries => "injuries",
            Issue::Illness => "illness",
            Issue::BehavioralConcerns => "behavioral concerns",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Issue {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "injuries" => Ok(Issue::Injuries),
            "illness" => Ok(Issue::Illness),
            "behavioral concerns" => Ok(Issue::BehavioralConcerns),
            other => Err(ZooError::Validation(format!("unknown issue '{}'", other))),
        }
    }
}

/// Severity of a reported health issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(ZooError::Validation(format!("unknown severity '{}'", other))),
        }
    }
}

/// Unvalidated record fields, as gathered from whoever reports the issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordDraft {
    /// Issue category (injuries / illness / behavioral concerns)
    pub issue: String,
    /// Severity (low / medium / high)
    pub severity: String,
    /// Date reported, DD/MM/YYYY
    pub date_reported: String,
    /// Initial treatment notes
    pub treatment_notes: String,
}

impl RecordDraft {
    pub fn new(issue: &str, severity: &str, date_reported: &str, treatment_notes: &str) -> Self {
        Self {
            issue: issue.into(),
            severity: severity.into(),
            date_reported: date_reported.into(),
            treatment_notes: treatment_notes.into(),
        }
    }
}

/// A record of one health issue for one animal.
///
/// Closing is one-way: once `active` is false the record is frozen.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthRecord {
    id: RecordId,
    animal_id: AnimalId,
    animal_name: String,
    issue: Issue,
    severity: Severity,
    date_reported: NaiveDate,
    treatment_notes: String,
    active: bool,
}

impl HealthRecord {
    /// Create a record for `animal`, validating every field.
    pub fn new(animal: &Animal, draft: RecordDraft, active: bool) -> ZooResult<Self> {
        let issue = validate_issue(&draft.issue, "issue")?;
        let severity = validate_level(&draft.severity, "severity")?;
        let date_reported = validate_date(&draft.date_reported, "date reported")?;
        let treatment_notes =
            validate_string(&draft.treatment_notes, "treatment notes")?.to_string();

        Ok(Self {
            id: RecordId::new(),
            animal_id: animal.id(),
            animal_name: animal.name().to_string(),
            issue,
            severity,
            date_reported,
            treatment_notes,
            active,
        })
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// The animal this record belongs to.
    pub fn animal_id(&self) -> AnimalId {
        self.animal_id
    }

    pub fn animal_name(&self) -> &str {
        &self.animal_name
    }

    pub fn issue(&self) -> Issue {
        self.issue
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn date_reported(&self) -> NaiveDate {
        self.date_reported
    }

    /// Date reported in DD/MM/YYYY form.
    pub fn date_reported_str(&self) -> String {
        self.date_reported.format(DATE_FORMAT).to_string()
    }

    pub fn treatment_notes(&self) -> &str {
        &self.treatment_notes
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Close the record. Fails if it is already closed.
    pub fn close(&mut self) -> ZooResult<()> {
        if !self.active {
            return Err(ZooError::State(format!(
                "health record '{}' is already closed",
                self.issue
            )));
        }
        self.active = false;
        Ok(())
    }

    /// Append a line to the treatment notes of an active record.
    pub fn add_notes(&mut self, notes: &str) -> ZooResult<()> {
        if !self.active {
            return Err(ZooError::State(format!(
                "cannot add notes, health record '{}' is already closed",
                self.issue
            )));
        }
        let notes = validate_string(notes, "notes")?;
        self.treatment_notes.push('\n');
        self.treatment_notes.push_str(notes);
        Ok(())
    }

    /// One-line summary, e.g. `[Active] injuries (Severity: high)`.
    pub fn summary(&self) -> String {
        let status = if self.active { "Active" } else { "Closed" };
        format!("[{}] {} (Severity: {})", status, self.issue, self.severity)
    }
}

impl fmt::Display for HealthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- HEALTH RECORD ---")?;
        writeln!(f, "Animal: {}", self.animal_name)?;
        writeln!(f, "Issue: {}", self.issue)?;
        writeln!(f, "Severity: {}", self.severity)?;
        writeln!(f, "Date reported: {}", self.date_reported_str())?;
        writeln!(f, "Treatment notes: {}", self.treatment_notes)?;
        write!(f, "Status: {}", if self.active { "Active" } else { "Closed" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn make_lion() -> Animal {
        Animal::mammal("Simba", "Lion", 5, "Meat", "savannah", true).unwrap()
    }

    fn make_record(active: bool) -> HealthRecord {
        let draft = RecordDraft::new("injuries", "high", "25/12/2025", "Initial treatment.");
        HealthRecord::new(&make_lion(), draft, active).unwrap()
    }

    #[test]
    fn test_valid_creation() {
        let lion = make_lion();
        let draft = RecordDraft::new(" Injuries ", "HIGH", "25/12/2025", " Initial treatment. ");
        let rec = HealthRecord::new(&lion, draft, true).unwrap();

        assert_eq!(rec.issue(), Issue::Injuries);
        assert_eq!(rec.severity(), Severity::High);
        assert_eq!(rec.date_reported_str(), "25/12/2025");
        assert_eq!(rec.treatment_notes(), "Initial treatment.");
        assert_eq!(rec.animal_id(), lion.id());
        assert!(rec.is_active());
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let lion = make_lion();
        let drafts = [
            RecordDraft::new("broken wing", "high", "25/12/2025", "Test"),
            RecordDraft::new("injuries", "critical", "25/12/2025", "Test"),
            RecordDraft::new("injuries", "high", "2025-12-25", "Test"),
            RecordDraft::new("injuries", "high", "25/12/2025", "   "),
        ];
        for draft in drafts {
            let err = HealthRecord::new(&lion, draft.clone(), true).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "draft {:?}", draft);
        }
    }

    #[test]
    fn test_close_twice_fails() {
        let mut rec = make_record(true);
        rec.close().unwrap();
        assert!(!rec.is_active());

        let err = rec.close().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::State);
    }

    #[test]
    fn test_add_notes() {
        let mut rec = make_record(true);
        rec.add_notes("Second check.").unwrap();
        assert_eq!(rec.treatment_notes(), "Initial treatment.\nSecond check.");

        let err = rec.add_notes("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_closed_record_is_frozen() {
        let mut rec = make_record(false);
        let err = rec.add_notes("Trying to modify closed record").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::State);
        assert_eq!(rec.treatment_notes(), "Initial treatment.");
    }

    #[test]
    fn test_display_contains_details() {
        let rec = make_record(true);
        let text = rec.to_string();
        assert!(text.contains("HEALTH RECORD"));
        assert!(text.contains("Simba"));
        assert!(text.contains("injuries"));
        assert!(text.contains("high"));
        assert!(text.contains("25/12/2025"));
        assert_eq!(rec.summary(), "[Active] injuries (Severity: high)");
    }
}
