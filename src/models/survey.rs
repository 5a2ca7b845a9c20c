//! Survey domain models and JSON parsing.
//!
//! The spreadsheet reader hands the core an already-materialized survey:
//! measurement rows in ascending distance order, DCP/feature rows keyed by
//! station, and the sheet header. Field names serialize to the spreadsheet
//! header text, so the JSON shape matches what the reader and the grid
//! collaborator exchange. The edited variant of a survey round-trips as a
//! plain JSON blob with a content checksum for change detection.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::units::Volts;

/// One measurement record, keyed by distance from the survey start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRow {
    #[serde(rename = "Data No", default)]
    pub data_no: u32,
    /// Meters from the survey start; the join key for segmentation.
    #[serde(rename = "Dist From Start")]
    pub distance: u32,
    /// Station identifier. NaN when the source cell is not numeric.
    #[serde(
        rename = "Station No",
        default = "nan_station",
        deserialize_with = "number_or_string"
    )]
    pub station: f64,
    /// Cathodic-protection potential with current on, in volts.
    /// `None` means no reading was taken, which is distinct from 0.0 V.
    #[serde(rename = "On Voltage", default, skip_serializing_if = "Option::is_none")]
    pub on_voltage: Option<Volts>,
    /// Cathodic-protection potential with current off, in volts.
    #[serde(rename = "Off Voltage", default, skip_serializing_if = "Option::is_none")]
    pub off_voltage: Option<Volts>,
    /// DCVG reading, in volts.
    #[serde(rename = "DCVG Voltage", default, skip_serializing_if = "Option::is_none")]
    pub dcvg_voltage: Option<Volts>,
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(
        rename = "DCP/Feature/DCVG Anomaly",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub anomaly_note: Option<String>,
    #[serde(rename = "On Time", default, skip_serializing_if = "Option::is_none")]
    pub on_time: Option<String>,
    #[serde(rename = "Off Time", default, skip_serializing_if = "Option::is_none")]
    pub off_time: Option<String>,
    #[serde(rename = "Latitude", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(rename = "Altitude", default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl SurveyRow {
    /// The annotation to display for this row: the comment when present and
    /// non-empty, otherwise the anomaly note.
    pub fn comment_or_anomaly(&self) -> Option<&str> {
        non_empty(&self.comment).or_else(|| non_empty(&self.anomaly_note))
    }
}

/// A DCP/feature record from the companion sheet, keyed by station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcpRow {
    #[serde(rename = "Data No", default)]
    pub data_no: u32,
    #[serde(
        rename = "Station No",
        default = "nan_station",
        deserialize_with = "number_or_string"
    )]
    pub station: f64,
    #[serde(rename = "Comments", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(
        rename = "DCP/Feature/Anomaly",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub anomaly_note: Option<String>,
    #[serde(rename = "Latitude", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(rename = "Altitude", default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

/// The survey-sheet header fields the core consumes. Unknown header keys are
/// ignored on parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyHeader {
    #[serde(rename = "SurveyName", default, skip_serializing_if = "Option::is_none")]
    pub survey_name: Option<String>,
    #[serde(
        rename = "Technician Name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub technician: Option<String>,
    /// Raw `date / time` cell from the sheet; see [`SurveyHeader::recorded_at`].
    #[serde(rename = "date / time", default, skip_serializing_if = "Option::is_none")]
    pub recorded_at_raw: Option<String>,
    #[serde(
        rename = "Dist per reading",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dist_per_reading: Option<f64>,
    #[serde(rename = "Use Metric", default, skip_serializing_if = "Option::is_none")]
    pub use_metric: Option<bool>,
}

impl SurveyHeader {
    /// Parse the sheet's `date / time` cell. The loggers are not consistent
    /// about the format, so a few common ones are tried in order.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        const FORMATS: [&str; 4] = [
            "%m/%d/%Y %H:%M:%S",
            "%m/%d/%Y %I:%M:%S %p",
            "%Y-%m-%d %H:%M:%S",
            "%d/%m/%Y %H:%M",
        ];
        let raw = self.recorded_at_raw.as_deref()?.trim();
        FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    }
}

/// A full survey as produced by the spreadsheet reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    #[serde(rename = "surveyInfo", default)]
    pub header: SurveyHeader,
    #[serde(rename = "surveyData")]
    pub rows: Vec<SurveyRow>,
    #[serde(rename = "DCPData", default)]
    pub dcp_rows: Vec<DcpRow>,
}

/// The edited variant of a survey, persisted as a JSON blob by the storage
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditedSurvey {
    #[serde(rename = "surveyData")]
    pub rows: Vec<SurveyRow>,
    #[serde(rename = "savedAt", default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub checksum: String,
}

impl EditedSurvey {
    /// Start an editing session from the original survey's rows.
    pub fn from_survey(survey: &Survey) -> Self {
        Self {
            rows: survey.rows.clone(),
            saved_at: None,
            checksum: String::new(),
        }
    }

    /// Parse an edited-survey blob, computing the content checksum from the
    /// input when the blob does not carry one.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut edited: EditedSurvey =
            deserialize_with_path(json).context("failed to deserialize edited survey JSON")?;
        if edited.checksum.is_empty() {
            edited.checksum = content_checksum(json);
        }
        Ok(edited)
    }

    /// Serialize for persistence, stamping `saved_at` and refreshing the
    /// checksum over the serialized rows.
    pub fn to_json_string(&self) -> Result<String> {
        let mut stamped = self.clone();
        stamped.saved_at = Some(Utc::now());
        let rows_json = serde_json::to_string(&stamped.rows)
            .context("failed to serialize edited survey rows")?;
        stamped.checksum = content_checksum(&rows_json);
        serde_json::to_string(&stamped).context("failed to serialize edited survey")
    }
}

/// Parse a survey produced by the spreadsheet reader.
///
/// On a malformed field the error message names the offending JSON path
/// (e.g. `surveyData[3]."Dist From Start"`).
pub fn parse_survey_json_str(json: &str) -> Result<Survey> {
    deserialize_with_path(json).context("failed to deserialize survey JSON")
}

fn deserialize_with_path<'de, T: Deserialize<'de>>(json: &'de str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let value = serde_path_to_error::deserialize(&mut deserializer)?;
    Ok(value)
}

/// SHA-256 checksum of a JSON blob, hex-encoded.
fn content_checksum(json: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    hex::encode(hasher.finalize())
}

/// `Some` when the optional string is present and non-empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn nan_station() -> f64 {
    f64::NAN
}

/// Accept a station number as a JSON number or as a string cell; a string
/// that does not parse becomes NaN rather than a parse failure.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
    })
}
