//! Row model: raw alarm events and their derived recovery time.

use calamine::Data;
use time::PrimitiveDateTime;

use super::timestamp::timestamp_from_cell;

/// One row of the uploaded table, as read.
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmEvent {
    pub center: Option<String>,
    /// Normalized ticket identifier; `""` when the cell was empty or NaN-like.
    pub ticket_id: String,
    pub alarm_time: Option<PrimitiveDateTime>,
    pub normalization_time: Option<PrimitiveDateTime>,
}

impl AlarmEvent {
    pub(crate) fn from_cells(
        center: Option<&Data>,
        ticket: Option<&Data>,
        alarm: Option<&Data>,
        normalization: Option<&Data>,
    ) -> Self {
        Self {
            center: center.and_then(center_from_cell),
            ticket_id: ticket.map(ticket_from_cell).unwrap_or_default(),
            alarm_time: alarm.and_then(timestamp_from_cell),
            normalization_time: normalization.and_then(timestamp_from_cell),
        }
    }
}

/// An event with both timestamps present and a non-negative recovery time.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedEvent {
    pub center: Option<String>,
    pub ticket_id: String,
    pub alarm_time: PrimitiveDateTime,
    pub normalization_time: PrimitiveDateTime,
    pub recovery_minutes: f64,
}

impl DerivedEvent {
    /// Returns `None` for events that must not reach any aggregate: a missing
    /// timestamp or a normalization earlier than the alarm.
    pub fn derive(event: AlarmEvent) -> Option<Self> {
        let alarm_time = event.alarm_time?;
        let normalization_time = event.normalization_time?;
        let recovery_minutes = (normalization_time - alarm_time).as_seconds_f64() / 60.0;
        if recovery_minutes < 0.0 {
            return None;
        }

        Some(Self {
            center: event.center,
            ticket_id: event.ticket_id,
            alarm_time,
            normalization_time,
            recovery_minutes,
        })
    }

    /// An incident was registered when the ticket id carries at least one digit.
    pub fn has_ticket(&self) -> bool {
        ticket_is_registered(&self.ticket_id)
    }
}

pub fn ticket_is_registered(ticket_id: &str) -> bool {
    ticket_id.trim().chars().any(|c| c.is_ascii_digit())
}

fn center_from_cell(cell: &Data) -> Option<String> {
    let label = cell_text(cell)?;
    let label = label.trim();
    (!label.is_empty()).then(|| label.to_string())
}

fn ticket_from_cell(cell: &Data) -> String {
    let text = cell_text(cell).unwrap_or_default();
    let text = text.trim();
    if is_nan_like(text) {
        String::new()
    } else {
        text.to_string()
    }
}

fn is_nan_like(text: &str) -> bool {
    ["nan", "none", "nat", "null"]
        .iter()
        .any(|marker| text.eq_ignore_ascii_case(marker))
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => Some(text.clone()),
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) if value.is_finite() && value.fract() == 0.0 => {
            Some(format!("{value:.0}"))
        }
        Data::Float(value) if value.is_finite() => Some(value.to_string()),
        Data::Bool(value) => Some(value.to_string()),
        Data::DateTime(value) => Some(value.as_f64().to_string()),
        Data::Float(_) | Data::Error(_) | Data::Empty => None,
    }
}
