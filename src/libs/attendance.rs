//! Attendance data as returned by the upstream script endpoint.
//!
//! A lookup returns one [`AttendanceData`] value holding the worker identity,
//! a pre-computed [`AttendanceSummary`] and the raw sheet rows. Rows are
//! positional: every [`AttendanceRow`] carries the 11 sheet columns in the
//! order described by [`Column`].
//!
//! The value lives for one fetch cycle. A new lookup replaces it wholesale.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Number of positional columns in an attendance row.
pub const ROW_WIDTH: usize = 11;

/// Positional meaning of the attendance row cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date = 0,
    Location = 1,
    DutyIn = 2,
    BreakOut = 3,
    BreakIn = 4,
    DutyOut = 5,
    TotalHours = 6,
    BasicHours = 7,
    Overtime = 8,
    LessBasic = 9,
    Remarks = 10,
}

/// One sheet row with 11 nullable text cells.
///
/// Cells that arrive as JSON numbers or booleans are kept as their text
/// form. Short rows are padded with `None`, extra cells are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttendanceRow {
    cells: [Option<String>; ROW_WIDTH],
}

impl AttendanceRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut row = Self::default();
        for (slot, cell) in row.cells.iter_mut().zip(cells) {
            *slot = cell.map(Into::into);
        }
        row
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.cells[column as usize].as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.get(Column::Date)
    }

    pub fn location(&self) -> Option<&str> {
        self.get(Column::Location)
    }

    pub fn duty_in(&self) -> Option<&str> {
        self.get(Column::DutyIn)
    }

    pub fn break_out(&self) -> Option<&str> {
        self.get(Column::BreakOut)
    }

    pub fn break_in(&self) -> Option<&str> {
        self.get(Column::BreakIn)
    }

    pub fn duty_out(&self) -> Option<&str> {
        self.get(Column::DutyOut)
    }

    pub fn total_hours(&self) -> Option<&str> {
        self.get(Column::TotalHours)
    }

    pub fn basic_hours(&self) -> Option<&str> {
        self.get(Column::BasicHours)
    }

    pub fn overtime(&self) -> Option<&str> {
        self.get(Column::Overtime)
    }

    pub fn less_basic(&self) -> Option<&str> {
        self.get(Column::LessBasic)
    }

    pub fn remarks(&self) -> Option<&str> {
        self.get(Column::Remarks)
    }

    /// A row counts as worked when both duty-in and duty-out are filled.
    pub fn is_working_day(&self) -> bool {
        matches!((self.duty_in(), self.duty_out()), (Some(i), Some(o)) if !i.is_empty() && !o.is_empty())
    }
}

fn cell_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Summary totals arrive as text or as bare JSON numbers; both keep their text form.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(cell_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

impl<'de> Deserialize<'de> for AttendanceRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cells = Vec::<Value>::deserialize(deserializer)?;
        Ok(Self::new(cells.into_iter().map(cell_text)))
    }
}

/// Monthly totals computed by the upstream sheet.
///
/// `warning` is displayed as a count but is also subtracted from
/// `total_hours` as if it were hours when the final figure is derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceSummary {
    #[serde(deserialize_with = "text_or_number")]
    pub total_hours: String,
    #[serde(deserialize_with = "text_or_number")]
    pub total_overtime: String,
    pub absent: u32,
    pub sunday: u32,
    pub warning: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceData {
    #[serde(default)]
    pub worker_id: String,
    #[serde(default)]
    pub worker_name: String,
    #[serde(default)]
    pub summary: AttendanceSummary,
    #[serde(default)]
    pub rows: Vec<AttendanceRow>,
}

/// Body of an upstream lookup response: either data or an error message.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Failure { error: String },
    Data(AttendanceData),
}
