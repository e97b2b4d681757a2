//! Terminal rendering of attendance results.
//!
//! Two layouts are offered for the rows: a wide table with one line per day
//! and a card per day for narrow terminals. Both are preceded by the summary
//! block. Row colour follows [`RowClass`].

use super::attendance::{AttendanceData, AttendanceRow};
use super::breaks::break_duration;
use super::formatter::{format_time_field, or_placeholder, PLACEHOLDER};
use super::locale::Language;
use super::lookup::MonthOption;
use super::messages::Message;
use super::summary::{AttendanceMetrics, RowClass};
use crate::msg_print;
use anyhow::Result;
use clap::ValueEnum;
use prettytable::{format, Attr, Cell, Row, Table};
use std::collections::HashMap;

/// Maximum location length shown on a card before truncation.
pub const CARD_LOCATION_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

/// Display strings of one row, with remarks already translated.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDisplay {
    pub class: RowClass,
    pub date: String,
    pub location: String,
    pub duty_in: String,
    pub break_out: String,
    pub break_in: String,
    pub duty_out: String,
    pub total_hours: String,
    pub total_break: String,
    pub basic_hours: String,
    pub overtime: String,
    pub less_basic: String,
    pub remarks: String,
}

impl RowDisplay {
    /// Builds the display strings of a row. `remarks` maps original remark
    /// text to its translation; untranslated remarks are shown as-is.
    pub fn new(row: &AttendanceRow, remarks: &HashMap<String, String>) -> Self {
        let remark = row
            .remarks()
            .filter(|r| !r.is_empty())
            .map(|r| remarks.get(r).cloned().unwrap_or_else(|| r.to_string()))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        Self {
            class: RowClass::classify(row.remarks()),
            date: or_placeholder(row.date()),
            location: or_placeholder(row.location()),
            duty_in: or_placeholder(row.duty_in()),
            break_out: or_placeholder(row.break_out()),
            break_in: or_placeholder(row.break_in()),
            duty_out: or_placeholder(row.duty_out()),
            total_hours: format_time_field(row.total_hours()),
            total_break: break_duration(row.break_out(), row.break_in()),
            basic_hours: format_time_field(row.basic_hours()),
            overtime: format_time_field(row.overtime()),
            less_basic: format_time_field(row.less_basic()),
            remarks: remark,
        }
    }
}

/// Shortens text to `width` characters, appending `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let mut short: String = text.chars().take(width).collect();
        short.push('…');
        short
    } else {
        text.to_string()
    }
}

/// prettytable style spec of a cell: the row colour, plus right alignment
/// for text in a right-to-left language.
pub fn cell_style(class: RowClass, right_to_left: bool) -> String {
    let mut spec = class.style().to_string();
    if right_to_left {
        spec.push('r');
    }
    spec
}

fn styled_cell(text: &str, class: RowClass) -> Cell {
    aligned_cell(text, class, false)
}

fn aligned_cell(text: &str, class: RowClass, right_to_left: bool) -> Cell {
    let cell = Cell::new(text);
    match cell_style(class, right_to_left).as_str() {
        "" => cell,
        spec => cell.style_spec(spec),
    }
}

pub struct View {}

impl View {
    pub fn summary(data: &AttendanceData, metrics: &AttendanceMetrics) -> Result<()> {
        let summary = &data.summary;
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let items = [
            (Message::SummaryTotalHours, summary.total_hours.clone(), RowClass::Neutral),
            (Message::SummaryTotalOvertime, summary.total_overtime.clone(), RowClass::Neutral),
            (
                Message::SummaryWorkingDays,
                format!("{}/{} ({}%)", metrics.working_days, metrics.total_days, metrics.working_days_percentage),
                RowClass::Neutral,
            ),
            (Message::SummaryAbsent, summary.absent.to_string(), RowClass::Absent),
            (Message::SummarySunday, summary.sunday.to_string(), RowClass::Sunday),
            (Message::SummaryWarning, summary.warning.to_string(), RowClass::Warning),
            (Message::SummaryFinalHours, metrics.final_hours.clone(), RowClass::Neutral),
        ];

        for (label, value, class) in items {
            table.add_row(Row::new(vec![Cell::new(&label.to_string()), styled_cell(&value, class)]));
        }
        table.printstd();

        let name = if data.worker_name.is_empty() { "Employee" } else { &data.worker_name };
        msg_print!(Message::SummaryOverview(name.to_string()));
        msg_print!(Message::SummaryTotalWorked {
            hours: summary.total_hours.clone(),
            overtime: summary.total_overtime.clone(),
        });
        msg_print!(Message::SummaryAttendanceRate {
            working: metrics.working_days,
            total: metrics.total_days,
            percentage: metrics.working_days_percentage,
            absent: summary.absent,
        });
        msg_print!(Message::SummaryWarnings(summary.warning.to_string()));
        msg_print!(Message::SummaryDeduction(metrics.final_hours.clone()));
        msg_print!(Message::EmployeeId(or_placeholder(Some(&data.worker_id))), true);
        msg_print!(Message::EmployeeName(or_placeholder(Some(&data.worker_name))));

        Ok(())
    }

    /// Renders the rows. Remarks are right-aligned when `language` is
    /// written right to left.
    pub fn rows(rows: &[RowDisplay], mode: ViewMode, language: Language) -> Result<()> {
        if rows.is_empty() {
            msg_print!(Message::NoDataFound, true);
            return Ok(());
        }
        match mode {
            ViewMode::Table => Self::table(rows, language.is_rtl()),
            ViewMode::Cards => Self::cards(rows, language.is_rtl()),
        }
    }

    fn table(rows: &[RowDisplay], right_to_left: bool) -> Result<()> {
        let mut table = Table::new();

        let header = [
            Message::ColDate,
            Message::ColWorkLocation,
            Message::ColDutyIn,
            Message::ColBreakOut,
            Message::ColBreakIn,
            Message::ColDutyOut,
            Message::ColTotalHour,
            Message::ColTotalBreak,
            Message::ColBasicHour,
            Message::ColOvertime,
            Message::ColLessBasic,
            Message::ColRemarks,
        ];
        table.set_titles(Row::new(header.iter().map(|m| Cell::new(&m.to_string()).with_style(Attr::Bold)).collect()));

        for row in rows {
            let cells = [
                &row.date,
                &row.location,
                &row.duty_in,
                &row.break_out,
                &row.break_in,
                &row.duty_out,
                &row.total_hours,
                &row.total_break,
                &row.basic_hours,
                &row.overtime,
                &row.less_basic,
            ];
            let mut line: Vec<Cell> = cells.iter().map(|text| styled_cell(text, row.class)).collect();
            line.push(aligned_cell(&row.remarks, row.class, right_to_left));
            table.add_row(Row::new(line));
        }
        table.printstd();

        Ok(())
    }

    fn cards(rows: &[RowDisplay], right_to_left: bool) -> Result<()> {
        for row in rows {
            let mut card = Table::new();
            card.set_format(*format::consts::FORMAT_BOX_CHARS);
            card.set_titles(Row::new(vec![
                styled_cell(&row.date, row.class).with_style(Attr::Bold),
                styled_cell(&truncate(&row.location, CARD_LOCATION_WIDTH), row.class),
            ]));

            let fields = [
                (Message::ColDutyIn, &row.duty_in),
                (Message::ColDutyOut, &row.duty_out),
                (Message::ColBreakOut, &row.break_out),
                (Message::ColBreakIn, &row.break_in),
                (Message::ColTotalHour, &row.total_hours),
                (Message::ColTotalBreak, &row.total_break),
                (Message::ColOvertime, &row.overtime),
                (Message::ColLessBasic, &row.less_basic),
            ];
            for (label, value) in fields {
                card.add_row(Row::new(vec![Cell::new(&label.to_string()), Cell::new(value)]));
            }
            card.add_row(Row::new(vec![
                Cell::new(&Message::ColRemarks.to_string()),
                aligned_cell(&row.remarks, RowClass::Neutral, right_to_left),
            ]));
            card.printstd();
        }

        Ok(())
    }

    pub fn months(options: &[MonthOption]) -> Result<()> {
        msg_print!(Message::MonthOptionsHeader);
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        for option in options {
            table.add_row(Row::new(vec![Cell::new(&option.value.to_string()), Cell::new(&option.label)]));
        }
        table.printstd();

        Ok(())
    }
}
