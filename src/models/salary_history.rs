//! Salary history model.
//!
//! This module defines the [`SalaryHistoryEntry`] struct, an immutable
//! point-in-time record of an employee's salary components.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Divisor applied to a lump total when reconstructing the basic salary
/// component, matching the spreadsheet-import convention.
const BASIC_FROM_TOTAL_DIVISOR: Decimal = Decimal::from_parts(135, 0, 0, false, 2);

/// Housing allowance as a fraction of basic salary under the same convention.
const HOUSING_RATIO: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// A point-in-time salary record for an employee.
///
/// Each entry records the salary components that took effect on `date`.
/// Entries are append-mostly; chronological order (not insertion order) is
/// what matters when reconstructing the salary in effect at a past date.
/// The `total` is stored independently rather than recomputed, so imported
/// records keep whatever total the source system carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryHistoryEntry {
    /// The day this salary took effect.
    pub date: NaiveDate,
    /// Basic monthly salary.
    pub basic_salary: Decimal,
    /// Monthly housing allowance.
    pub housing_allowance: Decimal,
    /// Monthly transport allowance.
    pub transport_allowance: Decimal,
    /// Other monthly allowances.
    pub other_allowances: Decimal,
    /// The monthly total this entry represents.
    pub total: Decimal,
    /// Free-text annotation (e.g. "Annual Review", "Opening Balance").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SalaryHistoryEntry {
    /// Creates an entry from explicit components, deriving `total` as their sum.
    pub fn from_components(
        date: NaiveDate,
        basic_salary: Decimal,
        housing_allowance: Decimal,
        transport_allowance: Decimal,
        other_allowances: Decimal,
        reason: Option<String>,
    ) -> Self {
        let total = basic_salary + housing_allowance + transport_allowance + other_allowances;
        Self {
            date,
            basic_salary,
            housing_allowance,
            transport_allowance,
            other_allowances,
            total,
            reason,
        }
    }

    /// Reconstructs an entry from a single total-salary figure using the
    /// import convention: basic = total / 1.35 (2 dp), housing = basic x 0.25
    /// (2 dp), transport = the remainder, other = 0.
    ///
    /// Spreadsheet imports that only carry a total column use this split so
    /// that imported rows stay consistent with manually entered ones.
    ///
    /// # Example
    ///
    /// ```
    /// use esb_engine::models::SalaryHistoryEntry;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let entry = SalaryHistoryEntry::from_total(date, Decimal::from(13500), None);
    /// assert_eq!(entry.basic_salary, Decimal::from(10000));
    /// assert_eq!(entry.housing_allowance, Decimal::from(2500));
    /// assert_eq!(entry.transport_allowance, Decimal::from(1000));
    /// assert_eq!(entry.total, Decimal::from(13500));
    /// ```
    pub fn from_total(date: NaiveDate, total: Decimal, reason: Option<String>) -> Self {
        let basic_salary = (total / BASIC_FROM_TOTAL_DIVISOR).round_dp(2);
        let housing_allowance = (basic_salary * HOUSING_RATIO).round_dp(2);
        let transport_allowance = total - basic_salary - housing_allowance;
        Self {
            date,
            basic_salary,
            housing_allowance,
            transport_allowance,
            other_allowances: Decimal::ZERO,
            total,
            reason,
        }
    }

    /// Sum of the four salary components.
    ///
    /// May differ from the stored `total` for imported records; salary
    /// resolution always uses the stored `total`.
    pub fn component_total(&self) -> Decimal {
        self.basic_salary + self.housing_allowance + self.transport_allowance
            + self.other_allowances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    #[test]
    fn test_from_components_sums_total() {
        let entry = SalaryHistoryEntry::from_components(
            date("2023-01-01"),
            dec("8000"),
            dec("2000"),
            dec("500"),
            dec("300"),
            Some("Annual Review".to_string()),
        );
        assert_eq!(entry.total, dec("10800"));
        assert_eq!(entry.component_total(), dec("10800"));
    }

    #[test]
    fn test_from_total_applies_import_split() {
        let entry = SalaryHistoryEntry::from_total(date("2024-01-01"), dec("13500"), None);
        assert_eq!(entry.basic_salary, dec("10000.00"));
        assert_eq!(entry.housing_allowance, dec("2500.00"));
        assert_eq!(entry.transport_allowance, dec("1000.00"));
        assert_eq!(entry.other_allowances, Decimal::ZERO);
        assert_eq!(entry.total, dec("13500"));
    }

    #[test]
    fn test_from_total_components_sum_back_to_total() {
        // The transport remainder absorbs rounding so components always sum
        // exactly to the imported total.
        let entry = SalaryHistoryEntry::from_total(date("2024-01-01"), dec("10000"), None);
        assert_eq!(entry.component_total(), dec("10000"));
        assert_eq!(entry.basic_salary, dec("7407.41"));
        assert_eq!(entry.housing_allowance, dec("1851.85"));
    }

    #[test]
    fn test_stored_total_is_independent_of_components() {
        let mut entry = SalaryHistoryEntry::from_components(
            date("2020-06-01"),
            dec("5000"),
            dec("1000"),
            dec("0"),
            dec("0"),
            None,
        );
        entry.total = dec("9999");
        assert_eq!(entry.total, dec("9999"));
        assert_eq!(entry.component_total(), dec("6000"));
    }

    #[test]
    fn test_deserialize_entry() {
        let json = r#"{
            "date": "2020-01-01",
            "basic_salary": "5000",
            "housing_allowance": "1250",
            "transport_allowance": "500",
            "other_allowances": "0",
            "total": "6750",
            "reason": "Opening Balance"
        }"#;

        let entry: SalaryHistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, date("2020-01-01"));
        assert_eq!(entry.total, dec("6750"));
        assert_eq!(entry.reason.as_deref(), Some("Opening Balance"));
    }

    #[test]
    fn test_reason_defaults_to_none() {
        let json = r#"{
            "date": "2020-01-01",
            "basic_salary": "5000",
            "housing_allowance": "0",
            "transport_allowance": "0",
            "other_allowances": "0",
            "total": "5000"
        }"#;

        let entry: SalaryHistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.reason, None);
    }
}
