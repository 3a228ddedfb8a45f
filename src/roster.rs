use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use time::{
    format_description::FormatItem,
    macros::{date, format_description},
    Date,
};

/// The one format PTO dates cross any boundary in.  Parsing a string with
/// this description and reformatting the result must yield the identical
/// string.
pub(crate) static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// An employee and the days they are on PTO, in roster-file order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Employee {
    name: String,
    pto_days: Vec<Date>,
}

impl Employee {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn pto_days(&self) -> &[Date] {
        &self.pto_days
    }
}

/// The PTO dataset: an ordered list of employees.  Iteration order is the
/// order of the roster file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Reads a roster from a JSON file: an array of
    /// `{"name": "...", "pto": ["YYYY-MM-DD", ...]}` objects.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Roster> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let raw = serde_json::from_str::<Vec<RawEmployee>>(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Roster::from_raw(raw)?)
    }

    fn from_raw(raw: Vec<RawEmployee>) -> Result<Roster, RosterError> {
        let mut employees = Vec::with_capacity(raw.len());
        let mut seen = HashSet::with_capacity(raw.len());
        for emp in raw {
            // Names key the dataset, so two entries for one name is a bad
            // roster, not a merge
            if !seen.insert(emp.name.clone()) {
                return Err(RosterError::DuplicateEmployee(emp.name));
            }
            let mut pto_days = Vec::with_capacity(emp.pto.len());
            for datestr in &emp.pto {
                pto_days.push(parse_pto_date(&emp.name, datestr)?);
            }
            employees.push(Employee {
                name: emp.name,
                pto_days,
            });
        }
        Ok(Roster { employees })
    }

    pub(crate) fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// The built-in demonstration dataset, used when no roster file is given.
    pub(crate) fn sample() -> Roster {
        let data: [(&str, &[Date]); 5] = [
            (
                "Faustino Shields",
                &[date!(2025 - 3 - 11), date!(2025 - 3 - 12), date!(2025 - 3 - 13)],
            ),
            (
                "Aliya Schinner",
                &[date!(2025 - 3 - 20), date!(2025 - 3 - 21), date!(2025 - 3 - 22)],
            ),
            ("Damien Roob", &[date!(2025 - 3 - 25), date!(2025 - 3 - 26)]),
            ("Mae Flatley", &[date!(2025 - 3 - 18), date!(2025 - 3 - 19)]),
            (
                "Loraine Stracke",
                &[date!(2025 - 3 - 28), date!(2025 - 3 - 29)],
            ),
        ];
        Roster {
            employees: data
                .into_iter()
                .map(|(name, pto_days)| Employee {
                    name: name.to_owned(),
                    pto_days: pto_days.to_vec(),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
struct RawEmployee {
    name: String,
    pto: Vec<String>,
}

#[derive(Debug, Error)]
pub(crate) enum RosterError {
    #[error(transparent)]
    MalformedDate(#[from] MalformedDateError),
    #[error("duplicate employee {0:?} in roster")]
    DuplicateEmployee(String),
}

#[derive(Debug, Error)]
#[error("invalid PTO date {date:?} for employee {employee:?}")]
pub(crate) struct MalformedDateError {
    employee: String,
    date: String,
    source: Option<time::error::Parse>,
}

fn parse_pto_date(employee: &str, datestr: &str) -> Result<Date, MalformedDateError> {
    let malformed = |source| MalformedDateError {
        employee: employee.to_owned(),
        date: datestr.to_owned(),
        source,
    };
    let date = Date::parse(datestr, &YMD_FMT).map_err(|e| malformed(Some(e)))?;
    // Reject anything that parses but does not round-trip
    match date.format(&YMD_FMT) {
        Ok(formatted) if formatted == datestr => Ok(date),
        _ => Err(malformed(None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let date = parse_pto_date("Mae Flatley", "2025-03-18").unwrap();
        assert_eq!(date, date!(2025 - 3 - 18));
        assert_eq!(date.format(&YMD_FMT).unwrap(), "2025-03-18");
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        for datestr in ["2025/03/18", "2025-3-18", "03-18-2025", "yesterday", ""] {
            let e = parse_pto_date("Mae Flatley", datestr).unwrap_err();
            let msg = e.to_string();
            assert!(msg.contains(datestr), "error should name {datestr:?}: {msg}");
            assert!(msg.contains("Mae Flatley"), "error should name the employee: {msg}");
        }
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_date() {
        assert!(parse_pto_date("Damien Roob", "2025-02-30").is_err());
        assert!(parse_pto_date("Damien Roob", "2025-13-01").is_err());
        // Not a leap year
        assert!(parse_pto_date("Damien Roob", "2025-02-29").is_err());
        assert!(parse_pto_date("Damien Roob", "2024-02-29").is_ok());
    }

    #[test]
    fn test_from_raw_preserves_order() {
        let raw = vec![
            RawEmployee {
                name: "Loraine Stracke".into(),
                pto: vec!["2025-03-28".into(), "2025-03-29".into()],
            },
            RawEmployee {
                name: "Aliya Schinner".into(),
                pto: Vec::new(),
            },
        ];
        let roster = Roster::from_raw(raw).unwrap();
        let names = roster
            .employees()
            .iter()
            .map(Employee::name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["Loraine Stracke", "Aliya Schinner"]);
        assert!(roster.employees()[1].pto_days().is_empty());
    }

    #[test]
    fn test_from_raw_rejects_duplicate_names() {
        let raw = vec![
            RawEmployee {
                name: "Mae Flatley".into(),
                pto: vec!["2025-03-18".into()],
            },
            RawEmployee {
                name: "Damien Roob".into(),
                pto: Vec::new(),
            },
            RawEmployee {
                name: "Mae Flatley".into(),
                pto: vec!["2025-03-19".into()],
            },
        ];
        let e = Roster::from_raw(raw).unwrap_err();
        assert_eq!(e.to_string(), "duplicate employee \"Mae Flatley\" in roster");
    }

    #[test]
    fn test_from_raw_fails_fast() {
        let raw = vec![RawEmployee {
            name: "Damien Roob".into(),
            pto: vec!["2025-03-25".into(), "not-a-date".into()],
        }];
        let e = Roster::from_raw(raw).unwrap_err();
        assert_eq!(
            e.to_string(),
            "invalid PTO date \"not-a-date\" for employee \"Damien Roob\""
        );
    }

    #[test]
    fn test_roster_json_deserializes() {
        let text = r#"[
            {"name": "Faustino Shields", "pto": ["2025-03-11", "2025-03-12"]},
            {"name": "Mae Flatley", "pto": []}
        ]"#;
        let raw = serde_json::from_str::<Vec<RawEmployee>>(text).unwrap();
        let roster = Roster::from_raw(raw).unwrap();
        assert_eq!(roster.employees().len(), 2);
        assert_eq!(
            roster.employees()[0].pto_days(),
            [date!(2025 - 3 - 11), date!(2025 - 3 - 12)]
        );
    }

    #[test]
    fn test_empty_roster_is_valid() {
        let roster = Roster::from_raw(Vec::new()).unwrap();
        assert!(roster.employees().is_empty());
    }
}
