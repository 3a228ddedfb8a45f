use super::month::{month_days, next_reference, previous_reference, OutOfTimeError};
use super::periods::{find_continuous_periods, period_containing, PtoPeriod};
use crate::roster::{Employee, Roster};
use time::Date;

/// One row of the grid: an employee's identity plus a PTO flag per day in
/// view.  Row identity is its position in [`GridModel::rows`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GridRow {
    name: String,
    initials: String,
    on_pto: Vec<bool>,
}

impl GridRow {
    fn new(employee: &Employee, days: &[Date]) -> GridRow {
        GridRow {
            name: employee.name().to_owned(),
            initials: initials_of(employee.name()),
            on_pto: days
                .iter()
                .map(|d| employee.pto_days().contains(d))
                .collect(),
        }
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn initials(&self) -> &str {
        &self.initials
    }

    /// Whether the day at `day_index` (an index into the day sequence the row
    /// was built from) is a PTO day.
    pub(super) fn is_pto(&self, day_index: usize) -> bool {
        self.on_pto.get(day_index).copied().unwrap_or(false)
    }
}

/// The grid for one month: the day columns, one row per employee in roster
/// order, and each employee's contiguous PTO runs.
///
/// Built wholesale from a roster and a reference date; nothing here is
/// mutated after construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GridModel {
    days: Vec<Date>,
    rows: Vec<GridRow>,
    // Parallel to `rows`
    periods: Vec<Vec<PtoPeriod>>,
}

impl GridModel {
    pub(crate) fn build(roster: &Roster, reference: Date) -> GridModel {
        let days = month_days(reference);
        let rows = roster
            .employees()
            .iter()
            .map(|emp| GridRow::new(emp, &days))
            .collect();
        let periods = roster
            .employees()
            .iter()
            .map(|emp| find_continuous_periods(emp.pto_days()))
            .collect();
        GridModel {
            days,
            rows,
            periods,
        }
    }

    pub(crate) fn days(&self) -> &[Date] {
        &self.days
    }

    pub(super) fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// The PTO run containing `day` for the employee in row `row_index`, if
    /// any.  This is what per-cell rendering uses to decide highlighting and
    /// whether to draw a marker.
    pub(super) fn period_at(&self, row_index: usize, day: Date) -> Option<&PtoPeriod> {
        period_containing(self.periods.get(row_index)?, day)
    }
}

/// State behind the grid widget: the viewed month's model plus the inputs it
/// is derived from.  Navigation replaces the reference date and rebuilds the
/// model from scratch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GridState {
    pub(super) today: Date,
    reference: Date,
    roster: Roster,
    model: GridModel,
}

impl GridState {
    pub(crate) fn new(today: Date, roster: Roster) -> GridState {
        let model = GridModel::build(&roster, today);
        GridState {
            today,
            reference: today,
            roster,
            model,
        }
    }

    pub(crate) fn start_date(mut self, date: Date) -> GridState {
        self.reference = date;
        self.model = GridModel::build(&self.roster, date);
        self
    }

    pub(crate) fn model(&self) -> &GridModel {
        &self.model
    }

    pub(crate) fn month_forwards(&mut self) -> Result<(), OutOfTimeError> {
        self.reference = next_reference(self.reference, self.model.days().len())?;
        self.model = GridModel::build(&self.roster, self.reference);
        Ok(())
    }

    pub(crate) fn month_backwards(&mut self) -> Result<(), OutOfTimeError> {
        self.reference = previous_reference(self.reference, self.model.days().len())?;
        self.model = GridModel::build(&self.roster, self.reference);
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.reference = self.today;
        self.model = GridModel::build(&self.roster, self.today);
    }
}

fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
