use time::Date;

/// A maximal run of consecutive calendar days, all marked PTO for one
/// employee.
// Invariant: non-empty; each element is exactly one day after the previous
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PtoPeriod(Vec<Date>);

impl PtoPeriod {
    pub(super) fn start(&self) -> Date {
        *self
            .0
            .first()
            .expect("a period should contain at least one day")
    }

    pub(super) fn end(&self) -> Date {
        *self
            .0
            .last()
            .expect("a period should contain at least one day")
    }

    pub(super) fn contains(&self, date: Date) -> bool {
        // Contiguity makes membership a range check
        self.start() <= date && date <= self.end()
    }
}

/// Partitions an employee's PTO days into maximal runs of consecutive
/// calendar days, in ascending order.
///
/// The input need not be sorted.  Duplicate days are collapsed: a PTO date
/// set is a set, and a repeated entry is treated as the same day off.
pub(super) fn find_continuous_periods(dates: &[Date]) -> Vec<PtoPeriod> {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let mut periods = Vec::new();
    let mut current: Vec<Date> = Vec::new();
    for date in sorted {
        match current.last() {
            Some(&prev) if prev.next_day() != Some(date) => {
                periods.push(PtoPeriod(std::mem::replace(&mut current, vec![date])));
            }
            _ => current.push(date),
        }
    }
    if !current.is_empty() {
        periods.push(PtoPeriod(current));
    }
    periods
}

/// Returns the run containing `day`, if any.  Linear scan; an employee has at
/// most a handful of runs per month.
pub(super) fn period_containing(periods: &[PtoPeriod], day: Date) -> Option<&PtoPeriod> {
    periods.iter().find(|p| p.contains(day))
}
