use super::model::GridState;
use crate::theme::{
    AVATAR_STYLE, HEADER_STYLE, MONTH_STYLE, PTO_STYLE, TODAY_PTO_STYLE, TODAY_STYLE,
};
use ratatui::{prelude::*, widgets::*};
use time::Weekday;

/// Width of the fixed identity column (avatar initials plus display name)
const NAME_WIDTH: u16 = 20;

/// Columns per calendar day
const DAY_WIDTH: u16 = 3;

/// Lines taken up by the month title, the day-number and weekday headers, and
/// their rule
const HEADER_LINES: u16 = 4;

/// Drawn in every cell that falls inside a PTO run
static PTO_MARKER: &str = " ● ";

const ACS_HLINE: char = '─';

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct PtoGrid;

impl StatefulWidget for PtoGrid {
    type State = GridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let today = state.today;
        let model = state.model();
        let days = model.days();
        let Some(&first) = days.first() else {
            return;
        };
        let day_qty = u16::try_from(days.len()).expect("a month has at most 31 days");
        let total_width = NAME_WIDTH + DAY_WIDTH * day_qty;
        let left = area.width.saturating_sub(total_width) / 2;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(left),
                Constraint::Length(total_width.min(area.width)),
                Constraint::Min(0),
            ])
            .split(area);
        let mut canvas = BufferCanvas::new(chunks[1], buf);
        canvas.mvprint(
            0,
            NAME_WIDTH,
            format!("{} {}", first.month(), first.year()),
            Some(MONTH_STYLE),
        );
        for (i, day) in std::iter::zip(0u16.., days) {
            let x = NAME_WIDTH + DAY_WIDTH * i;
            let style = if *day == today {
                TODAY_STYLE
            } else {
                HEADER_STYLE
            };
            canvas.mvprint(1, x, format!("{:2} ", day.day()), Some(style));
            canvas.mvprint(2, x, format!("{} ", weekday_abbrev(day.weekday())), Some(style));
        }
        canvas.hline(3, 0, ACS_HLINE, total_width);
        for (r, row) in std::iter::zip(0u16.., model.rows()) {
            let y = HEADER_LINES + r;
            canvas.mvprint(y, 0, format!("{:<2.2}", row.initials()), Some(AVATAR_STYLE));
            canvas.mvprint(y, DAY_WIDTH, format!("{:.16}", row.name()), None);
            for (i, day) in std::iter::zip(0u16.., days) {
                let x = NAME_WIDTH + DAY_WIDTH * i;
                let run = model.period_at(usize::from(r), *day);
                debug_assert_eq!(
                    run.is_some(),
                    row.is_pto(usize::from(i)),
                    "row flags should agree with period membership"
                );
                let is_today = *day == today;
                match (run.is_some(), is_today) {
                    (true, true) => canvas.mvprint(y, x, PTO_MARKER, Some(TODAY_PTO_STYLE)),
                    (true, false) => canvas.mvprint(y, x, PTO_MARKER, Some(PTO_STYLE)),
                    (false, true) => canvas.mvprint(y, x, "   ", Some(TODAY_STYLE)),
                    (false, false) => (),
                }
            }
        }
    }
}

fn weekday_abbrev(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => "Su",
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
        Weekday::Saturday => "Sa",
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // grid's area, though we need to be sure that the Rect passed to
            // the Paragraph is entirely within the frame lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
