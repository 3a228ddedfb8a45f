use crate::grid::{GridState, PtoGrid};
use crate::help::Help;
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    grid: GridState,
    state: AppState,
}

impl App {
    pub(crate) fn new(grid: GridState) -> App {
        App {
            grid,
            state: AppState::Grid,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Grid => match key {
                KeyCode::Char('h') | KeyCode::Left => self.previous_month(),
                KeyCode::Char('l') | KeyCode::Right => self.next_month(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.grid.jump_to_today();
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Grid;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn previous_month(&mut self) -> bool {
        self.grid.month_backwards().is_ok()
    }

    fn next_month(&mut self) -> bool {
        self.grid.month_forwards().is_ok()
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        PtoGrid.render(area, buf, &mut self.grid);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Grid,
    Helping,
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;
    use crate::theme::{AVATAR_STYLE, HEADER_STYLE, MONTH_STYLE, PTO_STYLE, TODAY_STYLE};
    use time::macros::date;

    fn test_app() -> App {
        let grid = GridState::new(date!(2025 - 3 - 14), Roster::sample());
        App::new(grid)
    }

    #[test]
    fn test_sample_march() {
        let mut app = test_app();
        let area = Rect::new(0, 0, 113, 9);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "                    March 2025                                                                                   ",
            "                     1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 ",
            "                    Sa Su Mo Tu We Th Fr Sa Su Mo Tu We Th Fr Sa Su Mo Tu We Th Fr Sa Su Mo Tu We Th Fr Sa Su Mo ",
            "─────────────────────────────────────────────────────────────────────────────────────────────────────────────────",
            "FS Faustino Shields                                ●  ●  ●                                                       ",
            "AS Aliya Schinner                                                             ●  ●  ●                            ",
            "DR Damien Roob                                                                               ●  ●                ",
            "MF Mae Flatley                                                          ●  ●                                     ",
            "LS Loraine Stracke                                                                                    ●  ●       ",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        expected.set_style(Rect::new(20, 0, 10, 1), MONTH_STYLE);
        // Day-number and weekday headers, with the 14th's column as today
        for y in [1, 2] {
            expected.set_style(Rect::new(20, y, 39, 1), HEADER_STYLE);
            expected.set_style(Rect::new(59, y, 3, 1), TODAY_STYLE);
            expected.set_style(Rect::new(62, y, 51, 1), HEADER_STYLE);
        }
        for y in 4..9 {
            expected.set_style(Rect::new(0, y, 2, 1), AVATAR_STYLE);
            expected.set_style(Rect::new(59, y, 3, 1), TODAY_STYLE);
        }
        expected.set_style(Rect::new(50, 4, 9, 1), PTO_STYLE);
        expected.set_style(Rect::new(77, 5, 9, 1), PTO_STYLE);
        expected.set_style(Rect::new(92, 6, 6, 1), PTO_STYLE);
        expected.set_style(Rect::new(71, 7, 6, 1), PTO_STYLE);
        expected.set_style(Rect::new(101, 8, 6, 1), PTO_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = test_app();
        assert!(app.handle_key(KeyCode::Right));
        assert_eq!(app.grid.model().days()[0], date!(2025 - 4 - 1));
        assert!(app.handle_key(KeyCode::Char('h')));
        assert_eq!(app.grid.model().days()[0], date!(2025 - 3 - 1));
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(app.grid.model().days()[0], date!(2025 - 3 - 1));
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let mut app = test_app();
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Grid);
    }

    #[test]
    fn test_help_dismisses_on_any_key() {
        let mut app = test_app();
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Grid);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert!(app.handle_key(KeyCode::Esc));
        assert!(app.quitting());
        assert!(!app.handle_key(KeyCode::Char('q')));
    }
}
