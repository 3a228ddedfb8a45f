use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const HEADER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const AVATAR_STYLE: Style = Style::new()
    .fg(Color::LightMagenta)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const PTO_STYLE: Style = Style::new().fg(Color::LightBlue).bg(Color::Black);

pub(crate) const TODAY_STYLE: Style = Style::new().fg(Color::White).bg(Color::Blue);

pub(crate) const TODAY_PTO_STYLE: Style = TODAY_STYLE.add_modifier(Modifier::BOLD);
