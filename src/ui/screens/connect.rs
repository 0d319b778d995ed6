//! Connect screen: welcome text and the connect action.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::App;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, WARNING_COLOR};

use super::{FLOW_TITLE, action_line, render_card};

const GREETING: &str =
    "Dear friend, it's an honor for us to see you as one of the early investors.";
const PITCH: &str = "Your investment is the seed that grows tomorrow's innovations. \
     Thank you for being the early champions of change with Galaxy.";

pub(super) fn render(app: &App, frame: &mut Frame, area: Rect) {
    let flow = app.flow.flow();
    let muted = Style::default().fg(MUTED_COLOR);

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            GREETING,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(PITCH, muted)),
        Line::from(vec![
            Span::styled("Be sure to read the terms and conditions (press ", muted),
            Span::styled("o", Style::default().fg(ACCENT_COLOR)),
            Span::styled(").", muted),
        ]),
        Line::raw(""),
        action_line(
            "Connect Plug Wallet",
            "Connecting...",
            true,
            flow.loading(),
            app.animation_tick,
        ),
        Line::raw(""),
    ];

    if app.flow.has_wallet() {
        lines.push(Line::from(vec![
            Span::styled("Don't have plug wallet? Press ", muted),
            Span::styled("d", Style::default().fg(ACCENT_COLOR)),
            Span::styled(" to download it", muted),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "No wallet bridge found. Press d to download it",
            Style::default().fg(WARNING_COLOR),
        )));
    }

    render_card(frame, area, FLOW_TITLE, lines);
}
