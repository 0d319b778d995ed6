//! Approve screen: spend amount, invite code and the approve action.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

use crate::constants::{MAX_SPEND_ICP, MIN_SPEND_ICP};
use crate::domain::SpendAmount;
use crate::state::App;
use crate::theme::{HIGHLIGHT_STYLE, MUTED_COLOR, WARNING_COLOR};

use super::{FLOW_TITLE, action_line, error_line, render_card};

const PROMPT: &str = "Please specify how much ICP you want to invest. \
     You need to pre-approve the ICP spend in order to perform the token swap.";

pub(super) fn render(app: &App, frame: &mut Frame, area: Rect) {
    let flow = app.flow.flow();
    let muted = Style::default().fg(MUTED_COLOR);
    let amount = flow.spend_amount();

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(PROMPT, muted)),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Amount: "),
            Span::styled(format!(" {amount} ICP "), HIGHLIGHT_STYLE),
            Span::styled("  ↑/↓ PgUp/PgDn", muted),
        ]),
    ];
    if !SpendAmount::is_valid(amount) {
        lines.push(Line::from(Span::styled(
            format!("Amount must be between {MIN_SPEND_ICP} and {MAX_SPEND_ICP} ICP"),
            Style::default().fg(WARNING_COLOR),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("Max buy {MAX_SPEND_ICP} ICP"),
        muted,
    )));
    lines.push(Line::raw(""));
    lines.push(invite_line(app));
    lines.extend(error_line(flow.error_message()));
    lines.push(Line::raw(""));
    lines.push(action_line(
        "Approve Spend",
        "Loading...",
        flow.can_approve(),
        flow.loading(),
        app.animation_tick,
    ));

    render_card(frame, area, FLOW_TITLE, lines);
}

fn invite_line(app: &App) -> Line<'static> {
    let muted = Style::default().fg(MUTED_COLOR);
    match &app.ui.invite_editor {
        Some(editor) => Line::from(vec![
            Span::raw("Invite code: "),
            Span::styled(format!("{}_", editor.text()), HIGHLIGHT_STYLE),
        ]),
        None => {
            let code = app.flow.flow().invite_code();
            let shown = if code.trim().is_empty() {
                Span::styled("(none)", muted)
            } else {
                Span::raw(code.to_string())
            };
            Line::from(vec![
                Span::raw("Invite code: "),
                shown,
                Span::styled("  i to edit", muted),
            ])
        }
    }
}
