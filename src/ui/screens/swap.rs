//! Swap screen: the approved amount, the swap action and, while the swap
//! runs, how to add the token to the wallet.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{ACCENT_COLOR, HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR};

use super::{FLOW_TITLE, action_line, error_line, render_card};

pub(super) fn render(app: &App, frame: &mut Frame, area: Rect) {
    let flow = app.flow.flow();
    let token = &app.flow.settings().token;
    let muted = Style::default().fg(MUTED_COLOR);
    let loading = flow.loading();

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!(" To Invest: {} ICP ", flow.spend_amount()),
            HIGHLIGHT_STYLE,
        )),
        Line::raw(""),
        action_line(
            "Perform Swap",
            "Swap is in progress...",
            flow.can_swap(),
            loading,
            app.animation_tick,
        ),
    ];
    lines.extend(error_line(flow.error_message()));

    if loading {
        lines.extend([
            Line::raw(""),
            Line::raw("The process will take around 1-2 minutes."),
            Line::from(Span::styled(
                format!("Make sure to add the {} token to your Plug Wallet.", token.symbol),
                muted,
            )),
            Line::raw(""),
            Line::from(Span::styled(
                format!("How to add the {} token:", token.symbol),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::raw("Token Canister ID:"),
            Line::from(vec![
                Span::styled(
                    token.canister_id.to_string(),
                    Style::default().fg(PRIMARY_COLOR),
                ),
                Span::styled("  y to copy", muted),
            ]),
            Line::from(vec![
                Span::raw("Token Standard: "),
                Span::styled(
                    token.standard.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ]);
    } else {
        lines.push(Line::raw(""));
    }

    render_card(frame, area, FLOW_TITLE, lines);

    if !loading {
        render_go_back(frame, area);
    }
}

/// Back link in the top-left corner of the main area.
fn render_go_back(frame: &mut Frame, area: Rect) {
    if area.height == 0 || area.width < 16 {
        return;
    }
    let link = Paragraph::new(Line::from(vec![
        Span::styled("← Go Back ", Style::default().fg(ACCENT_COLOR)),
        Span::styled("(b)", Style::default().fg(MUTED_COLOR)),
    ]))
    .alignment(Alignment::Left);
    frame.render_widget(link, Rect::new(area.x + 1, area.y, 15, 1));
}
