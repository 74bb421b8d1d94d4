//! Modal popups: the new-project form and alerts

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::board::{FormField, ProjectForm};
use crate::cli::tui::utils::centered_rect;
use crate::config::InputRules;

const FORM_WIDTH: u16 = 60;

/// Draw the new-project form with `active` holding the cursor
pub fn draw_form(frame: &mut Frame, form: &ProjectForm, active: FormField, rules: &InputRules) {
    let height = FormField::ALL.len() as u16 * 3 + 2;
    let area = centered_rect(FORM_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Project ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical(FormField::ALL.map(|_| Constraint::Length(3))).split(inner);

    for (field, row) in FormField::ALL.into_iter().zip(rows.iter()) {
        let is_active = field == active;
        let mut text = form.field(field).to_string();
        if is_active {
            text.push('_');
        }

        let border_style = if is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(text).block(
            Block::default()
                .title(field_title(field, rules))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(input, *row);
    }
}

/// Field label with the rule it must meet
fn field_title(field: FormField, rules: &InputRules) -> String {
    match field {
        FormField::Title => field.label().to_string(),
        FormField::Description if rules.description_min_length > 0 => format!(
            "{} (more than {} characters)",
            field.label(),
            rules.description_min_length
        ),
        FormField::People if rules.people_min > 0 && rules.people_max > 0 => format!(
            "{} ({} to {})",
            field.label(),
            rules.people_min.saturating_add(1),
            rules.people_max.saturating_sub(1)
        ),
        _ => field.label().to_string(),
    }
}

/// Draw a modal message
pub fn draw_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(44, 5, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .title(" Alert ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(paragraph, area);
}
