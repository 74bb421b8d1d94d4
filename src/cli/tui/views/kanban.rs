//! Kanban view: active and finished projects side by side

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::cli::tui::app::{App, InputMode};
use crate::cli::tui::utils::truncate_str;
use crate::domain::{Project, ProjectStatus};

/// Draw the kanban layout
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let [main, status_bar] =
        Layout::vertical([Constraint::Min(10), Constraint::Length(3)]).areas(area);

    let [active, finished] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(main);

    draw_column(frame, app, ProjectStatus::Active, active);
    draw_column(frame, app, ProjectStatus::Finished, finished);

    draw_status_bar(frame, app, status_bar);
}

fn draw_column(frame: &mut Frame, app: &App, status: ProjectStatus, area: Rect) {
    let list = app.board().list(status);
    let width = area.width.saturating_sub(6) as usize;
    let held = app.drag().map(|drag| &drag.id);

    let items: Vec<ListItem> = list
        .projects()
        .iter()
        .map(|project| project_card(project, width, held == Some(&project.id)))
        .collect();

    let focused = app.focus() == status;
    let border_style = if list.is_droppable() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!(" {} ({}) ", list.heading(), list.len());
    let widget = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let selected = (focused && !list.is_empty()).then(|| app.selected(status));
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(widget, area, &mut state);
}

/// Title, assignment and description lines for one project
fn project_card(project: &Project, width: usize, held: bool) -> ListItem<'static> {
    let title_style = if held {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    ListItem::new(vec![
        Line::styled(truncate_str(&project.title, width), title_style),
        Line::styled(
            format!("{} assigned", project.people_label()),
            Style::default().fg(Color::Green),
        ),
        Line::styled(
            truncate_str(&project.description, width),
            Style::default().fg(Color::Gray),
        ),
        Line::default(),
    ])
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (content, style) = match app.input_mode() {
        InputMode::Normal => match app.drag() {
            Some(drag) => (
                format!("Moving '{}' over {}", drag.title, drag.over),
                Style::default().fg(Color::Yellow),
            ),
            None => (
                app.status_message()
                    .unwrap_or("[n]ew [space]move [h/l]lists [?]help [q]uit")
                    .to_string(),
                Style::default(),
            ),
        },
        InputMode::Form(_) => (
            "Tab next field, Enter add project, Esc close".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Alert(_) => (
            "Press any key to continue".to_string(),
            Style::default().fg(Color::Red),
        ),
    };

    let paragraph = Paragraph::new(format!("Projects {}", content))
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
