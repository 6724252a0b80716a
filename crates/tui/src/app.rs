//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: event handling, state updates, reminder delivery
//! and rendering.

use std::path::Path;

use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use taskboard_config::Config;
use taskboard_protocol::{ColumnKind, KanbanBoard, Message, TaskFields, TaskId, describe_due_on};
use taskboard_reminder::{ReminderEvent, ReminderScheduler, local_now};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    calendar::CalendarView,
    event::{event_to_message, poll_event},
    form::{FormTarget, PathPrompt, TaskForm},
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT,
        TASK_CARD_HEIGHT,
    },
    notify::send_desktop_notification,
    state::{AppState, InputMode, Notice, Overlay},
    terminal::AppTerminal,
    widgets::{
        BoardStyle, column::calculate_scroll_offset, column_at, render_board, render_calendar,
        render_confirm_delete, render_export_prompt, render_help_overlay, render_notice,
        render_status_bar, render_task_form,
    },
};

/// The main application struct.
///
/// Owns the board state, the configuration and the reminder scheduler, and
/// provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects click hit-testing).
    header_visible: bool,
    /// The application configuration.
    config: Config,
    reminders: ReminderScheduler,
    reminder_events: UnboundedReceiver<ReminderEvent>,
    /// Outcome of the last action, shown in the status bar.
    status: Option<String>,
}

impl App {
    /// Creates a new application with the given board and default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::KanbanBoard;
    /// use taskboard_tui::App;
    ///
    /// let app = App::new(KanbanBoard::new());
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(board: KanbanBoard) -> Self {
        Self::with_config(board, Config::default())
    }

    /// Creates a new application with the given board and configuration.
    ///
    /// Reminders are armed for every task already on the board whose due
    /// instant lies ahead. Arming a reminder spawns a tokio task, so boards
    /// with future tasks must be opened inside a runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_config::Config;
    /// use taskboard_protocol::KanbanBoard;
    /// use taskboard_tui::App;
    ///
    /// let mut config = Config::default();
    /// config.reminders.enabled = false;
    /// let app = App::with_config(KanbanBoard::new(), config);
    /// assert_eq!(app.pending_reminders(), 0);
    /// ```
    #[must_use]
    pub fn with_config(board: KanbanBoard, config: Config) -> Self {
        let (reminders, reminder_events) = ReminderScheduler::new();
        let mut app = Self {
            state: AppState::new(board),
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            config,
            reminders,
            reminder_events,
            status: None,
        };
        let ids: Vec<TaskId> = app.state.board.iter_tasks().map(|t| t.id).collect();
        for id in ids {
            app.arm_reminder(id);
        }
        app
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once the user has asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the outcome of the last action, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the number of reminders still waiting to fire.
    #[must_use]
    pub fn pending_reminders(&self) -> usize {
        self.reminders.pending_count()
    }

    /// Updates the application state based on a message.
    ///
    /// Messages are routed by the [`InputMode`] of whatever is on top:
    /// a notice swallows everything but its dismissal, the help overlay is
    /// closed by any message, and open overlays handle their own messages.
    /// `Quit` works everywhere.
    pub fn update(&mut self, msg: Message) {
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        match self.state.input_mode() {
            InputMode::Notice => {
                if msg == Message::DismissNotice {
                    self.state.dismiss_notice();
                }
            }
            InputMode::Help => match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    let _ = self.state.dismiss_help();
                }
            },
            InputMode::Form => self.update_form(msg),
            InputMode::Prompt => self.update_prompt(msg),
            InputMode::Calendar => self.update_calendar(msg),
            InputMode::Confirm => self.update_confirm(msg),
            InputMode::Board => self.update_board(msg),
        }
    }

    fn update_board(&mut self, msg: Message) {
        match msg {
            Message::Escape => self.state.clear_selection(),
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::MoveTaskLeft => self.move_across(-1),
            Message::MoveTaskRight => self.move_across(1),
            Message::MoveTaskUp => {
                self.state.move_selected_within(-1);
            }
            Message::MoveTaskDown => {
                self.state.move_selected_within(1);
            }
            Message::NewTask => {
                let form = TaskForm::create(
                    self.state.selected_column,
                    local_now(),
                    self.config.board.default_priority,
                );
                self.state.overlay = Some(Overlay::TaskForm(form));
            }
            Message::EditTask => {
                if let Some(task) = self.state.selected_task() {
                    self.state.overlay = Some(Overlay::TaskForm(TaskForm::edit(task)));
                }
            }
            Message::DeleteTask => {
                if let Some(id) = self.state.selected_task_id() {
                    self.state.overlay = Some(Overlay::ConfirmDelete(id));
                }
            }
            Message::OpenCalendar => {
                let view = CalendarView::new(local_now().date());
                self.state.overlay = Some(Overlay::Calendar(view));
            }
            Message::ToggleTheme => self.state.toggle_theme(),
            Message::ExportPdf => {
                let prompt = PathPrompt::new(self.config.export.default_path());
                self.state.overlay = Some(Overlay::ExportPrompt(prompt));
            }
            Message::ToggleHelp => self.state.toggle_help(),
            Message::ClickAt { column, row } => self.handle_click(column, row),
            _ => {}
        }
    }

    fn update_form(&mut self, msg: Message) {
        let Some(Overlay::TaskForm(form)) = &mut self.state.overlay else {
            return;
        };
        match msg {
            Message::NextField => form.next_field(),
            Message::PrevField => form.previous_field(),
            Message::CycleValue { delta } => form.cycle(delta),
            Message::Input { ch } => form.input_char(ch),
            Message::Backspace => form.backspace(),
            Message::Cancel | Message::Escape => self.state.overlay = None,
            Message::Submit => match form.submit() {
                Ok(fields) => {
                    let target = form.target;
                    self.state.overlay = None;
                    self.apply_form(target, fields);
                }
                Err(e) => form.error = Some(e),
            },
            _ => {}
        }
    }

    fn apply_form(&mut self, target: FormTarget, fields: TaskFields) {
        let title = fields.title.clone();
        match target {
            FormTarget::Create(column) => {
                let id = self.state.add_task(column, fields);
                tracing::info!(task = %id, column = column.display_name(), "task added");
                self.arm_reminder(id);
                self.status = Some(format!("Added \"{title}\" to {}", column.display_name()));
            }
            FormTarget::Edit(id) => match self.state.edit_task(id, fields) {
                Ok(()) => {
                    tracing::info!(task = %id, "task edited");
                    self.arm_reminder(id);
                    self.status = Some(format!("Updated \"{title}\""));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "edit failed");
                    self.reminders.cancel(id);
                }
            },
        }
    }

    fn update_prompt(&mut self, msg: Message) {
        let Some(Overlay::ExportPrompt(prompt)) = &mut self.state.overlay else {
            return;
        };
        match msg {
            Message::Input { ch } => prompt.input.insert_char(ch),
            Message::Backspace => prompt.input.backspace(),
            Message::Cancel | Message::Escape => {
                self.state.overlay = None;
                self.status = Some("Export cancelled".to_string());
            }
            Message::Submit => {
                let path = prompt.path();
                self.state.overlay = None;
                match path {
                    Some(path) => self.export_to(&path),
                    None => self.status = Some("Export cancelled".to_string()),
                }
            }
            _ => {}
        }
    }

    fn export_to(&mut self, path: &Path) {
        match taskboard_export::export_board(&self.state.board, path, &self.config.board.date_format) {
            Ok(pages) => {
                let noun = if pages == 1 { "page" } else { "pages" };
                self.status = Some(format!("Exported {}", path.display()));
                self.state.push_notice(Notice::info(
                    "Export",
                    format!("Saved {} ({pages} {noun})", path.display()),
                ));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "export failed");
                self.state
                    .push_notice(Notice::error("Export failed", e.to_string()));
            }
        }
    }

    fn update_calendar(&mut self, msg: Message) {
        let Some(Overlay::Calendar(view)) = &mut self.state.overlay else {
            return;
        };
        match msg {
            Message::CalendarMoveDays { days } => view.move_days(days),
            Message::CalendarMoveMonths { months } => view.move_months(months),
            Message::CalendarToday => view.jump_to_today(),
            Message::CalendarSelect => {
                let date = view.cursor;
                self.show_due_on(date);
            }
            Message::Cancel | Message::Escape => self.state.overlay = None,
            _ => {}
        }
    }

    /// Queues a notice listing the tasks due on `date`.
    fn show_due_on(&mut self, date: NaiveDate) {
        let summary = describe_due_on(&self.state.board, date, &self.config.board.date_format);
        let body = summary.body();
        self.state.push_notice(Notice::info(summary.heading, body));
    }

    fn update_confirm(&mut self, msg: Message) {
        let Some(Overlay::ConfirmDelete(id)) = self.state.overlay else {
            return;
        };
        match msg {
            Message::ConfirmDelete => {
                self.state.overlay = None;
                self.reminders.cancel(id);
                if let Some(task) = self.state.remove_task(id) {
                    tracing::info!(task = %id, "task deleted");
                    self.status = Some(format!("Deleted \"{}\"", task.title));
                }
            }
            Message::Cancel | Message::Escape => self.state.overlay = None,
            _ => {}
        }
    }

    fn move_across(&mut self, delta: isize) {
        if self.state.move_selected_across(delta)
            && let Some(task) = self.state.selected_task()
        {
            self.status = Some(format!(
                "Moved \"{}\" to {}",
                task.title,
                task.column.display_name()
            ));
        }
    }

    /// Arms the reminder for a task, replacing any pending one.
    ///
    /// Does nothing when reminders are disabled.
    fn arm_reminder(&mut self, id: TaskId) {
        if !self.config.reminders.enabled {
            return;
        }
        let Some(task) = self.state.board.get_task(id) else {
            return;
        };
        if let Some(armed) = self.reminders.schedule(task, local_now()) {
            tracing::debug!(task = %id, fires_at = %armed.fires_at, "reminder armed");
        }
    }

    /// Turns fired reminders into notices.
    ///
    /// Stale events for reminders that were replaced or cancelled after
    /// firing are dropped. Called once per tick by [`App::run`].
    pub fn process_reminders(&mut self) {
        while let Ok(event) = self.reminder_events.try_recv() {
            if !self.reminders.acknowledge(&event) {
                tracing::debug!(task = %event.task_id, "stale reminder dropped");
                continue;
            }
            tracing::info!(task = %event.task_id, due = %event.due, "reminder fired");
            if self.config.reminders.desktop_notifications {
                send_desktop_notification(&event, &self.config.board.date_format);
            }
            self.state.push_notice(Notice::reminder(event.message()));
        }
    }

    /// Returns the area the board was last drawn in.
    fn board_area(&self) -> Rect {
        let header_offset = if self.header_visible {
            HEADER_HEIGHT
        } else {
            0
        };
        Rect {
            x: self.last_area.x,
            y: self.last_area.y + header_offset,
            width: self.last_area.width,
            height: self
                .last_area
                .height
                .saturating_sub(header_offset + STATUS_BAR_HEIGHT),
        }
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// A click on a card selects it; a click elsewhere in a column focuses
    /// that column.
    fn handle_click(&mut self, column: u16, row: u16) {
        let board_area = self.board_area();
        if !board_area.contains((column, row).into()) {
            return;
        }
        let Some(kind) = column_at(column, board_area) else {
            return;
        };

        let tasks = self.state.board.column(kind).len();
        let visible = (board_area.height.saturating_sub(2) / TASK_CARD_HEIGHT).max(1) as usize;
        let selection = (kind == self.state.selected_column)
            .then_some(self.state.selected_task)
            .flatten();
        let offset = calculate_scroll_offset(selection, tasks, visible);

        // The column border takes the first row.
        let relative_y = row.saturating_sub(board_area.y + 1);
        let task_idx = offset + (relative_y / TASK_CARD_HEIGHT) as usize;

        self.state.selected_column = kind;
        self.state.selected_task = (row > board_area.y && task_idx < tasks).then_some(task_idx);
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;
        let theme = self.state.theme;

        frame.render_widget(Block::default().style(theme.base_style()), area);

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            Self::render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let content_area = if show_header {
            let [header_area, rest] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(area);
            self.render_header(frame, header_area);
            rest
        } else {
            area
        };

        let [board_area, status_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(content_area);

        let style = BoardStyle {
            theme,
            date_format: &self.config.board.date_format,
        };
        let buf = frame.buffer_mut();
        render_board(
            &self.state.board,
            self.state.selected_column,
            self.state.selected_task,
            style,
            board_area,
            buf,
        );
        render_status_bar(self.status.as_deref(), theme, status_area, buf);

        match &self.state.overlay {
            Some(Overlay::TaskForm(form)) => render_task_form(form, theme, area, buf),
            Some(Overlay::Calendar(view)) => {
                render_calendar(view, &self.state.marks, &self.state.board, style, area, buf);
            }
            Some(Overlay::ExportPrompt(prompt)) => render_export_prompt(prompt, theme, area, buf),
            Some(Overlay::ConfirmDelete(id)) => {
                if let Some(task) = self.state.board.get_task(*id) {
                    render_confirm_delete(task, theme, area, buf);
                }
            }
            None => {}
        }

        if self.state.help_visible {
            render_help_overlay(theme, area, buf);
        }

        if let Some(notice) = self.state.notices.front() {
            render_notice(notice, self.state.notices.len() - 1, theme, area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title, theme and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let palette = self.state.theme.palette();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.muted));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(26)]).areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "taskboard",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(
                format!("Kanban Board ({} tasks)", self.state.board.total_tasks()),
                Style::default().fg(palette.foreground),
            ),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} | ", self.state.theme.display_name()),
                Style::default().fg(palette.muted),
            ),
            Span::styled("Press ", Style::default().fg(palette.muted)),
            Span::styled("?", Style::default().fg(palette.key)),
            Span::styled(" for help", Style::default().fg(palette.muted)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// Each tick delivers fired reminders, redraws, and handles at most one
    /// terminal event.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskboard_protocol::KanbanBoard;
    /// use taskboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(KanbanBoard::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            self.process_reminders();
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.state.input_mode())
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
            tokio::task::yield_now().await;
        }

        self.reminders.cancel_all();
        Ok(())
    }

    /// Returns the focused column.
    #[must_use]
    pub fn selected_column(&self) -> ColumnKind {
        self.state.selected_column
    }
}
