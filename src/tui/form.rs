//! Create/edit form.
//!
//! Fields: Title, Description, Tags, Code (multi-line), Language dropdown,
//! then Save and Cancel buttons. Tab/Shift-Tab move between fields, Enter
//! advances (or inserts a newline in Code), Left/Right pick a language,
//! Ctrl-S saves from anywhere and Esc cancels.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::Screen;
use crate::error::Result;
use crate::languages;
use crate::snippet::SnippetDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Tags,
    Code,
    Language,
    Save,
    Cancel,
}

const FIELD_ORDER: [Field; 7] = [
    Field::Title,
    Field::Description,
    Field::Tags,
    Field::Code,
    Field::Language,
    Field::Save,
    Field::Cancel,
];

impl Field {
    fn position(self) -> usize {
        FIELD_ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Field {
        FIELD_ORDER[(self.position() + 1) % FIELD_ORDER.len()]
    }

    fn prev(self) -> Field {
        FIELD_ORDER[(self.position() + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()]
    }

    fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Tags => "Tags",
            Field::Code => "Code",
            Field::Language => "Language",
            Field::Save => "Save",
            Field::Cancel => "Cancel",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Submitted(SnippetDraft),
    Cancelled,
}

pub struct SnippetForm {
    heading: String,
    title: String,
    description: String,
    tags: String,
    code: String,
    languages: Vec<String>,
    language: usize,
    focus: Field,
}

impl SnippetForm {
    pub fn new(heading: &str, languages: &[String]) -> Self {
        Self::with_draft(heading, &SnippetDraft::default(), languages)
    }

    /// Form prefilled from `draft`. A stored language missing from the list
    /// is appended so editing never silently drops it.
    pub fn with_draft(heading: &str, draft: &SnippetDraft, languages: &[String]) -> Self {
        let mut options = languages::options(languages);
        let language = match draft.language() {
            Some(current) => match options.iter().position(|o| o == current) {
                Some(index) => index,
                None => {
                    options.push(current.to_string());
                    options.len() - 1
                }
            },
            None => 0,
        };

        SnippetForm {
            heading: heading.to_string(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            tags: draft.tags.clone(),
            code: draft.code.clone(),
            languages: options,
            language,
            focus: Field::Title,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn selected_language(&self) -> &str {
        &self.languages[self.language]
    }

    pub fn draft(&self) -> SnippetDraft {
        let language = self.selected_language();
        SnippetDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            code: self.code.clone(),
            language: (!language.is_empty()).then(|| language.to_string()),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormOutcome> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Some(FormOutcome::Cancelled),
            KeyCode::Char('c') if ctrl => return Some(FormOutcome::Cancelled),
            KeyCode::Char('s') if ctrl => return Some(FormOutcome::Submitted(self.draft())),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Down if self.focus != Field::Code => self.focus = self.focus.next(),
            KeyCode::Up if self.focus != Field::Code => self.focus = self.focus.prev(),
            KeyCode::Left if self.focus == Field::Language => self.cycle_language(false),
            KeyCode::Right if self.focus == Field::Language => self.cycle_language(true),
            KeyCode::Left if self.focus == Field::Cancel => self.focus = Field::Save,
            KeyCode::Right if self.focus == Field::Save => self.focus = Field::Cancel,
            KeyCode::Enter => match self.focus {
                Field::Code => self.code.push('\n'),
                Field::Save => return Some(FormOutcome::Submitted(self.draft())),
                Field::Cancel => return Some(FormOutcome::Cancelled),
                _ => self.focus = self.focus.next(),
            },
            KeyCode::Backspace => {
                if let Some(text) = self.text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(text) = self.text_mut() {
                    text.push(c);
                }
            }
            _ => {}
        }

        None
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Title => Some(&mut self.title),
            Field::Description => Some(&mut self.description),
            Field::Tags => Some(&mut self.tags),
            Field::Code => Some(&mut self.code),
            Field::Language | Field::Save | Field::Cancel => None,
        }
    }

    fn cycle_language(&mut self, forward: bool) {
        let len = self.languages.len();
        self.language = if forward {
            (self.language + 1) % len
        } else {
            (self.language + len - 1) % len
        };
    }

    fn field_block(&self, field: Field) -> Block<'static> {
        let style = if self.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::bordered().title(field.label()).border_style(style)
    }

    fn draw_line_field(&self, frame: &mut Frame, area: Rect, field: Field, text: &str) {
        let width = area.width.saturating_sub(2) as usize;
        let len = text.chars().count();
        let offset = (len + 1).saturating_sub(width.max(1));

        frame.render_widget(
            Paragraph::new(text)
                .scroll((0, offset as u16))
                .block(self.field_block(field)),
            area,
        );

        if self.focus == field {
            let x = area.x + 1 + (len - offset) as u16;
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }

    fn draw_code(&self, frame: &mut Frame, area: Rect) {
        let height = area.height.saturating_sub(2) as usize;
        let lines: Vec<&str> = self.code.split('\n').collect();
        let offset = lines.len().saturating_sub(height.max(1));

        frame.render_widget(
            Paragraph::new(self.code.as_str())
                .scroll((offset as u16, 0))
                .block(self.field_block(Field::Code)),
            area,
        );

        if self.focus == Field::Code {
            let last = lines.last().map_or(0, |l| l.chars().count());
            let x = area.x + 1 + (last as u16).min(area.width.saturating_sub(3));
            let y = area.y + 1 + (lines.len() - 1 - offset) as u16;
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    fn draw_language(&self, frame: &mut Frame, area: Rect) {
        let label = match self.selected_language() {
            "" => "(none)",
            other => other,
        };
        let line = Line::from(vec![
            Span::raw("< "),
            Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" >"),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(self.field_block(Field::Language)),
            area,
        );
    }

    fn button(&self, field: Field) -> Span<'static> {
        let text = format!("[ {} ]", field.label());
        if self.focus == field {
            Span::styled(text, Style::default().fg(Color::Black).bg(Color::Yellow))
        } else {
            Span::raw(text)
        }
    }
}

impl Screen for SnippetForm {
    type Outcome = FormOutcome;

    fn draw(&mut self, frame: &mut Frame) {
        let outer = Block::bordered().title(format!(" {} ", self.heading));
        let area = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        self.draw_line_field(frame, rows[0], Field::Title, &self.title);
        self.draw_line_field(frame, rows[1], Field::Description, &self.description);
        self.draw_line_field(frame, rows[2], Field::Tags, &self.tags);
        self.draw_code(frame, rows[3]);
        self.draw_language(frame, rows[4]);

        let buttons = Line::from(vec![
            Span::raw(" "),
            self.button(Field::Save),
            Span::raw("  "),
            self.button(Field::Cancel),
        ]);
        frame.render_widget(Paragraph::new(buttons), rows[5]);

        let help = "Tab/Shift-Tab move  Enter next  Left/Right language  Ctrl-S save  Esc cancel";
        frame.render_widget(Paragraph::new(help.dim()), rows[6]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<FormOutcome> {
        SnippetForm::handle_key(self, key)
    }
}

/// Show the form until the user saves or cancels.
pub fn run(mut form: SnippetForm) -> Result<FormOutcome> {
    super::run(&mut form)
}
