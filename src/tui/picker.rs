//! Snippet picker shown by `list`.
//!
//! Each snippet is a two-line entry, followed by "New" and "Back".
//! Enter on a snippet copies it, `n` creates, `q` or Esc leaves.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::Screen;
use crate::error::Result;
use crate::snippet::Snippet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    Copy(i64),
    New,
    Quit,
}

enum Entry {
    Snippet {
        id: i64,
        title: String,
        language: Option<String>,
        description: String,
    },
    New,
    Back,
}

impl Entry {
    fn outcome(&self) -> PickerOutcome {
        match self {
            Entry::Snippet { id, .. } => PickerOutcome::Copy(*id),
            Entry::New => PickerOutcome::New,
            Entry::Back => PickerOutcome::Quit,
        }
    }

    fn to_item(&self) -> ListItem<'_> {
        let (primary, secondary) = match self {
            Entry::Snippet { id, title, language, description } => {
                let language = match language.as_deref() {
                    Some(l) if !l.is_empty() => format!("({l}) "),
                    _ => String::new(),
                };
                (
                    Line::from(vec![
                        Span::styled(format!("[{id}] "), Style::default().fg(Color::Blue)),
                        Span::raw(title.as_str()),
                    ]),
                    Line::from(vec![
                        Span::styled(language, Style::default().fg(Color::Gray)),
                        Span::styled(description.as_str(), Style::default().fg(Color::Yellow)),
                    ]),
                )
            }
            Entry::New => (
                Line::from("(n) New"),
                Line::from("Create a new snippet".dark_gray()),
            ),
            Entry::Back => (
                Line::from("(q) Back"),
                Line::from("Return to main menu".dark_gray()),
            ),
        };
        ListItem::new(Text::from(vec![primary, secondary]))
    }
}

pub struct SnippetPicker {
    entries: Vec<Entry>,
    state: ListState,
}

impl SnippetPicker {
    pub fn new(snippets: &[Snippet]) -> Self {
        let mut entries: Vec<Entry> = snippets
            .iter()
            .map(|s| Entry::Snippet {
                id: s.id,
                title: s.title.clone(),
                language: s.language.clone(),
                description: s.description.clone(),
            })
            .collect();
        entries.push(Entry::New);
        entries.push(Entry::Back);

        SnippetPicker {
            entries,
            state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn selected(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(PickerOutcome::Quit),
            KeyCode::Char('n') => Some(PickerOutcome::New),
            KeyCode::Enter => Some(self.entries[self.selected()].outcome()),
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                None
            }
            KeyCode::Home => {
                self.state.select(Some(0));
                None
            }
            KeyCode::End => {
                self.state.select(Some(self.entries.len() - 1));
                None
            }
            _ => None,
        }
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.entries.len();
        let current = self.selected();
        let next = if down {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.state.select(Some(next));
    }
}

impl Screen for SnippetPicker {
    type Outcome = PickerOutcome;

    fn draw(&mut self, frame: &mut Frame) {
        let [list_area, help_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        let items: Vec<ListItem> = self.entries.iter().map(Entry::to_item).collect();
        let list = List::new(items)
            .block(Block::bordered().title(" Snippets "))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, list_area, &mut self.state);

        let help = "Up/Down move  Enter copy  n new  q quit";
        frame.render_widget(Paragraph::new(help.dim()), help_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
        SnippetPicker::handle_key(self, key)
    }
}

/// Show the picker until the user chooses an entry or quits.
pub fn run(mut picker: SnippetPicker) -> Result<PickerOutcome> {
    super::run(&mut picker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn snippets() -> Vec<Snippet> {
        [(3, "Fib"), (7, "Hello")]
            .iter()
            .map(|(id, title)| {
                let mut s = Snippet::new(title, "", "", "code", Some("Rust"));
                s.id = *id;
                s
            })
            .collect()
    }

    #[test]
    fn enter_copies_highlighted_snippet() {
        let mut picker = SnippetPicker::new(&snippets());
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), Some(PickerOutcome::Copy(3)));

        picker.handle_key(key(KeyCode::Down));
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), Some(PickerOutcome::Copy(7)));
    }

    #[test]
    fn trailing_entries_are_new_and_back() {
        let mut picker = SnippetPicker::new(&snippets());
        picker.handle_key(key(KeyCode::End));
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), Some(PickerOutcome::Quit));

        picker.handle_key(key(KeyCode::Up));
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), Some(PickerOutcome::New));
    }

    #[test]
    fn selection_wraps() {
        let mut picker = SnippetPicker::new(&snippets());
        picker.handle_key(key(KeyCode::Char('k')));
        assert_eq!(picker.selected(), 3);
        picker.handle_key(key(KeyCode::Char('j')));
        assert_eq!(picker.selected(), 0);
    }

    #[test]
    fn shortcuts() {
        let mut picker = SnippetPicker::new(&snippets());
        assert_eq!(picker.handle_key(key(KeyCode::Char('n'))), Some(PickerOutcome::New));
        assert_eq!(picker.handle_key(key(KeyCode::Char('q'))), Some(PickerOutcome::Quit));
        assert_eq!(picker.handle_key(key(KeyCode::Esc)), Some(PickerOutcome::Quit));
        assert_eq!(picker.handle_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn empty_list_still_offers_new_and_back() {
        let mut picker = SnippetPicker::new(&[]);
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), Some(PickerOutcome::New));
    }
}
