//! Command handlers.
//!
//! Each handler gathers field values (flags or the interactive form), runs
//! caller-side validation, then calls the manager. User-facing messages go to
//! `out`; failures are returned for the binary to report.

use std::io::{IsTerminal, Write};

use crate::cli::{Command, EditArgs, ListArgs, SearchArgs, ShowArgs, SnippetArgs};
use crate::clipboard;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::manager::Manager;
use crate::report;
use crate::snippet::{Snippet, SnippetDraft};

pub fn execute(
    command: Command,
    manager: &Manager,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Create(args) => create(&args, manager, config, out),
        Command::Copy(args) => copy(args.id, manager, config, out),
        Command::Edit(args) => edit(&args, manager, config, out),
        Command::List(args) => list(&args, manager, config, out),
        Command::Search(args) => search(&args, manager, out),
        Command::Show(args) => show(&args, manager, out),
    }
}

pub fn create(
    args: &SnippetArgs,
    manager: &Manager,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let draft = if args.is_empty() {
        match interactive_form("Create Snippet", &SnippetDraft::default(), config)? {
            Some(draft) => draft,
            None => {
                writeln!(out, "Cancelled.")?;
                return Ok(());
            }
        }
    } else {
        let mut draft = SnippetDraft::default();
        apply_args(args, &mut draft)?;
        draft
    };

    draft.validate()?;

    let id = manager.create_snippet(
        &draft.title,
        &draft.description,
        &draft.tags,
        &draft.code,
        draft.language(),
    )?;
    writeln!(out, "Snippet created successfully! (id {id})")?;
    Ok(())
}

pub fn copy(id: i64, manager: &Manager, config: &Config, out: &mut dyn Write) -> Result<()> {
    let snippet = manager.get_snippet_by_id(id)?;
    let command = clipboard::detect(config.clipboard_command.as_deref())?;
    clipboard::copy_to_clipboard(&command, &snippet.code)?;

    writeln!(out, "Snippet copied to clipboard!")?;
    Ok(())
}

pub fn edit(args: &EditArgs, manager: &Manager, config: &Config, out: &mut dyn Write) -> Result<()> {
    let current = manager.get_snippet_by_id(args.id)?;
    let mut draft = SnippetDraft::from_snippet(&current);

    if args.fields.is_empty() {
        match interactive_form("Edit Snippet", &draft, config)? {
            Some(edited) => draft = edited,
            None => {
                writeln!(out, "Cancelled.")?;
                return Ok(());
            }
        }
    } else {
        apply_args(&args.fields, &mut draft)?;
    }

    draft.validate()?;

    manager.update_snippet(
        args.id,
        &draft.title,
        &draft.description,
        &draft.tags,
        &draft.code,
        draft.language(),
    )?;
    writeln!(out, "Snippet updated successfully!")?;
    Ok(())
}

pub fn list(args: &ListArgs, manager: &Manager, config: &Config, out: &mut dyn Write) -> Result<()> {
    let language = args.language.as_deref().filter(|l| !l.is_empty());
    let snippets: Vec<Snippet> = manager
        .get_all_snippets()?
        .into_iter()
        .filter(|s| language.map_or(true, |l| s.matches_language(l)))
        .collect();

    if args.json {
        writeln!(out, "{}", report::json::render(&snippets))?;
        return Ok(());
    }

    if snippets.is_empty() {
        writeln!(out, "No snippets found.")?;
        return Ok(());
    }

    if args.plain || !interactive_terminal() {
        write!(out, "{}", report::table::render(&snippets))?;
        return Ok(());
    }

    pick(&snippets, manager, config, out)
}

pub fn search(args: &SearchArgs, manager: &Manager, out: &mut dyn Write) -> Result<()> {
    let snippets = manager.search_snippets(&args.keyword)?;

    if args.json {
        writeln!(out, "{}", report::json::render(&snippets))?;
    } else if snippets.is_empty() {
        writeln!(out, "No snippets matched {:?}.", args.keyword)?;
    } else {
        write!(out, "{}", report::table::render(&snippets))?;
    }

    Ok(())
}

pub fn show(args: &ShowArgs, manager: &Manager, out: &mut dyn Write) -> Result<()> {
    let snippet = manager.get_snippet_by_id(args.id)?;

    if args.json {
        writeln!(out, "{}", report::json::render_one(&snippet))?;
    } else {
        write!(out, "{}", report::detail(&snippet))?;
    }

    Ok(())
}

/// Overlay the flags that were given onto `draft`.
fn apply_args(args: &SnippetArgs, draft: &mut SnippetDraft) -> Result<()> {
    if let Some(title) = &args.title {
        draft.title = title.clone();
    }
    if let Some(description) = &args.description {
        draft.description = description.clone();
    }
    if let Some(tags) = &args.tags {
        draft.tags = tags.clone();
    }
    if let Some(code) = &args.code {
        draft.code = code.clone();
    }
    if let Some(path) = &args.code_file {
        draft.code = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidInput(format!("cannot read {}: {e}", path.display()))
        })?;
    }
    if let Some(language) = &args.language {
        draft.language = Some(language.clone());
    }
    Ok(())
}

fn interactive_terminal() -> bool {
    cfg!(feature = "tui") && std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

#[cfg(feature = "tui")]
fn interactive_form(
    heading: &str,
    draft: &SnippetDraft,
    config: &Config,
) -> Result<Option<SnippetDraft>> {
    use crate::tui::form::{self, FormOutcome, SnippetForm};

    if !interactive_terminal() {
        return Err(Error::InvalidInput(
            "no terminal for the interactive form; pass --title and --code".to_string(),
        ));
    }

    let languages = crate::languages::load_or_fallback(&config.languages_path);
    match form::run(SnippetForm::with_draft(heading, draft, &languages))? {
        FormOutcome::Submitted(draft) => Ok(Some(draft)),
        FormOutcome::Cancelled => Ok(None),
    }
}

#[cfg(not(feature = "tui"))]
fn interactive_form(
    _heading: &str,
    _draft: &SnippetDraft,
    _config: &Config,
) -> Result<Option<SnippetDraft>> {
    Err(Error::InvalidInput(
        "built without the interactive form; pass --title and --code".to_string(),
    ))
}

#[cfg(feature = "tui")]
fn pick(snippets: &[Snippet], manager: &Manager, config: &Config, out: &mut dyn Write) -> Result<()> {
    use crate::tui::picker::{self, PickerOutcome, SnippetPicker};

    match picker::run(SnippetPicker::new(snippets))? {
        PickerOutcome::Copy(id) => copy(id, manager, config, out),
        PickerOutcome::New => create(&SnippetArgs::default(), manager, config, out),
        PickerOutcome::Quit => Ok(()),
    }
}

#[cfg(not(feature = "tui"))]
fn pick(snippets: &[Snippet], _manager: &Manager, _config: &Config, out: &mut dyn Write) -> Result<()> {
    write!(out, "{}", report::table::render(snippets))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    fn manager() -> Manager {
        Manager::new(Store::open_in_memory().unwrap())
    }

    fn flags(title: &str, code: &str) -> SnippetArgs {
        SnippetArgs {
            title: Some(title.to_string()),
            code: Some(code.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn apply_args_overrides_only_given_fields() {
        let mut draft = SnippetDraft {
            title: "Fib".into(),
            description: "keep me".into(),
            tags: "math".into(),
            code: "old".into(),
            language: Some("Python".into()),
        };
        let args = SnippetArgs {
            code: Some("new".into()),
            language: Some(String::new()),
            ..Default::default()
        };

        apply_args(&args, &mut draft).unwrap();

        assert_eq!(draft.title, "Fib");
        assert_eq!(draft.description, "keep me");
        assert_eq!(draft.code, "new");
        assert_eq!(draft.language(), None);
    }

    #[test]
    fn code_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fib.py");
        std::fs::write(&path, "def fib(n):\n    ...\n").unwrap();

        let mut draft = SnippetDraft::default();
        let args = SnippetArgs {
            code_file: Some(path),
            ..Default::default()
        };
        apply_args(&args, &mut draft).unwrap();
        assert_eq!(draft.code, "def fib(n):\n    ...\n");
    }

    #[test]
    fn missing_code_file_is_invalid_input() {
        let mut draft = SnippetDraft::default();
        let args = SnippetArgs {
            code_file: Some("/definitely/not/here.rs".into()),
            ..Default::default()
        };
        assert!(matches!(apply_args(&args, &mut draft), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn create_rejects_empty_code_before_store() {
        let m = manager();
        let config = Config::with_db_path(":memory:".into());
        let mut out = Vec::new();

        let err = create(&flags("Fib", ""), &m, &config, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "Title and/or code cannot be empty!");
        assert!(m.get_all_snippets().unwrap().is_empty());
    }

    #[test]
    fn list_filters_by_language() {
        let m = manager();
        let config = Config::with_db_path(":memory:".into());
        m.create_snippet("rusty", "", "", "fn x() {}", Some("Rust")).unwrap();
        m.create_snippet("snake", "", "", "def x(): pass", Some("Python")).unwrap();

        let args = ListArgs {
            language: Some("rust".into()),
            json: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        list(&args, &m, &config, &mut out).unwrap();

        let listed: Vec<Snippet> = serde_json::from_slice(&out).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "rusty");
    }
}
