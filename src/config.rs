use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};

const APP_NAME: &str = "codescribe";
const DB_FILE: &str = "snippets.db";
const LANGUAGES_FILE: &str = "languages.json";

/// Contents of config.toml. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub database: Option<PathBuf>,
    pub languages_file: Option<PathBuf>,
    pub clipboard_command: Option<Vec<String>>,
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Missing file is not an error, it just means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text)
                .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e.into()),
        }
    }
}

pub struct Config {
    pub db_path: PathBuf,
    pub languages_path: PathBuf,
    pub clipboard_command: Option<Vec<String>>,
}

impl Config {
    /// Defaults, then config.toml, then command-line flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        let file = FileConfig::load(&config_path)?;
        log::debug!("loaded config from {}", config_path.display());

        Self::resolve(file, cli.db.clone(), default_data_dir)
    }

    fn resolve(
        file: FileConfig,
        db_flag: Option<PathBuf>,
        data_dir: impl Fn() -> Result<PathBuf>,
    ) -> Result<Self> {
        let db_path = match db_flag.or(file.database) {
            Some(path) => path,
            None => data_dir()?.join(DB_FILE),
        };
        let languages_path = match file.languages_file {
            Some(path) => path,
            None => data_dir()?.join(LANGUAGES_FILE),
        };

        Ok(Config {
            db_path,
            languages_path,
            clipboard_command: file.clipboard_command.filter(|argv| !argv.is_empty()),
        })
    }

    /// Config pointing at an explicit database, everything else next to it.
    pub fn with_db_path(db_path: PathBuf) -> Self {
        let languages_path = db_path
            .parent()
            .map(|dir| dir.join(LANGUAGES_FILE))
            .unwrap_or_else(|| PathBuf::from(LANGUAGES_FILE));

        Config {
            db_path,
            languages_path,
            clipboard_command: None,
        }
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        Error::StorageUnavailable("could not determine home directory".to_string())
    })
}

/// ~/.local/share/codescribe or platform equivalent, created on demand
fn default_data_dir() -> Result<PathBuf> {
    let data_dir = project_dirs()?.data_dir().to_path_buf();
    std::fs::create_dir_all(&data_dir).map_err(|e| {
        Error::StorageUnavailable(format!("cannot create {}: {e}", data_dir.display()))
    })?;
    Ok(data_dir)
}

fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_dir() -> Result<PathBuf> {
        Ok(PathBuf::from("/data"))
    }

    #[test]
    fn defaults_live_in_data_dir() {
        let config = Config::resolve(FileConfig::default(), None, data_dir).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/data/snippets.db"));
        assert_eq!(config.languages_path, PathBuf::from("/data/languages.json"));
        assert!(config.clipboard_command.is_none());
    }

    #[test]
    fn file_values_apply() {
        let file = FileConfig::parse(
            r#"
            database = "/srv/snips.db"
            languages_file = "/etc/langs.json"
            clipboard_command = ["xsel", "--clipboard", "--input"]
            "#,
        )
        .unwrap();

        let config = Config::resolve(file, None, data_dir).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/srv/snips.db"));
        assert_eq!(config.languages_path, PathBuf::from("/etc/langs.json"));
        assert_eq!(
            config.clipboard_command,
            Some(vec!["xsel".to_string(), "--clipboard".into(), "--input".into()])
        );
    }

    #[test]
    fn db_flag_beats_file() {
        let file = FileConfig::parse(r#"database = "/srv/snips.db""#).unwrap();
        let config = Config::resolve(file, Some(PathBuf::from("/tmp/x.db")), data_dir).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn empty_clipboard_command_means_detect() {
        let file = FileConfig::parse("clipboard_command = []").unwrap();
        let config = Config::resolve(file, None, data_dir).unwrap();
        assert!(config.clipboard_command.is_none());
    }

    #[test]
    fn malformed_toml_is_invalid_config() {
        assert!(matches!(
            FileConfig::parse("database = "),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            FileConfig::parse("colour = \"blue\""),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = FileConfig::load(&dir.path().join("config.toml")).unwrap();
        assert!(file.database.is_none());
    }

    #[test]
    fn with_db_path_keeps_languages_alongside() {
        let config = Config::with_db_path(PathBuf::from("/tmp/work/snippets.db"));
        assert_eq!(config.languages_path, PathBuf::from("/tmp/work/languages.json"));
    }
}
