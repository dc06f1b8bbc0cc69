//! Editing scripts: a starting point and a list of input events.

use std::fmt;
use std::fs;
use std::path::Path as FsPath;

use pathcraft_lib::{DPoint, EditEvent, EditOutcome, EditSession, EditorSettings, PathError};

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Where the initial path is centered.
    #[serde(default)]
    pub center: DPoint,
    #[serde(default)]
    pub events: Vec<EditEvent>,
}

/// A type for errors that occur while loading or running a script.
#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Edit { event: usize, error: PathError },
    Usage(String),
}

impl Script {
    pub fn load(path: &FsPath) -> Result<Script, ScriptError> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Run every event against a fresh session, returning the session.
    ///
    /// Events that leave the path unchanged are logged and skipped; an
    /// event that fails stops the run.
    pub fn run(&self, settings: EditorSettings) -> Result<EditSession, ScriptError> {
        let mut session = EditSession::new(self.center, settings);
        for (i, event) in self.events.iter().enumerate() {
            match session.apply(event) {
                Ok(EditOutcome::Changed) => log::debug!("event {}: {:?}", i, event),
                Ok(EditOutcome::Unchanged) => {
                    if !matches!(event, EditEvent::Hover { .. }) {
                        log::info!("event {} had no effect: {:?}", i, event);
                    }
                }
                Err(error) => return Err(ScriptError::Edit { event: i, error }),
            }
        }
        Ok(session)
    }
}

pub fn load_settings(path: &FsPath) -> Result<EditorSettings, ScriptError> {
    let data = fs::read(path)?;
    let settings: EditorSettings = serde_json::from_slice(&data)?;
    Ok(settings.sanitized())
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: '{}'", err),
            Self::Json(err) => write!(f, "malformed json: '{}'", err),
            Self::Edit { event, error } => write!(f, "event {} failed: {}", event, error),
            Self::Usage(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<std::io::Error> for ScriptError {
    fn from(src: std::io::Error) -> ScriptError {
        ScriptError::Io(src)
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(src: serde_json::Error) -> ScriptError {
        ScriptError::Json(src)
    }
}
