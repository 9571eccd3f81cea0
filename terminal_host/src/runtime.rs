//! # Host Runtime
//!
//! The read-submit-render loop around a [`Terminal`].

use crate::commands::{HostCommand, HostCommandParser};
use crate::input_script::{InputScript, InputScriptError, ScriptedInput};
use core_types::{OutputLine, CLEAR_SCREEN};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use system_config::{ConfigError, SystemConfig};
use terminal_engine::{Session, Terminal};
use thiserror::Error;

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Script error: {0}")]
    ScriptError(#[from] InputScriptError),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Host runtime configuration
#[derive(Debug, Clone, Default)]
pub struct HostRuntimeConfig {
    /// System document to load (the shipped one when unset)
    pub config_path: Option<PathBuf>,
    /// Optional input script; stdin is read when unset
    pub script: Option<String>,
    /// Maximum lines to submit (0 = unlimited)
    pub max_steps: usize,
}

impl HostRuntimeConfig {
    /// Loads the system document this configuration points at
    pub fn load_system(&self) -> Result<SystemConfig, HostRuntimeError> {
        let system = match &self.config_path {
            Some(path) => SystemConfig::load_from_path(path)?,
            None => SystemConfig::builtin()?,
        };
        Ok(system)
    }
}

/// Host runtime state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostState {
    Running,
    Shutdown,
}

/// Host runtime
pub struct HostRuntime<'a> {
    /// Configuration
    config: HostRuntimeConfig,
    /// Terminal being driven
    terminal: Terminal<'a>,
    /// Input script (if any)
    script: Option<InputScript>,
    /// Line recalled from history but not yet submitted
    input_line: String,
    /// Current state
    state: HostState,
    /// Submitted line counter
    steps: usize,
}

impl<'a> HostRuntime<'a> {
    /// Creates a new host runtime over a loaded system document
    pub fn new(config: HostRuntimeConfig, system: &'a SystemConfig) -> Result<Self, HostRuntimeError> {
        let script = config
            .script
            .as_deref()
            .map(InputScript::from_text)
            .transpose()?;

        Ok(Self {
            config,
            terminal: Terminal::new(system),
            script,
            input_line: String::new(),
            state: HostState::Running,
            steps: 0,
        })
    }

    /// Runs until the input is exhausted, `exit` is entered or the step limit is hit
    ///
    /// `input` is only read when no script was configured.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), HostRuntimeError> {
        tracing::info!(session = %self.terminal.session().id(), "host started");
        render(out, &self.terminal.welcome_banner())?;

        match self.script.take() {
            Some(script) => self.run_script(script, out)?,
            None => self.run_interactive(input, out)?,
        }

        tracing::info!(steps = self.steps, "host stopped");
        Ok(())
    }

    fn run_interactive<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<(), HostRuntimeError> {
        let mut buffer = String::new();

        while !self.should_stop() {
            write!(out, "{}", self.terminal.prompt())?;
            out.flush()?;

            buffer.clear();
            if input.read_line(&mut buffer)? == 0 {
                writeln!(out)?;
                break;
            }

            let line = buffer.trim_end_matches(['\n', '\r']);
            self.submit(line, out)?;
        }

        Ok(())
    }

    fn run_script<W: Write>(&mut self, mut script: InputScript, out: &mut W) -> Result<(), HostRuntimeError> {
        while !self.should_stop() {
            let Some(input) = script.next_input() else {
                break;
            };

            match input {
                ScriptedInput::Line(line) => {
                    writeln!(out, "{}{}", self.terminal.prompt(), line)?;
                    self.submit(&line, out)?;
                }
                ScriptedInput::RecallPrevious => {
                    if let Some(line) = self.terminal.recall_previous() {
                        self.input_line = line;
                    }
                }
                ScriptedInput::RecallNext => {
                    if let Some(line) = self.terminal.recall_next() {
                        self.input_line = line;
                    }
                }
                ScriptedInput::Enter => {
                    let line = std::mem::take(&mut self.input_line);
                    writeln!(out, "{}{}", self.terminal.prompt(), line)?;
                    self.submit(&line, out)?;
                }
            }
        }

        Ok(())
    }

    /// Handles one submitted line
    fn submit<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), HostRuntimeError> {
        self.steps += 1;

        match HostCommandParser::parse(line) {
            Some(HostCommand::Quit) => {
                tracing::debug!("quit requested");
                self.state = HostState::Shutdown;
            }
            Some(HostCommand::History) => {
                for (i, entry) in self.terminal.session().history().iter().enumerate() {
                    writeln!(out, "  {:>3}  {}", i + 1, entry)?;
                }
            }
            None => {
                let output = self.terminal.submit(line);
                render(out, &output)?;
            }
        }

        Ok(())
    }

    fn should_stop(&self) -> bool {
        self.state == HostState::Shutdown
            || (self.config.max_steps > 0 && self.steps >= self.config.max_steps)
    }

    /// Returns the number of lines submitted so far
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Returns the terminal's session
    pub fn session(&self) -> &Session {
        self.terminal.session()
    }

    /// Returns true once `exit` has been entered
    pub fn is_shutdown(&self) -> bool {
        self.state == HostState::Shutdown
    }
}

/// Writes output lines; the clear-screen line is passed through raw
fn render<W: Write>(out: &mut W, lines: &[OutputLine]) -> io::Result<()> {
    for line in lines {
        if line.is_clear_screen() {
            write!(out, "{}", CLEAR_SCREEN)?;
        } else {
            writeln!(out, "{}", line.content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (String, usize) {
        let system = SystemConfig::builtin().unwrap();
        let config = HostRuntimeConfig {
            script: Some(script.to_string()),
            ..Default::default()
        };
        let mut runtime = HostRuntime::new(config, &system).unwrap();
        let mut out = Vec::new();
        runtime.run(io::empty(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), runtime.step_count())
    }

    #[test]
    fn test_banner_comes_first() {
        let (out, _) = run_script("pwd");
        assert!(out.starts_with("Welcome to NullOS\n"));
    }

    #[test]
    fn test_script_echoes_prompt_and_output() {
        let (out, steps) = run_script("pwd");
        assert!(out.contains("nullbox@/home/guest$ pwd\n/home/guest\n"));
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_recall_and_enter() {
        let (out, steps) = run_script("cd /tmp\npwd\n@up\n@enter");
        assert_eq!(out.matches("nullbox@/tmp$ pwd\n/tmp\n").count(), 2);
        assert_eq!(steps, 3);
    }

    #[test]
    fn test_quit_stops_script() {
        let (out, steps) = run_script("exit\npwd");
        assert!(!out.contains("/home/guest\n"));
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_clear_passes_sequence_through() {
        let (out, _) = run_script("clear");
        assert!(out.contains(CLEAR_SCREEN));
    }

    #[test]
    fn test_history_command() {
        let (out, _) = run_script("pwd\nls\nhistory");
        assert!(out.contains("    1  pwd\n"));
        assert!(out.contains("    2  ls\n"));
    }

    #[test]
    fn test_max_steps() {
        let system = SystemConfig::builtin().unwrap();
        let config = HostRuntimeConfig {
            script: Some("pwd\npwd\npwd".to_string()),
            max_steps: 2,
            ..Default::default()
        };
        let mut runtime = HostRuntime::new(config, &system).unwrap();
        runtime.run(io::empty(), &mut Vec::new()).unwrap();
        assert_eq!(runtime.step_count(), 2);
        assert_eq!(runtime.session().history().len(), 2);
    }

    #[test]
    fn test_bad_script_is_rejected() {
        let system = SystemConfig::builtin().unwrap();
        let config = HostRuntimeConfig {
            script: Some("@sideways".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            HostRuntime::new(config, &system),
            Err(HostRuntimeError::ScriptError(_))
        ));
    }

    #[test]
    fn test_interactive_reads_until_eof() {
        let system = SystemConfig::builtin().unwrap();
        let mut runtime = HostRuntime::new(HostRuntimeConfig::default(), &system).unwrap();
        let mut out = Vec::new();
        runtime.run("cd ..\r\nls\n".as_bytes(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("guest  admin\n"));
        assert_eq!(runtime.session().current_path(), "/home");
        assert_eq!(runtime.step_count(), 2);
        assert!(!runtime.is_shutdown());
    }

    #[test]
    fn test_load_system_from_missing_path() {
        let config = HostRuntimeConfig {
            config_path: Some(PathBuf::from("/nonexistent/system.json")),
            ..Default::default()
        };
        assert!(matches!(
            config.load_system(),
            Err(HostRuntimeError::ConfigError(ConfigError::Io { .. }))
        ));
    }
}
