//! Interactive terminal wrapper
//!
//! [`Terminal`] owns one session and threads it through [`execute_command`]
//! so a host only deals with lines in and lines out.

use crate::dispatcher::execute_command;
use crate::session::Session;
use core_types::OutputLine;
use system_config::SystemConfig;

/// A session bound to a system document
#[derive(Debug, Clone)]
pub struct Terminal<'a> {
    config: &'a SystemConfig,
    session: Session,
}

impl<'a> Terminal<'a> {
    /// Opens a terminal with a fresh session
    pub fn new(config: &'a SystemConfig) -> Self {
        Self::with_session(config, Session::new())
    }

    /// Opens a terminal over an existing session
    pub fn with_session(config: &'a SystemConfig, session: Session) -> Self {
        tracing::debug!(session = %session.id(), "terminal opened");
        Self { config, session }
    }

    /// Executes one line and keeps the resulting session
    pub fn submit(&mut self, line: &str) -> Vec<OutputLine> {
        let outcome = execute_command(line, self.config, &self.session);
        self.session = outcome.session;
        outcome.output
    }

    /// Recalls the previous history entry into the input line
    pub fn recall_previous(&mut self) -> Option<String> {
        self.session.recall_previous().map(str::to_string)
    }

    /// Recalls the next history entry into the input line
    pub fn recall_next(&mut self) -> Option<String> {
        self.session.recall_next().map(str::to_string)
    }

    /// Returns the current session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the system document
    pub fn config(&self) -> &'a SystemConfig {
        self.config
    }

    /// Renders the prompt for the current directory
    pub fn prompt(&self) -> String {
        self.session.prompt(&self.config.system_info.hostname)
    }

    /// Lines shown when the terminal opens
    pub fn welcome_banner(&self) -> Vec<OutputLine> {
        vec![
            OutputLine::output(format!("Welcome to {}", self.config.system_info.name)),
            OutputLine::output("Type 'help' to see available commands."),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SystemConfig {
        SystemConfig::builtin().unwrap()
    }

    #[test]
    fn test_submit_threads_session() {
        let config = config();
        let mut terminal = Terminal::new(&config);

        assert!(terminal.submit("cd /var").is_empty());
        assert_eq!(terminal.submit("pwd"), vec![OutputLine::output("/var")]);
        assert_eq!(terminal.session().history().len(), 2);
    }

    #[test]
    fn test_prompt_follows_directory() {
        let config = config();
        let mut terminal = Terminal::new(&config);
        assert_eq!(terminal.prompt(), "nullbox@/home/guest$ ");

        terminal.submit("cd /tmp");
        assert_eq!(terminal.prompt(), "nullbox@/tmp$ ");
    }

    #[test]
    fn test_recall_round_trip() {
        let config = config();
        let mut terminal = Terminal::new(&config);
        terminal.submit("pwd");
        terminal.submit("ls");

        assert_eq!(terminal.recall_previous().as_deref(), Some("ls"));
        assert_eq!(terminal.recall_previous().as_deref(), Some("pwd"));
        assert_eq!(terminal.recall_next().as_deref(), Some("ls"));
        assert_eq!(terminal.recall_next().as_deref(), Some(""));
        assert_eq!(terminal.recall_next(), None);
    }

    #[test]
    fn test_welcome_banner() {
        let config = config();
        let terminal = Terminal::new(&config);
        let banner = terminal.welcome_banner();
        assert_eq!(banner[0].content, "Welcome to NullOS");
        assert_eq!(banner.len(), 2);
    }

    #[test]
    fn test_with_session() {
        let config = config();
        let terminal = Terminal::with_session(&config, Session::with_path("/etc"));
        assert_eq!(terminal.prompt(), "nullbox@/etc$ ");
    }
}
