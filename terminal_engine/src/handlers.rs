//! Built-in command handlers
//!
//! Every handler is a pure function of its arguments, the system document and
//! the session as it was before the command. Handlers never touch the session;
//! they describe a directory change and the dispatcher applies it.

use crate::dispatcher::CommandError;
use crate::session::Session;
use core_types::OutputLine;
use fs_view::PathResolver;
use services_command_registry::HandlerId;
use services_fs_view::FileSystemOperations;
use services_puzzles::CrackOutcome;
use system_config::SystemConfig;

/// Backup file `crack` searches for hashes
pub const SHADOW_BACKUP_PATH: &str = "/var/backups/shadow_backup.old";

/// Width the command name is padded to in `help`
const HELP_NAME_WIDTH: usize = 12;

/// Result of a successful handler run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerOutput {
    /// Lines to show, in order
    pub lines: Vec<OutputLine>,
    /// New absolute working directory, if the command changes it
    pub new_path: Option<String>,
}

impl HandlerOutput {
    /// No output and no directory change
    pub fn empty() -> Self {
        Self::default()
    }

    /// The given lines and no directory change
    pub fn lines(lines: Vec<OutputLine>) -> Self {
        Self {
            lines,
            new_path: None,
        }
    }

    /// A single line and no directory change
    pub fn line(line: OutputLine) -> Self {
        Self::lines(vec![line])
    }

    /// Sets the directory change
    pub fn with_path(mut self, path: String) -> Self {
        self.new_path = Some(path);
        self
    }
}

type HandlerResult = Result<HandlerOutput, CommandError>;

/// Runs a built-in handler
pub fn run(handler: HandlerId, args: &[&str], config: &SystemConfig, session: &Session) -> HandlerResult {
    match handler {
        HandlerId::Help => help(config),
        HandlerId::Ls => ls(args, config, session),
        HandlerId::Cd => cd(args, config, session),
        HandlerId::Cat => cat(args, config, session),
        HandlerId::Pwd => pwd(session),
        HandlerId::Ssh => ssh(args, config),
        HandlerId::Scan => scan(args),
        HandlerId::Crack => crack(args, config),
        HandlerId::Clear => Ok(HandlerOutput::line(OutputLine::clear_screen())),
    }
}

fn help(config: &SystemConfig) -> HandlerResult {
    let mut lines = vec![OutputLine::output("Available commands:")];
    lines.extend(config.commands().definitions().into_iter().map(|def| {
        OutputLine::output(format!(
            "  {:<width$} - {}",
            def.name,
            def.description,
            width = HELP_NAME_WIDTH
        ))
    }));
    Ok(HandlerOutput::lines(lines))
}

fn ls(args: &[&str], config: &SystemConfig, session: &Session) -> HandlerResult {
    let target = match args.first() {
        Some(path) => PathResolver::resolve(session.current_path(), path),
        None => session.current_path().to_string(),
    };

    let entries = config
        .filesystem_view()
        .list_directory(&target)
        .map_err(|source| CommandError::Operation {
            command: "ls",
            source,
        })?;

    let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
    Ok(HandlerOutput::line(OutputLine::output(names.join("  "))))
}

fn cd(args: &[&str], config: &SystemConfig, session: &Session) -> HandlerResult {
    let Some(path) = args.first() else {
        return Ok(HandlerOutput::empty().with_path(PathResolver::ROOT.to_string()));
    };

    let target = PathResolver::resolve(session.current_path(), path);
    let view = config.filesystem_view();
    let node = view
        .navigate(&target)
        .map_err(|source| CommandError::Operation {
            command: "cd",
            source,
        })?;

    if !node.is_directory() {
        return Err(CommandError::NotADirectory {
            command: "cd",
            path: target,
        });
    }

    Ok(HandlerOutput::empty().with_path(target))
}

fn cat(args: &[&str], config: &SystemConfig, session: &Session) -> HandlerResult {
    let path = args.first().ok_or_else(|| CommandError::Usage {
        command: "cat",
        message: "missing file operand".to_string(),
    })?;

    let target = PathResolver::resolve(session.current_path(), path);
    let view = config.filesystem_view();
    let content = view
        .read_file(&target)
        .map_err(|source| CommandError::Operation {
            command: "cat",
            source,
        })?;

    Ok(HandlerOutput::line(OutputLine::output(content)))
}

fn pwd(session: &Session) -> HandlerResult {
    Ok(HandlerOutput::line(OutputLine::output(session.current_path())))
}

/// Splits `user@host`, where `user` is word characters and `host` is word
/// characters and dots
fn parse_ssh_target(target: &str) -> Option<(&str, &str)> {
    let (user, host) = target.split_once('@')?;
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';

    if user.is_empty() || !user.chars().all(is_word) {
        return None;
    }
    if host.is_empty() || !host.chars().all(|c| is_word(c) || c == '.') {
        return None;
    }
    Some((user, host))
}

fn ssh(args: &[&str], config: &SystemConfig) -> HandlerResult {
    let target = args.first().ok_or_else(|| CommandError::Usage {
        command: "ssh",
        message: "missing destination (user@host)".to_string(),
    })?;

    let (user, host) = parse_ssh_target(target).ok_or_else(|| CommandError::Usage {
        command: "ssh",
        message: "invalid format. Use: user@host".to_string(),
    })?;

    let narrative = format!(
        "Connecting to {} as {}...\n[CONNECTION ESTABLISHED]",
        host, user
    );
    let line = if services_puzzles::is_server_target(config.puzzles(), host) {
        OutputLine::success(format!("{}\nWelcome to the database server.", narrative))
    } else {
        OutputLine::output(narrative)
    };

    Ok(HandlerOutput::line(line))
}

fn scan(args: &[&str]) -> HandlerResult {
    let target = args.first().ok_or_else(|| CommandError::Usage {
        command: "scan",
        message: "missing target".to_string(),
    })?;

    Ok(HandlerOutput::line(OutputLine::output(format!(
        "Scanning {}...\n[22/tcp] SSH - Open\n[80/tcp] HTTP - Open\n[443/tcp] HTTPS - Open",
        target
    ))))
}

fn crack(args: &[&str], config: &SystemConfig) -> HandlerResult {
    let hash = args.first().ok_or_else(|| CommandError::Usage {
        command: "crack",
        message: "missing hash".to_string(),
    })?;

    // An unreadable or missing backup simply matches nothing.
    let view = config.filesystem_view();
    let backup = view.read_file(SHADOW_BACKUP_PATH).unwrap_or("");

    let line = match services_puzzles::crack(backup, hash, config.puzzles()) {
        CrackOutcome::Cracked(solution) => OutputLine::success(format!(
            "Hash cracked successfully!\nPassword: {}",
            solution
        )),
        CrackOutcome::FoundUnsolved | CrackOutcome::NoMatch => OutputLine::output(
            "Attempting to crack hash...\n[Processing...]\nNo match found in the database.",
        ),
    };

    Ok(HandlerOutput::line(line))
}
