//! User-visible message contract tests
//!
//! Players and scripts match on these texts, so they are pinned here.

/// Scan report after the `Scanning <target>...` line
pub const SCAN_REPORT: &str = "[22/tcp] SSH - Open\n[80/tcp] HTTP - Open\n[443/tcp] HTTPS - Open";

/// Line appended to the ssh narrative for the server puzzle's host
pub const DATABASE_BANNER: &str = "Welcome to the database server.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{run_line, verify_single_line};
    use system_config::SystemConfig;
    use terminal_engine::{OutputKind, OutputLine};

    fn builtin() -> SystemConfig {
        SystemConfig::builtin().unwrap()
    }

    #[test]
    fn test_filesystem_error_texts() {
        let config = builtin();
        verify_single_line(&config, "cat nofile.txt", &OutputLine::error("cat: Path not found"));
        verify_single_line(&config, "cat /tmp", &OutputLine::error("cat: Not a file"));
        verify_single_line(&config, "cat /etc/shadow", &OutputLine::error("cat: Permission denied"));
        verify_single_line(&config, "ls /etc/hosts", &OutputLine::error("ls: Not a directory"));
        verify_single_line(&config, "ls /nope", &OutputLine::error("ls: Path not found"));
        verify_single_line(&config, "cd /nope", &OutputLine::error("cd: Path not found"));
    }

    #[test]
    fn test_dispatch_error_texts() {
        let config = builtin();
        verify_single_line(
            &config,
            "sudo",
            &OutputLine::error("Command not found: sudo. Type 'help' to see available commands."),
        );

        let custom = SystemConfig::from_json_str(
            r#"{
                "filesystem": {"root": {"type": "directory"}},
                "terminal": {"commands": [{"name": "x", "description": "x", "handler": "xHandler"}]}
            }"#,
        )
        .unwrap();
        verify_single_line(&custom, "x", &OutputLine::error("Handler not implemented: xHandler"));
    }

    #[test]
    fn test_narrative_texts() {
        let config = builtin();
        verify_single_line(
            &config,
            "ssh bob@10.0.0.5",
            &OutputLine::output("Connecting to 10.0.0.5 as bob...\n[CONNECTION ESTABLISHED]"),
        );
        verify_single_line(
            &config,
            "ssh root@192.168.1.100",
            &OutputLine::success(format!(
                "Connecting to 192.168.1.100 as root...\n[CONNECTION ESTABLISHED]\n{}",
                DATABASE_BANNER
            )),
        );
        verify_single_line(
            &config,
            "scan 10.0.0.5",
            &OutputLine::output(format!("Scanning 10.0.0.5...\n{}", SCAN_REPORT)),
        );
    }

    #[test]
    fn test_crack_texts() {
        let config = builtin();
        verify_single_line(
            &config,
            "crack 5f4dcc3b5aa765d61d8327deb882cf99",
            &OutputLine::success("Hash cracked successfully!\nPassword: sesame"),
        );
        verify_single_line(
            &config,
            "crack 0000",
            &OutputLine::output(
                "Attempting to crack hash...\n[Processing...]\nNo match found in the database.",
            ),
        );
    }

    #[test]
    fn test_help_layout() {
        let config = builtin();
        let output = run_line(&config, "help");
        assert_eq!(output[0].content, "Available commands:");
        assert!(output[1..]
            .iter()
            .all(|line| line.kind == OutputKind::Output && line.content.starts_with("  ")));
        assert_eq!(output[3].content, "  cd           - Change the working directory");
    }
}
