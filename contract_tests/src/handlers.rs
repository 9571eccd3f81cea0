//! Handler key contract tests
//!
//! System documents bind commands to handlers by these keys.

use services_command_registry::HandlerId;

/// Every stable handler key and the handler it selects
pub const HANDLER_KEYS: [(&str, HandlerId); 9] = [
    ("helpHandler", HandlerId::Help),
    ("lsHandler", HandlerId::Ls),
    ("cdHandler", HandlerId::Cd),
    ("catHandler", HandlerId::Cat),
    ("pwdHandler", HandlerId::Pwd),
    ("sshHandler", HandlerId::Ssh),
    ("scanHandler", HandlerId::Scan),
    ("crackHandler", HandlerId::Crack),
    ("clearHandler", HandlerId::Clear),
];
