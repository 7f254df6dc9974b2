//! # Demo Executor
//!
//! The command executor the `tabconsole` binary ships with. It doesn't run
//! anything; it echoes commands back so every tab has something to show.
//!
//! - `Tab2` answers with a simulated failure, to show how failures render.
//! - `License` answers `license` and `third-party` with the bundled notices.

use crate::core::executor::CommandOutput;

const LICENSE: &str = include_str!("../LICENSE");
const LICENSE_THIRD_PARTY: &str = include_str!("../LICENSE-THIRD-PARTY");

pub const FAILING_TAB: &str = "Tab2";
pub const LICENSE_TAB: &str = "License";
pub const SIMULATED_FAILURE: &str = "Error: simulated failure";

pub fn execute(tab: &str, command: &str) -> CommandOutput {
    let echo = format!("You have Executed command '{command}' on tab '{tab}'");
    match tab {
        // Text ends in a line break so the failure lands on its own line
        FAILING_TAB => CommandOutput::failed(format!("{echo}\n"), SIMULATED_FAILURE),
        LICENSE_TAB => match command {
            "license" => CommandOutput::ok(LICENSE.trim_end()),
            "third-party" => CommandOutput::ok(LICENSE_THIRD_PARTY.trim_end()),
            _ => CommandOutput::ok(
                "Enter 'license' or 'third-party' to see the respective license information.",
            ),
        },
        _ => CommandOutput::ok(echo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Tab;

    #[test]
    fn test_echo_tab() {
        let out = execute("Tab1", "ls");
        assert_eq!(out.text, "You have Executed command 'ls' on tab 'Tab1'");
        assert!(out.failure.is_none());
    }

    #[test]
    fn test_failing_tab_puts_failure_on_its_own_line() {
        let out = execute(FAILING_TAB, "ls");
        assert!(out.text.contains("'ls'"));
        assert_eq!(out.failure.as_ref().map(|f| f.message.as_str()), Some(SIMULATED_FAILURE));

        let mut tab = Tab::new(FAILING_TAB);
        tab.append_output(&out);
        assert_eq!(
            tab.buffer,
            "You have Executed command 'ls' on tab 'Tab2'\nError: simulated failure\n"
        );
    }

    #[test]
    fn test_license_tab() {
        assert!(execute(LICENSE_TAB, "license").text.contains("MIT License"));
        assert!(execute(LICENSE_TAB, "third-party").text.contains("ratatui"));
        assert!(execute(LICENSE_TAB, "other").text.starts_with("Enter 'license'"));
    }
}
