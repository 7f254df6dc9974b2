use std::cell::RefCell;
use std::sync::Arc;

use tabconsole::core::action::{Effect, Event, update};
use tabconsole::core::executor::{CommandExecutor, CommandOutput};
use tabconsole::core::input_line::EditKey;
use tabconsole::core::state::{Session, SessionError};

// ============================================================================
// Helper Functions
// ============================================================================

/// Records every call and answers with a fixed reply.
struct StubExecutor {
    calls: RefCell<Vec<(String, String)>>,
    reply: CommandOutput,
}

impl StubExecutor {
    fn new(reply: CommandOutput) -> Arc<Self> {
        Arc::new(Self {
            calls: RefCell::new(Vec::new()),
            reply,
        })
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl CommandExecutor for StubExecutor {
    fn execute(&self, tab: &str, command: &str) -> CommandOutput {
        self.calls
            .borrow_mut()
            .push((tab.to_string(), command.to_string()));
        self.reply.clone()
    }
}

fn submit(session: &mut Session, text: &str) -> Effect {
    for c in text.chars() {
        update(session, Event::Edit(EditKey::Char(c)));
    }
    update(session, Event::Submit)
}

fn ready_session(tabs: &[&str], executor: Arc<StubExecutor>) -> Session {
    let mut session = Session::new(tabs.iter().copied(), executor).unwrap();
    update(&mut session, Event::Resize { width: 80, height: 24 });
    session
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_hello_then_switch_then_clear() {
    let exec = StubExecutor::new(CommandOutput::ok("echo:hello"));
    let mut session = ready_session(&["A", "B"], exec.clone());

    assert_eq!(submit(&mut session, "hello"), Effect::Redraw);
    assert_eq!(session.buffer(0), Some("echo:hello\n"));
    assert_eq!(exec.calls(), [("A".to_string(), "hello".to_string())]);

    update(&mut session, Event::NextTab);
    assert_eq!(session.active_index(), 1);
    assert_eq!(session.buffer(0), Some("echo:hello\n"));

    submit(&mut session, "clear");
    assert_eq!(session.buffer(1), Some(""));
    assert_eq!(session.buffer(0), Some("echo:hello\n"));
    assert_eq!(exec.calls().len(), 1);
}

#[test]
fn test_failure_message_follows_result() {
    let exec = StubExecutor::new(CommandOutput::failed("result", "boom"));
    let mut session = ready_session(&["A"], exec);

    submit(&mut session, "explode");
    assert_eq!(session.buffer(0), Some("resultboom\n"));
}

#[test]
fn test_next_tab_returns_home_after_n_steps() {
    for n in 1..=5 {
        let names: Vec<String> = (0..n).map(|i| format!("tab{i}")).collect();
        let exec = StubExecutor::new(CommandOutput::ok(""));
        let mut session = Session::new(names.clone(), exec).unwrap();
        assert_eq!(session.active_index(), 0);

        let mut seen = Vec::new();
        for _ in 0..n {
            update(&mut session, Event::NextTab);
            seen.push(session.active_index());
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..n).collect::<Vec<_>>());
        assert_eq!(session.active_index(), 0);
    }
}

#[test]
fn test_submit_only_touches_active_tab() {
    let exec = StubExecutor::new(CommandOutput::ok("out"));
    let mut session = ready_session(&["A", "B", "C"], exec.clone());
    update(&mut session, Event::NextTab);

    submit(&mut session, "run");
    assert_eq!(exec.calls(), [("B".to_string(), "run".to_string())]);
    assert_eq!(session.buffer(0), Some(""));
    assert_eq!(session.buffer(1), Some("out\n"));
    assert_eq!(session.buffer(2), Some(""));
}

#[test]
fn test_clear_never_calls_executor() {
    let exec = StubExecutor::new(CommandOutput::ok("out"));
    let mut session = ready_session(&["A"], exec.clone());
    for _ in 0..20 {
        submit(&mut session, "fill");
    }
    assert_eq!(exec.calls().len(), 20);

    submit(&mut session, "clear");
    assert_eq!(exec.calls().len(), 20);
    assert_eq!(session.buffer(0), Some(""));
    assert_eq!(session.active_surface().unwrap().y_offset(), 0);
}

#[test]
fn test_resize_lifecycle() {
    let exec = StubExecutor::new(CommandOutput::ok(""));
    let mut session = Session::new(["A", "B", "C"], exec).unwrap();
    assert!(!session.is_ready());

    update(&mut session, Event::Resize { width: 80, height: 24 });
    assert!(session.is_ready());
    assert_eq!(session.surfaces().unwrap().len(), 3);

    update(&mut session, Event::NextTab);
    update(&mut session, Event::Resize { width: 40, height: 12 });
    assert_eq!(session.surfaces().unwrap().len(), 3);
    assert_eq!(session.active_index(), 1);
}

#[test]
fn test_horizontal_offsets_are_per_tab() {
    let exec = StubExecutor::new(CommandOutput::ok("w".repeat(300)));
    let mut session = ready_session(&["A", "B"], exec);
    submit(&mut session, "wide");
    update(&mut session, Event::ScrollRight);

    update(&mut session, Event::NextTab);
    submit(&mut session, "wide");
    update(&mut session, Event::ScrollRight);
    update(&mut session, Event::ScrollRight);
    update(&mut session, Event::ScrollRight);

    assert_eq!(session.surface(0).unwrap().x_offset(), 5);
    assert_eq!(session.surface(1).unwrap().x_offset(), 15);

    update(&mut session, Event::NextTab);
    update(&mut session, Event::ScrollLeft);
    update(&mut session, Event::ScrollLeft);
    assert_eq!(session.surface(0).unwrap().x_offset(), 0);
    assert_eq!(session.surface(1).unwrap().x_offset(), 15);
}

#[test]
fn test_empty_tab_list_fails_construction() {
    let exec = StubExecutor::new(CommandOutput::ok(""));
    let result = Session::new(Vec::<&str>::new(), exec);
    assert!(matches!(result, Err(SessionError::NoTabs)));
}

#[test]
fn test_quit() {
    let exec = StubExecutor::new(CommandOutput::ok(""));
    let mut session = ready_session(&["A"], exec);
    assert_eq!(update(&mut session, Event::Quit), Effect::Quit);
}
