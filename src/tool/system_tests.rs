//! Tests for the system process runner.

use std::path::Path;

use crate::args::ArgumentList;

use super::error::ToolError;
use super::process::ProcessRunner;
use super::system::SystemProcessRunner;

#[test]
fn locate_unknown_names_fails_with_the_candidates() {
    let runner = SystemProcessRunner::new();
    let result = runner.locate(&["definitely-not-a-real-tool-5c1a"]);

    match result {
        Err(ToolError::NotFound { candidates }) => {
            assert_eq!(candidates, vec!["definitely-not-a-real-tool-5c1a"]);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn execute_missing_binary_fails_to_launch() {
    let runner = SystemProcessRunner::new();
    let result = runner.execute(
        Path::new("/nonexistent/tool-5c1a"),
        &ArgumentList::new(),
    );
    assert!(matches!(result, Err(ToolError::Launch { .. })));
}

#[cfg(unix)]
mod unix {
    use super::*;

    fn shell_invocation(script: &str) -> ArgumentList {
        let mut arguments = ArgumentList::new();
        arguments.push_positional("-c");
        arguments.push_positional(script);
        arguments
    }

    #[test]
    fn locate_finds_a_search_path_executable() {
        let runner = SystemProcessRunner::new();
        let path = runner.locate(&["sh"]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn locate_falls_through_to_the_next_candidate() {
        let runner = SystemProcessRunner::new();
        let path = runner.locate(&["no-such-tool-5c1a", "sh"]).unwrap();
        assert!(path.ends_with("sh"));
    }

    #[test]
    fn execute_captures_stdout_and_exit_code() {
        let runner = SystemProcessRunner::new();
        let sh = runner.locate(&["sh"]).unwrap();

        let output = runner.execute(&sh, &shell_invocation("echo hello")).unwrap();

        assert!(output.is_success());
        assert_eq!(output.stdout, "hello\n");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn execute_captures_stderr() {
        let runner = SystemProcessRunner::new();
        let sh = runner.locate(&["sh"]).unwrap();

        let output = runner
            .execute(&sh, &shell_invocation("echo oops >&2"))
            .unwrap();

        assert_eq!(output.stderr, "oops\n");
    }

    #[test]
    fn execute_reports_nonzero_exit_codes_verbatim() {
        let runner = SystemProcessRunner::new();
        let sh = runner.locate(&["sh"]).unwrap();

        let output = runner.execute(&sh, &shell_invocation("exit 3")).unwrap();

        assert_eq!(output.exit_code, 3);
        assert!(!output.is_success());
    }
}
