//! Output checks for binary runs.

use std::process::Output;

/// Standard output, lossily decoded.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Standard error, lossily decoded.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// The run exited zero; stderr is shown otherwise.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "ghkit exited with {}:\n{}",
        output.status,
        stderr(output)
    );
}

/// The run exited non-zero.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "ghkit succeeded unexpectedly:\n{}",
        stdout(output)
    );
}

pub fn assert_stdout_contains(output: &Output, needle: &str) {
    let text = stdout(output);
    assert!(text.contains(needle), "no '{needle}' on stdout:\n{text}");
}

pub fn assert_stderr_contains(output: &Output, needle: &str) {
    let text = stderr(output);
    assert!(text.contains(needle), "no '{needle}' on stderr:\n{text}");
}
