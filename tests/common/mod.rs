/// Shared helpers for the integration tests: running the `tfgen` binary and
/// building stopword files.
use std::ffi::OsStr;
use std::process::{Command, Output, Stdio};

pub const PREFIX: &str = "language=Spanish&tfs=";

/// Run tfgen with the given positional args. Returns the full Output.
pub fn run_tfgen<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tfgen"))
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run tfgen")
}

/// `n` distinct words, with some Spanish accents mixed in so the
/// unescaped-UTF-8 path is exercised.
pub fn stopword_list(n: usize) -> String {
    const STEMS: &[&str] = &["el", "año", "más", "qué", "niño", "después", "también"];
    (0..n)
        .map(|i| format!("{}{i}\n", STEMS[i % STEMS.len()]))
        .collect()
}

/// Parse the JSON portion of a payload, asserting the surrounding layout.
pub fn payload_json(payload: &str) -> serde_json::Value {
    assert!(
        payload.starts_with(PREFIX),
        "missing prefix: {:?}",
        payload.chars().take(40).collect::<String>()
    );
    assert!(payload.ends_with('\n'), "missing trailing newline");
    assert!(!payload.ends_with("\n\n"), "more than one trailing newline");
    let json = &payload[PREFIX.len()..payload.len() - 1];
    serde_json::from_str(json).expect("payload is not valid JSON")
}
