mod common;

use common::TestEnv;

#[test]
fn summarize_subcommand_is_available() {
    let output = TestEnv::new().run(&["summarize", "--help"]);

    assert!(
        output.status.success(),
        "summarize --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn summarize_reports_missing_transcript() {
    let output = TestEnv::new().run(&["summarize", "does-not-exist.txt"]);

    assert!(
        !output.status.success(),
        "summarize should fail for a missing transcript file\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Transcript file not found"),
        "expected missing transcript error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_writes_notes_from_transcript() {
    let env = TestEnv::new();
    let transcript = env.write_fixture(
        "standup_transcript.txt",
        "We agreed to ship on Friday. QA starts on Monday. Budget review moved to Tuesday.",
    );

    let output = env.run(&["summarize", transcript.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "summarize should succeed with the default local provider\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Meeting Notes:"));
    assert!(stdout.contains("- We agreed to ship on Friday."));
    assert!(stdout.contains("- Budget review moved to Tuesday."));
}

#[test]
fn summarize_saves_notes_to_output_file() {
    let env = TestEnv::new();
    let transcript = env.write_fixture(
        "planning_transcript.txt",
        "The roadmap is frozen. Hiring resumes next quarter.",
    );
    let notes_path = transcript.with_file_name("notes.txt");

    let output = env.run(&[
        "summarize",
        transcript.to_str().unwrap(),
        "-o",
        notes_path.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "summarize -o should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let notes = std::fs::read_to_string(&notes_path).expect("notes file should be written");
    assert!(notes.starts_with("Meeting Notes:"));
    assert!(notes.contains("- The roadmap is frozen."));
}

#[test]
fn summarize_rejects_empty_transcript() {
    let env = TestEnv::new();
    let transcript = env.write_fixture("empty_transcript.txt", "   \n");

    let output = env.run(&["summarize", transcript.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Transcript file is empty"),
        "expected empty transcript error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_translate_requires_api_key() {
    let env = TestEnv::new();
    let transcript = env.write_fixture("sync_transcript.txt", "We will ship this week.");

    let output = env.run(&[
        "summarize",
        transcript.to_str().unwrap(),
        "--translate",
        "German",
    ]);

    assert!(
        !output.status.success(),
        "translation without an API key should fail\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Gemini API key is missing"),
        "expected missing API key error, got:\n{}",
        stderr
    );
}
