mod common;

use common::TestEnv;

#[test]
fn run_reports_missing_video() {
    let output = TestEnv::new().run(&["run", "does-not-exist.mov"]);

    assert!(
        !output.status.success(),
        "run should fail for a missing video file\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Video file not found"),
        "expected missing video error, got:\n{}",
        stderr
    );
}

#[test]
fn extract_reports_missing_video() {
    let output = TestEnv::new().run(&["extract", "does-not-exist.mov"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Video file not found"),
        "expected missing video error, got:\n{}",
        stderr
    );
}

#[test]
fn transcribe_reports_missing_audio() {
    let output = TestEnv::new().run(&["transcribe", "does-not-exist.wav"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Audio file not found"),
        "expected missing audio error, got:\n{}",
        stderr
    );
}

#[test]
fn transcribe_rejects_unknown_format() {
    let env = TestEnv::new();
    // Content is irrelevant; the format check runs before any audio work.
    let audio = env.write_fixture("meeting.wav", "not really audio");

    let output = env.run(&["transcribe", audio.to_str().unwrap(), "--format", "yaml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported format"),
        "expected unsupported format error, got:\n{}",
        stderr
    );
}

#[test]
fn transcribe_without_model_explains_download() {
    let env = TestEnv::new();
    let audio = env.write_fixture("meeting.wav", "not really audio");

    let output = env.run(&["transcribe", audio.to_str().unwrap()]);

    // The sandboxed data dir has no ggml model, so the pipeline must fail
    // with the download hint rather than a panic.
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Whisper model not found"),
        "expected missing model error, got:\n{}",
        stderr
    );
}
