use std::path::PathBuf;
use std::process::{Command, Output};

fn wordtally(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordtally"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("INPUT_FILE")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wordtally-cli-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn invalid_argument_is_logged_and_exits_1() {
    let out = wordtally(&["--top", "0"]);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr.contains("ERROR"), "{stderr}");
    assert!(stderr.contains("--top must be greater than 0"), "{stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn init_over_existing_file_is_logged_and_exits_1() {
    let path = scratch_dir("init").join("sample.txt");
    std::fs::write(&path, "already here\n").unwrap();

    let out = wordtally(&["--init", "--input", path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr.contains("already exists"), "{stderr}");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "already here\n");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn sample_report_on_stdout() {
    let missing = scratch_dir("sample").join("missing.txt");
    let out = wordtally(&["--input", missing.to_str().unwrap(), "--top", "1"]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(out.status.success());
    assert!(stdout.contains("WORD COUNT RESULTS"), "{stdout}");
    assert!(stdout.contains("spark  10"), "{stdout}");
}
