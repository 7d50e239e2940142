use std::{
    env,
    path::{Path, PathBuf},
    process::Command,
    sync::OnceLock,
};

use tools::{check, check_repeated, nice_size, run, size_row, EXPECTED, TIMEOUT};

// built into its own target directory so the outer `cargo test` keeps its lock
fn hi() -> &'static Path {
    static HI: OnceLock<PathBuf> = OnceLock::new();

    HI.get_or_init(|| {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
        let target_dir = root.join("target").join("hi-check");
        let cargo = env::var_os("CARGO").unwrap_or_else(|| "cargo".into());

        let status = Command::new(cargo)
            .current_dir(&root)
            .args(&["build", "--release", "-p", "hi", "--target-dir"])
            .arg(&target_dir)
            .status()
            .unwrap();
        assert!(status.success(), "building `hi` failed");

        target_dir.join("release").join("hi")
    })
}

// runs `hi` through `sh` so the redirection in `script` applies to it; `$0` is the binary
fn redirected(script: &str) -> Command {
    let mut c = Command::new("sh");
    c.args(&["-c", script]).arg(hi());
    c
}

#[test]
fn prints_hi_and_exits_with_zero() {
    let outcome = run(&mut Command::new(hi()), TIMEOUT).unwrap();

    assert_eq!(outcome.code, Some(0));
    assert_eq!(outcome.stdout, EXPECTED);
    assert_eq!(outcome.stdout, [0x68u8, 0x69, 0x21, 0x0a]);
    assert!(outcome.stderr.is_empty());
    assert!(outcome.elapsed < TIMEOUT);
}

#[test]
fn ignores_arguments() {
    let outcome = run(Command::new(hi()).args(&["--help", "x"]), TIMEOUT).unwrap();

    check(&outcome, EXPECTED).unwrap();
}

#[test]
fn ignores_environment() {
    let outcome = run(Command::new(hi()).env_clear(), TIMEOUT).unwrap();

    check(&outcome, EXPECTED).unwrap();
}

#[test]
fn output_is_identical_across_runs() {
    check_repeated(hi().to_str().unwrap(), 20).unwrap();
}

#[test]
fn failed_write_still_exits_with_zero() {
    let outcome = run(&mut redirected(r#"exec "$0" >/dev/full"#), TIMEOUT).unwrap();

    assert_eq!(outcome.code, Some(0));
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.is_empty());
}

#[test]
fn closed_stdout_still_exits_with_zero() {
    let outcome = run(&mut redirected(r#"exec "$0" >&-"#), TIMEOUT).unwrap();

    assert_eq!(outcome.code, Some(0));
    assert!(outcome.stderr.is_empty());
}

#[test]
fn closed_stdin() {
    let outcome = run(&mut redirected(r#"exec "$0" <&-"#), TIMEOUT).unwrap();

    check(&outcome, EXPECTED).unwrap();
}

#[test]
fn size_report() {
    let size = hi().metadata().unwrap().len();
    let row = size_row(hi()).unwrap();

    assert_eq!(row, format!("hi,{},{}", size, nice_size(size)));
}
