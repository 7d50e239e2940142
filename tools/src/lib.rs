//! Host side checks for the `hi` program

use std::{
    error::Error,
    fs,
    io::{self, Read},
    path::Path,
    process::{Command, Stdio},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

/// What `hi` must print
pub const EXPECTED: &[u8; 4] = b"hi!\n";

/// Upper bound on how long a single run may take
pub const TIMEOUT: Duration = Duration::from_secs(5);

/// Header of the rows produced by `size_row`
pub const SIZE_HEADER: &str = "name,size,nice";

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Observable result of running a program once
#[derive(Debug)]
pub struct Outcome {
    /// Exit code; `None` if the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub elapsed: Duration,
}

/// Runs `cmd` to completion with a null standard input, capturing both output streams
///
/// The process is killed if it's still running after `timeout`.
pub fn run(cmd: &mut Command, timeout: Duration) -> Result<Outcome, Box<dyn Error>> {
    let start = Instant::now();
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // drained while the child runs; a full pipe would otherwise block it forever
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }

        if start.elapsed() > timeout {
            child.kill()?;
            child.wait()?;
            return Err(format!("{:?} didn't terminate within {:?}", cmd, timeout).into());
        }

        thread::sleep(POLL_INTERVAL);
    };
    let elapsed = start.elapsed();

    Ok(Outcome {
        code: status.code(),
        stdout: collect(stdout)?,
        stderr: collect(stderr)?,
        elapsed,
    })
}

fn drain<R>(mut pipe: R) -> JoinHandle<io::Result<Vec<u8>>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = vec![];
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn collect(reader: Option<JoinHandle<io::Result<Vec<u8>>>>) -> Result<Vec<u8>, Box<dyn Error>> {
    match reader {
        Some(handle) => match handle.join() {
            Ok(buf) => Ok(buf?),
            Err(_) => Err("pipe reader panicked".into()),
        },
        None => Ok(vec![]),
    }
}

/// Checks that a run exited with 0, printed exactly `expected` and nothing on stderr
pub fn check(outcome: &Outcome, expected: &[u8]) -> Result<(), Box<dyn Error>> {
    if outcome.code != Some(0) {
        return Err(format!("exit code: expected Some(0), got {:?}", outcome.code).into());
    }

    if outcome.stdout != expected {
        return Err(format!(
            "stdout: expected {:?}, got {:?}",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(&outcome.stdout)
        )
        .into());
    }

    if !outcome.stderr.is_empty() {
        return Err(format!(
            "stderr: expected nothing, got {:?}",
            String::from_utf8_lossy(&outcome.stderr)
        )
        .into());
    }

    Ok(())
}

/// Runs `path` `runs` times, checking every run and that all of them printed the same bytes
pub fn check_repeated(path: &str, runs: usize) -> Result<(), Box<dyn Error>> {
    let mut first: Option<Vec<u8>> = None;
    for i in 0..runs {
        let outcome = run(&mut Command::new(path), TIMEOUT)?;
        check(&outcome, EXPECTED).map_err(|e| format!("run #{}: {}", i, e))?;

        let first = first.get_or_insert_with(|| outcome.stdout.clone());
        if *first != outcome.stdout {
            return Err(format!("run #{}: output differs from run #0", i).into());
        }
    }

    Ok(())
}

/// Human readable size: whole bytes below 1 KiB, otherwise one decimal in `k`, `M` or `G`
/// (powers of 1024); sizes of 1 TiB and above are printed as a plain byte count
pub fn nice_size(size: u64) -> String {
    const SUFFIXES: [&str; 4] = ["B", "k", "M", "G"];

    for (i, suffix) in SUFFIXES.iter().enumerate() {
        let base = 1024u64.pow(i as u32);
        if size < base * 1024 {
            if i == 0 {
                return format!("{}{}", size, suffix);
            }

            // half away from zero, then one decimal
            let scaled = (size as f64 / base as f64 * 10.0).round() / 10.0;
            return format!("{:.1}{}", scaled, suffix);
        }
    }

    size.to_string()
}

/// `name,size,nice` CSV row describing the file at `path`
pub fn size_row(path: &Path) -> Result<String, Box<dyn Error>> {
    let size = fs::metadata(path)?.len();
    let name = path
        .file_name()
        .ok_or_else(|| format!("{} has no file name", path.display()))?
        .to_string_lossy();

    Ok(format!("{},{},{}", name, size, nice_size(size)))
}
