//! Control signal tests.
//!
//! Kept in their own test binary because the signals are delivered to the
//! whole test process.

#![cfg(unix)]

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::time::timeout;

use pomodoro_bar::timer::spawn_control_listener;
use pomodoro_bar::TimerControl;

fn send_signal(signal: &str, pid: u32) {
    let status = Command::new("kill")
        .arg(format!("-{}", signal))
        .arg(pid.to_string())
        .status()
        .unwrap();
    assert!(status.success());
}

fn spawn_timer(args: &[&str]) -> Child {
    Command::new(assert_cmd::cargo::cargo_bin("pomodoro-bar"))
        .args(args)
        .stdout(Stdio::piped())
        .spawn()
        .unwrap()
}

/// Waits up to `limit` for the child to exit, killing it on overrun.
fn wait_within(child: &mut Child, limit: Duration) -> Option<ExitStatus> {
    let started = Instant::now();
    while started.elapsed() < limit {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        thread::sleep(Duration::from_millis(20));
    }
    child.kill().unwrap();
    child.wait().unwrap();
    None
}

#[tokio::test]
async fn usr1_and_usr2_map_to_controls() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = spawn_control_listener(tx).unwrap().unwrap();

    send_signal("USR1", std::process::id());
    let control = timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
    assert_eq!(control, Some(TimerControl::TogglePause));

    send_signal("USR2", std::process::id());
    let control = timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
    assert_eq!(control, Some(TimerControl::Skip));

    handle.abort();
}

#[test]
fn usr1_pauses_running_binary() {
    let mut child = Command::new(assert_cmd::cargo::cargo_bin("pomodoro-bar"))
        .args([
            "--format",
            "{phase} {remaining}",
            "--tick-millis",
            "50",
            "--max-ticks",
            "20",
        ])
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    let stdout = child.stdout.take().unwrap();
    let mut lines = BufReader::new(stdout).lines();

    // Wait for a few ticks so the signal handlers are installed.
    for _ in 0..4 {
        lines.next().unwrap().unwrap();
    }
    send_signal("USR1", child.id());

    let rest: Vec<String> = lines.map(|line| line.unwrap()).collect();
    assert!(child.wait().unwrap().success());

    let paused: Vec<&String> = rest.iter().filter(|line| line.starts_with("paused")).collect();
    assert!(!paused.is_empty(), "expected paused lines, got {:?}", rest);

    // The countdown stays frozen while paused.
    let frozen = paused[0].clone();
    assert!(paused.iter().all(|line| **line == frozen));
}

#[test]
fn sigterm_exits_promptly() {
    let mut child = spawn_timer(&["--format", "{phase}", "--tick-millis", "50"]);
    let mut lines = BufReader::new(child.stdout.take().unwrap()).lines();

    for _ in 0..3 {
        lines.next().unwrap().unwrap();
    }
    send_signal("TERM", child.id());

    let status = wait_within(&mut child, Duration::from_secs(2));
    assert!(status.is_some_and(|s| s.success()), "got {:?}", status);
}

#[test]
fn sigint_exits_while_hook_runs() {
    let mut child = spawn_timer(&[
        "-w",
        "1",
        "--format",
        "{phase}",
        "--tick-millis",
        "5",
        "--cmd-work",
        "sleep 20",
    ]);
    let mut lines = BufReader::new(child.stdout.take().unwrap()).lines();

    // The work hook starts as the first break begins.
    while lines.next().unwrap().unwrap() != "short_break" {}
    thread::sleep(Duration::from_millis(300));
    send_signal("INT", child.id());

    let status = wait_within(&mut child, Duration::from_secs(2));
    assert!(status.is_some_and(|s| s.success()), "got {:?}", status);
}

#[test]
fn sigint_exits_after_hook_timed_out() {
    let mut child = spawn_timer(&[
        "-w",
        "1",
        "--format",
        "{phase}",
        "--tick-millis",
        "5",
        "--cmd-work",
        "sleep 20",
        "--hook-timeout",
        "1",
    ]);
    let mut lines = BufReader::new(child.stdout.take().unwrap()).lines();

    while lines.next().unwrap().unwrap() != "short_break" {}
    thread::sleep(Duration::from_millis(1500));
    send_signal("INT", child.id());

    let status = wait_within(&mut child, Duration::from_secs(2));
    assert!(status.is_some_and(|s| s.success()), "got {:?}", status);
}

#[test]
fn usr2_skips_running_break() {
    let mut child = spawn_timer(&[
        "-w",
        "1",
        "-b",
        "10",
        "--format",
        "{phase} {session}",
        "--tick-millis",
        "5",
        "--max-ticks",
        "700",
    ]);
    let mut lines = BufReader::new(child.stdout.take().unwrap()).lines();

    while lines.next().unwrap().unwrap() != "short_break 1" {}
    send_signal("USR2", child.id());

    let rest: Vec<String> = lines.map(|line| line.unwrap()).collect();
    assert!(child.wait().unwrap().success());

    // A ten minute break would last 600 ticks without the skip.
    let break_lines = rest.iter().take_while(|line| line.starts_with("short_break")).count();
    assert!(break_lines < 300, "break ran for {} ticks", break_lines);
    assert_eq!(rest[break_lines], "work 2");
}
