use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn course_progress(work_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("course-progress").unwrap();
    cmd.current_dir(work_dir)
        .env_remove("COURSE_PROGRESS_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Shell script standing in for ffprobe that always reports `seconds`
#[cfg(unix)]
fn fake_ffprobe(dir: &Path, seconds: &str) -> PathBuf {
    ffprobe_script(dir, &format!("echo {}", seconds))
}

#[cfg(unix)]
fn ffprobe_script(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-ffprobe");
    fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    course_progress(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn test_missing_course_folder_fails() {
    let temp_dir = TempDir::new().unwrap();
    course_progress(temp_dir.path())
        .args(["report", "no-such-course"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Course folder not found"));

    assert!(!temp_dir.path().join("progress_report.html").exists());
}

#[test]
fn test_course_without_videos_fails() {
    let temp_dir = TempDir::new().unwrap();
    let course = temp_dir.path().join("course");
    fs::create_dir_all(course.join("01-Intro")).unwrap();
    fs::write(course.join("01-Intro").join("notes.txt"), "notes").unwrap();

    course_progress(temp_dir.path())
        .arg("report")
        .arg(&course)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No video files found"));

    assert!(!temp_dir.path().join("progress_report.html").exists());
}

#[test]
fn test_prompts_for_course_folder() {
    let temp_dir = TempDir::new().unwrap();
    course_progress(temp_dir.path())
        .arg("report")
        .write_stdin("no-such-course\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Enter the path to your course folder:"))
        .stderr(predicate::str::contains("Course folder not found"));
}

#[test]
fn test_config_command_prints_defaults() {
    let temp_dir = TempDir::new().unwrap();
    course_progress(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[course_progress]"))
        .stdout(predicate::str::contains("max_chapters = 100"));
}

#[test]
fn test_config_file_and_env_are_applied() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("course_progress.toml"),
        "[course_progress]\ntheme = \"dark\"\nmax_chapters = 7\n",
    )
    .unwrap();

    course_progress(temp_dir.path())
        .env("COURSE_PROGRESS_MAX_CHAPTERS", "3")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = \"dark\""))
        .stdout(predicate::str::contains("max_chapters = 3"));
}

#[test]
fn test_invalid_config_value_fails() {
    let temp_dir = TempDir::new().unwrap();
    course_progress(temp_dir.path())
        .args(["config", "--log-format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[cfg(unix)]
#[test]
fn test_report_end_to_end_with_fake_ffprobe() {
    let temp_dir = TempDir::new().unwrap();
    let ffprobe = fake_ffprobe(temp_dir.path(), "60.000000");
    let course = temp_dir.path().join("course");
    for (chapter, video) in [("01-Intro [DONE]", "a.mp4"), ("02-Advanced", "b.mkv")] {
        fs::create_dir_all(course.join(chapter)).unwrap();
        fs::write(course.join(chapter).join(video), "").unwrap();
    }

    course_progress(temp_dir.path())
        .arg("report")
        .arg(&course)
        .arg("--ffprobe")
        .arg(&ffprobe)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report generated:"))
        .stdout(predicate::str::contains("50.0% complete"));

    let html = fs::read_to_string(temp_dir.path().join("progress_report.html")).unwrap();
    assert!(html.contains("50.0%"));
    assert!(html.contains("01-Intro [DONE]"));
    assert!(html.contains("00:02:00"));
}

#[cfg(unix)]
#[test]
fn test_summary_json_with_fake_ffprobe() {
    let temp_dir = TempDir::new().unwrap();
    let ffprobe = fake_ffprobe(temp_dir.path(), "90.5");
    let course = temp_dir.path().join("course");
    fs::create_dir_all(course.join("only [done]")).unwrap();
    fs::write(course.join("only [done]").join("clip.MOV"), "").unwrap();

    let output = course_progress(temp_dir.path())
        .args(["summary", "--json", "--ffprobe"])
        .arg(&ffprobe)
        .arg(&course)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["percentage"], 100.0);
    assert_eq!(json["total"], "00:01:30");
    assert!(!temp_dir.path().join("progress_report.html").exists());
}

#[cfg(unix)]
#[test]
fn test_failing_ffprobe_counts_as_no_videos() {
    let temp_dir = TempDir::new().unwrap();
    let ffprobe = fake_ffprobe(temp_dir.path(), "N/A");
    let course = temp_dir.path().join("course");
    fs::create_dir_all(course.join("01")).unwrap();
    fs::write(course.join("01").join("broken.mp4"), "").unwrap();

    course_progress(temp_dir.path())
        .arg("summary")
        .arg(&course)
        .arg("--ffprobe")
        .arg(&ffprobe)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No video files found"));
}

#[cfg(unix)]
#[test]
fn test_slow_ffprobe_times_out() {
    let temp_dir = TempDir::new().unwrap();
    let ffprobe = ffprobe_script(temp_dir.path(), "sleep 20\necho 5");
    let course = temp_dir.path().join("course");
    fs::create_dir_all(course.join("01")).unwrap();
    fs::write(course.join("01").join("slow.mp4"), "").unwrap();

    let started = std::time::Instant::now();
    course_progress(temp_dir.path())
        .arg("summary")
        .arg(&course)
        .args(["--probe-timeout", "1", "--ffprobe"])
        .arg(&ffprobe)
        .timeout(std::time::Duration::from_secs(15))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No video files found"));

    assert!(started.elapsed() < std::time::Duration::from_secs(15));
}

#[cfg(unix)]
#[test]
fn test_summary_json_prompt_keeps_stdout_parseable() {
    let temp_dir = TempDir::new().unwrap();
    let ffprobe = fake_ffprobe(temp_dir.path(), "30");
    let course = temp_dir.path().join("course");
    fs::create_dir_all(course.join("01 [DONE]")).unwrap();
    fs::write(course.join("01 [DONE]").join("a.mp4"), "").unwrap();

    let result = course_progress(temp_dir.path())
        .args(["summary", "--json", "--ffprobe"])
        .arg(&ffprobe)
        .write_stdin(format!("{}\n", course.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter the path to your course folder:"));

    let json: serde_json::Value = serde_json::from_slice(&result.get_output().stdout).unwrap();
    assert_eq!(json["total"], "00:00:30");
    assert_eq!(json["chapters_done"], 1);
}
