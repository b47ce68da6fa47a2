// Unit tests for domain rules

use crate::domain::rules::*;

#[test]
fn test_done_marker_anywhere_in_name() {
    assert!(ChapterClassifier::is_done("1-Intro [done]"));
    assert!(ChapterClassifier::is_done("1-Intro[DONE]extra"));
    assert!(ChapterClassifier::is_done("[Done] 1-Intro"));
    assert!(!ChapterClassifier::is_done("1-Intro"));
    assert!(!ChapterClassifier::is_done("1-Intro DONE"));
    assert!(!ChapterClassifier::is_done("1-Intro [DON E]"));
}

#[test]
fn test_hidden_entries() {
    assert!(ChapterClassifier::is_hidden(".git"));
    assert!(ChapterClassifier::is_hidden(".DS_Store"));
    assert!(!ChapterClassifier::is_hidden("01-Intro"));
}

#[test]
fn test_video_extensions_case_insensitive() {
    assert!(ChapterClassifier::is_video_file("lesson.mp4"));
    assert!(ChapterClassifier::is_video_file("lesson.MKV"));
    assert!(ChapterClassifier::is_video_file("lesson.Mov"));
    assert!(ChapterClassifier::is_video_file("lesson.avi"));
    assert!(ChapterClassifier::is_video_file("lesson.wmv"));
    assert!(ChapterClassifier::is_video_file("my.talk.mp4"));
}

#[test]
fn test_non_video_files() {
    assert!(!ChapterClassifier::is_video_file("notes.txt"));
    assert!(!ChapterClassifier::is_video_file("lesson.mp4.part"));
    assert!(!ChapterClassifier::is_video_file("mp4"));
    assert!(!ChapterClassifier::is_video_file("lesson."));
    assert!(!ChapterClassifier::is_video_file("lesson.webm"));
}

#[test]
fn test_format_hms() {
    assert_eq!(format_hms(0.0), "00:00:00");
    assert_eq!(format_hms(3661.0), "01:01:01");
    assert_eq!(format_hms(359999.0), "99:59:59");
    assert_eq!(format_hms(360000.0), "100:00:00");
}

#[test]
fn test_format_hms_truncates_fractions() {
    assert_eq!(format_hms(59.999), "00:00:59");
    assert_eq!(format_hms(61.5), "00:01:01");
}

#[test]
fn test_format_hms_degenerate_input() {
    assert_eq!(format_hms(-5.0), "00:00:00");
    assert_eq!(format_hms(f64::NAN), "00:00:00");
    assert_eq!(format_hms(f64::INFINITY), "00:00:00");
}

#[test]
fn test_percentage() {
    assert_eq!(percentage(50.0, 200.0), 25.0);
    assert_eq!(percentage(0.0, 0.0), 0.0);
    assert_eq!(percentage(200.0, 200.0), 100.0);
    assert_eq!(percentage(10.0, -1.0), 0.0);
}

#[test]
fn test_percentage_stays_in_range() {
    assert_eq!(percentage(300.0, 200.0), 100.0);
    assert_eq!(percentage(-10.0, 200.0), 0.0);
}

#[test]
fn test_round_to_tenth() {
    assert_eq!(round_to_tenth(54.545454), 54.5);
    assert_eq!(round_to_tenth(12.36), 12.4);
    assert_eq!(round_to_tenth(12.34), 12.3);
    assert_eq!(round_to_tenth(0.0), 0.0);
}
