use chrono::{NaiveDate, NaiveTime};
use taskline::core::RecurrenceMode;
use taskline::{
    format_log, format_todo, parse_log_at, parse_todo_at, LogEntry, TasklineError, TodoTask,
};

/// 2025-01-06 is a Monday.
fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

fn canonical_todo(input: &str) -> String {
    format_todo(&parse_todo_at(input, day()).unwrap())
}

fn canonical_log(input: &str) -> String {
    format_log(&parse_log_at(input, day()).unwrap())
}

// ===================
// Canonical stability
// ===================

#[test]
fn test_canonical_todo_lines_survive_a_round_trip() {
    let lines = [
        "buy milk",
        "buy milk @home +errand ~2h",
        "2025-03-14 file taxes @finance",
        "daily 08:00 take meds",
        "weekly review inbox",
        "every tuesday 09:00 standup @work",
        "weekdays 08:30 gym +health",
        "Mon,Wed,Fri lift weights",
        "after 3d water plants",
        "monthly pay rent $bills",
        "ship release @web +infra ~3h $q1 window:22:00-06:00 after:3,5",
    ];
    for line in lines {
        assert_eq!(canonical_todo(line), line, "line: {line}");
    }
}

#[test]
fn test_canonical_log_lines_survive_a_round_trip() {
    let lines = [
        "fix login bug @work",
        "09:15 fix login bug @work +backend ~1h",
        "14:30:45 code review (45m) ^2",
        "@end",
        "13:05 @end ->completed # went fine",
        "@pause # lunch",
        "@resume",
        "@prev",
        "@42",
        "write docs ~2h (1h30m) ^1 ->paused",
    ];
    for line in lines {
        assert_eq!(canonical_log(line), line, "line: {line}");
    }
}

#[test]
fn test_formatting_reaches_a_fixpoint_in_one_pass() {
    let todos = [
        "  buy   milk  @home +errand ~90m",
        "tomorrow   deploy  app",
        "sat gym +health",
        "window:9:00-17:00 focus block",
        "fri,mon,wed review inbox",
    ];
    for line in todos {
        let first = canonical_todo(line);
        let second = canonical_todo(&first);
        assert_eq!(second, first, "line: {line}");
    }

    let logs = ["9:15 fix bug @work", "14:30:00 standup", "write   spaced   words"];
    for line in logs {
        let first = canonical_log(line);
        let second = canonical_log(&first);
        assert_eq!(second, first, "line: {line}");
    }
}

#[test]
fn test_reparsing_a_formatted_record_preserves_every_field() {
    let task = parse_todo_at("  every   tue 9:00  standup @work +agile ~30m", day()).unwrap();
    let mut back = parse_todo_at(&format_todo(&task), day()).unwrap();
    back.raw = task.raw.clone();
    assert_eq!(back, task);

    let entry = parse_log_at("9:15  fix  bug @work (45m)", day()).unwrap();
    let mut back = parse_log_at(&format_log(&entry), day()).unwrap();
    back.raw = entry.raw.clone();
    assert_eq!(back, entry);
}

// =============
// Normalization
// =============

#[test]
fn test_todo_normalization_rewrites_equivalent_spellings() {
    assert_eq!(canonical_todo("write report ~90m"), "write report ~1h30m");
    assert_eq!(canonical_todo("tomorrow deploy app"), "2025-01-07 deploy app");
    assert_eq!(canonical_todo("today review pr"), "2025-01-06 review pr");
    assert_eq!(canonical_todo("sat gym"), "2025-01-11 gym");
    assert_eq!(canonical_todo("mon plan week"), "2025-01-13 plan week");
    assert_eq!(canonical_todo("Every TUE sync"), "every tuesday sync");
    assert_eq!(
        canonical_todo("window:9:00-17:00 focus block"),
        "focus block window:09:00-17:00"
    );
}

#[test]
fn test_weekday_sets_sort_and_dedupe() {
    let task = parse_todo_at("fri,mon,wed,mon review inbox", day()).unwrap();
    let rec = task.recurrence.as_ref().unwrap();
    assert_eq!(rec.days_of_week, Some(vec![1, 3, 5]));
    assert_eq!(
        canonical_todo("fri,mon,wed,mon review inbox"),
        "Mon,Wed,Fri review inbox"
    );
}

#[test]
fn test_log_timestamps_reemit_as_time_of_day() {
    assert_eq!(canonical_log("7:05 standup"), "07:05 standup");
    assert_eq!(canonical_log("14:30:00 standup"), "14:30 standup");
    assert_eq!(canonical_log("14:30:45 standup"), "14:30:45 standup");
    assert_eq!(canonical_log("2025-01-04 23:30 night shift"), "23:30 night shift");

    // The explicit date still lands in the record.
    let entry = parse_log_at("2025-01-04 23:30 night shift", day()).unwrap();
    let expected = NaiveDate::from_ymd_opt(2025, 1, 4)
        .unwrap()
        .and_hms_opt(23, 30, 0)
        .unwrap();
    assert_eq!(entry.timestamp, Some(expected));
}

// ================
// Error boundaries
// ================

#[test]
fn test_todo_hard_errors() {
    let cases = [
        ("", "empty input"),
        ("   ", "empty input"),
        ("@work +infra", "missing title"),
        ("after:0 pay rent", "invalid dependency id: 0"),
        ("2025-13-01 report", "invalid date: 2025-13-01"),
        ("every blue moon", "invalid recurrence pattern: every blue"),
        ("after lunch", "invalid recurrence pattern: after lunch"),
        ("every 0d rotate", "invalid recurrence interval: 0d"),
        ("daily 25:00 meds", "invalid time: 25:00"),
        ("window:08:00-99:00 deep work", "invalid time: 99:00"),
    ];
    for (input, message) in cases {
        match parse_todo_at(input, day()) {
            Err(TasklineError::Parse(msg)) => assert_eq!(msg, message, "input: {input:?}"),
            other => panic!("expected a parse error for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_log_hard_errors() {
    let cases = [
        ("", "empty input"),
        ("25:00 lunch", "invalid time: 25:00"),
        ("2025-02-30 10:00 standup", "invalid date: 2025-02-30"),
    ];
    for (input, message) in cases {
        match parse_log_at(input, day()) {
            Err(TasklineError::Parse(msg)) => assert_eq!(msg, message, "input: {input:?}"),
            other => panic!("expected a parse error for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_log_lines_need_no_title() {
    let entry = parse_log_at("09:15", day()).unwrap();
    assert_eq!(entry.title, "");
    assert!(entry.timestamp.is_some());
    assert_eq!(canonical_log("09:15"), "09:15");

    let task = parse_todo_at("@work +infra", day());
    assert!(task.is_err(), "a todo line still requires a title");
}

#[test]
fn test_malformed_markers_fall_back_to_title_text() {
    let task = parse_todo_at("send ~2.5h summary after:abc window:junk", day()).unwrap();
    assert_eq!(task.title, "send ~2.5h summary after:abc window:junk");
    assert_eq!(task.duration, None);
    assert_eq!(task.dependencies, None);
    assert_eq!(task.window, None);

    let entry = parse_log_at("lunch at 12:30pm with bob@example.com ^0", day()).unwrap();
    assert_eq!(entry.title, "lunch at 12:30pm with bob@example.com ^0");
    assert_eq!(entry.timestamp, None);
    assert_eq!(entry.project, None);
    assert_eq!(entry.priority, None);
}

#[test]
fn test_state_marker_lookalikes_stay_projects() {
    let entry = parse_log_at("@ender session notes", day()).unwrap();
    assert_eq!(entry.state, None);
    assert_eq!(entry.project.as_deref(), Some("ender"));
    assert_eq!(entry.title, "session notes");

    // A state marker anywhere but the head of the line is a project.
    let entry = parse_log_at("wrap up @end", day()).unwrap();
    assert_eq!(entry.state, None);
    assert_eq!(entry.project.as_deref(), Some("end"));
    assert_eq!(entry.title, "wrap up");
}

// ====================
// Mode-specific syntax
// ====================

#[test]
fn test_marker_sets_differ_by_mode() {
    let task = parse_todo_at("review notes ^3 $q2", day()).unwrap();
    assert_eq!(task.title, "review notes ^3");
    assert_eq!(task.bucket.as_deref(), Some("q2"));

    let entry = parse_log_at("review notes ^3 $q2", day()).unwrap();
    assert_eq!(entry.title, "review notes $q2");
    assert_eq!(entry.priority, Some(3));

    let entry = parse_log_at("plan window:08:00-10:00 after:2", day()).unwrap();
    assert_eq!(entry.title, "plan window:08:00-10:00 after:2");

    let entry = parse_log_at("every tuesday sync", day()).unwrap();
    assert_eq!(entry.title, "every tuesday sync");
}

#[test]
fn test_remark_swallows_the_rest_of_the_line() {
    let line = "debug session # left off at the parser @work";
    let entry = parse_log_at(line, day()).unwrap();
    assert_eq!(entry.remark.as_deref(), Some("left off at the parser @work"));
    assert_eq!(entry.project, None);
    assert_eq!(entry.title, "debug session");
    assert_eq!(canonical_log(line), line);
}

// =================
// Record properties
// =================

#[test]
fn test_overnight_windows_know_their_span() {
    let task = parse_todo_at("backup db window:22:00-06:00", day()).unwrap();
    let window = task.window.unwrap();
    assert!(window.crosses_midnight());
    assert!(window.contains(NaiveTime::from_hms_opt(23, 30, 0).unwrap()));
    assert!(window.contains(NaiveTime::from_hms_opt(2, 0, 0).unwrap()));
    assert!(!window.contains(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
}

#[test]
fn test_completion_recurrence_carries_no_anchor() {
    let task = parse_todo_at("after 2w trim hedges", day()).unwrap();
    let rec = task.recurrence.unwrap();
    assert_eq!(rec.mode, RecurrenceMode::Completion);
    assert_eq!(rec.anchor, None);

    let task = parse_todo_at("every 2w rotate keys", day()).unwrap();
    let rec = task.recurrence.unwrap();
    assert_eq!(rec.mode, RecurrenceMode::Calendar);
    assert_eq!(rec.anchor, Some(day()));
}

#[test]
fn test_records_round_trip_through_json() {
    let task = parse_todo_at(
        "every 2w rotate keys @ops +infra ~1h $q1 window:22:00-06:00 after:3,5",
        day(),
    )
    .unwrap();
    let json = serde_json::to_string(&task).unwrap();
    let back: TodoTask = serde_json::from_str(&json).unwrap();
    assert_eq!(back, task);

    let entry = parse_log_at("13:05 @end ->completed # went fine", day()).unwrap();
    let json = serde_json::to_string(&entry).unwrap();
    let back: LogEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
}
