use save_analyzer_testing::TestWorld;
use save_analyzer_testing::assertions::{ExpectedSummary, assert_session_saves, assert_summary};
use save_analyzer_testing::fixtures::{self, BASE_TS};

#[test]
fn test_plain_summary_for_two_sessions() {
    let world = TestWorld::new().with_saves_at(&fixtures::two_sessions());

    let result = world.run(&[]).expect("Failed to run save-analyzer");

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "saves: 5;\nsessions: 2;\ntotal time: 4m10s;\nlongest session time: 3m20s\n"
    );
}

#[test]
fn test_json_output_snapshot() {
    let world = TestWorld::new().with_saves_at(&fixtures::two_sessions());

    let result = world
        .run(&["--format", "json"])
        .expect("Failed to run save-analyzer");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().expect("Failed to parse JSON output");
    insta::assert_json_snapshot!(json, {".content.settings.save_dir" => "[dir]"}, @r#"
    {
      "content": {
        "sessions": [
          {
            "duration_secs": 200,
            "end_ts": 1700000200,
            "ordinal": 1,
            "save_rate_secs": 66,
            "saves": 3,
            "start_ts": 1700000000
          },
          {
            "duration_secs": 50,
            "end_ts": 1700010050,
            "ordinal": 2,
            "save_rate_secs": 25,
            "saves": 2,
            "start_ts": 1700010000
          }
        ],
        "settings": {
          "gap_threshold_secs": 1800,
          "min_saves": 2,
          "save_dir": "[dir]",
          "show_table": false
        },
        "summary": {
          "filtered_runs": 0,
          "longest_duration_secs": 200,
          "session_count": 2,
          "total_duration_secs": 250,
          "total_saves": 5
        }
      }
    }
    "#);
}

#[test]
fn test_table_flag_prints_header() {
    let world = TestWorld::new().with_saves_at(&fixtures::two_sessions());

    let result = world.run(&["-t"]).expect("Failed to run save-analyzer");

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    for header in ["#", "duration", "saves rate", "session start", "session stop"] {
        assert!(stdout.contains(header), "missing '{}' in:\n{}", header, stdout);
    }
    assert!(stdout.contains("3m20s"));
    assert!(stdout.contains("1m6s"));
    assert!(stdout.ends_with("longest session time: 3m20s\n"));
}

#[test]
fn test_short_filter_drops_small_sessions() {
    let world = TestWorld::new().with_saves_at(&fixtures::two_sessions());

    let result = world
        .run(&["--short", "3", "--format", "json"])
        .expect("Failed to run save-analyzer");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_summary(
        &json,
        ExpectedSummary {
            total_saves: 5,
            session_count: 1,
            total_duration_secs: 200,
            longest_duration_secs: 200,
        },
    )
    .unwrap();
    assert_session_saves(&json, &[3]).unwrap();
    assert_eq!(json["content"]["summary"]["filtered_runs"], 1);
}

#[test]
fn test_delay_splits_sessions() {
    let world = TestWorld::new().with_saves_at(&fixtures::long_evening());

    let result = world
        .run(&["--format", "json"])
        .expect("Failed to run save-analyzer");
    let json = result.json().unwrap();
    assert_session_saves(&json, &[13]).unwrap();

    // A 10m delay makes every 10m gap a boundary.
    let result = world
        .run(&["--sd", "10m", "--short", "1", "--format", "json"])
        .expect("Failed to run save-analyzer");
    let json = result.json().unwrap();
    assert_session_saves(&json, &[1; 13]).unwrap();
}

#[test]
fn test_nothing_qualifies_shows_tips() {
    let world = TestWorld::new().with_saves_at(&fixtures::lonely_saves());

    let result = world.run(&[]).expect("Failed to run save-analyzer");

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("No sessions with at least 2 saves"));
    assert!(stdout.contains("saves: 2;\nsessions: 0;\ntotal time: 0s;\nlongest session time: 0s\n"));
    assert!(stdout.contains("save-analyzer --short 1"));
    assert!(stdout.contains("save-analyzer --delay 1h0m0s"));
}

#[test]
fn test_sub_directories_are_ignored() {
    let world = TestWorld::new()
        .with_saves_at(&fixtures::two_sessions())
        .with_subdir("backups", BASE_TS + 50);

    let result = world
        .run(&["--format", "json"])
        .expect("Failed to run save-analyzer");
    let json = result.json().unwrap();

    assert_eq!(json["content"]["summary"]["total_saves"], 5);
}

#[test]
fn test_empty_dir_fails() {
    let world = TestWorld::new();

    let result = world.run(&[]).expect("Failed to run save-analyzer");

    assert!(!result.success());
    assert!(result.stderr().contains("saves dir is empty"));
    assert!(result.stdout().is_empty());
}

#[test]
fn test_dir_with_only_sub_directories_fails() {
    let world = TestWorld::new().with_subdir("slot1", BASE_TS);

    let result = world.run(&[]).expect("Failed to run save-analyzer");

    assert!(!result.success());
    assert!(result.stderr().contains("saves dir is empty"));
}

#[test]
fn test_missing_dir_fails() {
    let world = TestWorld::new();
    let missing = world.temp_dir().join("nope").to_string_lossy().to_string();

    let result = world
        .run_raw(&["--dir", missing.as_str()])
        .expect("Failed to run save-analyzer");

    assert!(!result.success());
    assert!(result.stderr().contains("dir path is incorrect or dir does not exist"));
}

#[test]
fn test_zero_short_rejected() {
    let world = TestWorld::new().with_saves_at(&fixtures::two_sessions());

    let result = world.run(&["--short", "0"]).expect("Failed to run save-analyzer");

    assert!(!result.success());
    assert!(result.stderr().contains("minimum saves per session"));
}

#[test]
fn test_zero_delay_rejected() {
    let world = TestWorld::new().with_saves_at(&fixtures::two_sessions());

    let result = world.run(&["--delay", "0s"]).expect("Failed to run save-analyzer");

    assert!(!result.success());
    assert!(result.stderr().contains("delay must be at least 1s"));
}
