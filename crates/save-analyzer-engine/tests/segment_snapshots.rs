use save_analyzer_engine::{segment, SegmentConfig};

#[test]
fn test_two_session_report_snapshot() {
    let report = segment(&[10_050, 0, 200, 100, 10_000], &SegmentConfig::new(500, 2))
        .expect("Failed to segment");

    insta::assert_json_snapshot!(report, @r#"
    {
      "sessions": [
        {
          "ordinal": 1,
          "start": 0,
          "end": 200,
          "duration": 200,
          "saves": 3
        },
        {
          "ordinal": 2,
          "start": 10000,
          "end": 10050,
          "duration": 50,
          "saves": 2
        }
      ],
      "summary": {
        "total_saves": 5,
        "session_count": 2,
        "total_duration": 250,
        "longest_duration": 200
      },
      "total_runs": 2
    }
    "#);
}

#[test]
fn test_filtered_report_snapshot() {
    let report = segment(&[0, 1000], &SegmentConfig::new(500, 2)).expect("Failed to segment");

    insta::assert_json_snapshot!(report, @r#"
    {
      "sessions": [],
      "summary": {
        "total_saves": 2,
        "session_count": 0,
        "total_duration": 0,
        "longest_duration": 0
      },
      "total_runs": 2
    }
    "#);
}

#[test]
fn test_realistic_evening_of_saves() {
    // Two evenings of quicksaves, plus a stray autosave the next morning.
    let evening_one = 1_700_000_000;
    let evening_two = evening_one + 86_400;
    let mut ts: Vec<i64> = (0..12).map(|i| evening_one + i * 600).collect();
    ts.extend((0..4).map(|i| evening_two + i * 900));
    ts.push(evening_two + 12 * 3600);

    let report = segment(&ts, &SegmentConfig::default()).expect("Failed to segment");

    assert_eq!(report.summary.total_saves, 17);
    assert_eq!(report.summary.session_count, 2);
    assert_eq!(report.sessions[0].duration, 11 * 600);
    assert_eq!(report.sessions[1].duration, 3 * 900);
    assert_eq!(report.summary.longest_duration, 6600);
    assert_eq!(report.filtered_runs(), 1);
}
