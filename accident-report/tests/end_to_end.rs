// Load -> derive -> run over small on-disk datasets
use accident_report::stats::Frequency;
use accident_report::{
    derive, load_csv, ArtifactBody, ChartData, ChartKind, CsvOptions, Report, ReportConfig,
    ReportGenerator, Section, Value,
};
use std::io::Write;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn run_csv(contents: &str) -> Report {
    init_logging();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();

    let dataset = load_csv(file.path(), &CsvOptions::default()).unwrap();
    let dataset = derive(dataset).unwrap();
    ReportGenerator::new(ReportConfig::default()).run(&dataset)
}

fn frequencies<'a>(report: &'a Report, step: &str) -> &'a [Frequency] {
    let artifact = report
        .artifact(step)
        .unwrap_or_else(|| panic!("no artifact for {}", step));
    match &artifact.body.as_chart().unwrap().data {
        ChartData::Frequencies { entries } => entries,
        other => panic!("unexpected chart data for {}: {:?}", step, other),
    }
}

const FULL: &str = "\
Date,Time,City,Region,Latitude,Longitude,Severity,Age,Gender,Weather,Vehicle_Type,Speeding,Contributing_Factors,Injury_Count,Fatality_Count
2023-01-01,08:30,Leeds,North,53.8,-1.55,Fatal,17,Male,Rain,Car,Yes,Speed,2,1
2023-01-01,17:05,York,North,53.96,-1.08,Minor,18,Female,Clear,Bus,No,Distraction,0,0
2023-01-02,23:59,Leeds,South,53.79,-1.54,Serious,59,Male,Rain,Car,Yes,Speed,3,0
";

#[test]
fn test_severity_percentages() {
    let report = run_csv(FULL);
    let fatal = report.artifact("fatal_percentage").unwrap().body.statistic_value().unwrap();
    let serious = report.artifact("serious_percentage").unwrap().body.statistic_value().unwrap();
    assert!((fatal - 33.333).abs() < 0.01);
    assert!((serious - 33.333).abs() < 0.01);
    assert!(fatal + serious <= 100.0);
}

#[test]
fn test_daily_series() {
    let report = run_csv(FULL);
    let daily = frequencies(&report, "daily_accidents");
    let pairs: Vec<(String, usize)> = daily.iter().map(|f| (f.value.to_string(), f.count)).collect();
    assert_eq!(
        pairs,
        vec![("2023-01-01".to_string(), 2), ("2023-01-02".to_string(), 1)]
    );
    assert_eq!(
        report.artifact("daily_accidents").unwrap().body.as_chart().unwrap().kind,
        ChartKind::Line
    );
}

#[test]
fn test_weekday_chart_uses_calendar_order() {
    let report = run_csv(FULL);
    let weekdays = frequencies(&report, "accidents_by_weekday");
    assert_eq!(weekdays.len(), 7);
    assert_eq!(weekdays[0], Frequency::new(Value::text("Monday"), 1));
    assert_eq!(weekdays[6], Frequency::new(Value::text("Sunday"), 2));

    let weekend = frequencies(&report, "weekday_vs_weekend");
    assert_eq!(weekend[0], Frequency::new(Value::Bool(false), 1));
    assert_eq!(weekend[1], Frequency::new(Value::Bool(true), 2));
}

#[test]
fn test_age_groups() {
    let report = run_csv(FULL);
    let groups = frequencies(&report, "age_group_frequency");
    let counts: Vec<(String, usize)> = groups.iter().map(|f| (f.value.to_string(), f.count)).collect();
    assert_eq!(
        counts,
        vec![
            ("0-18".to_string(), 1),
            ("19-30".to_string(), 1),
            ("31-45".to_string(), 0),
            ("46-60".to_string(), 1),
            ("60+".to_string(), 0),
        ]
    );
}

#[test]
fn test_every_section_reports() {
    let report = run_csv(FULL);
    for section in Section::ALL {
        assert!(
            report.section(section).next().is_some(),
            "no artifacts in {}",
            section
        );
    }
    assert!(report.artifact("severity_time_correlation").is_some());
    assert!(report.artifact("geographic_hotspots").is_some());
    assert!(report.artifact("factors_by_region").is_some());
}

#[test]
fn test_correlation_matrix() {
    let report = run_csv(FULL);
    let chart = report.artifact("severity_time_correlation").unwrap().body.as_chart().unwrap();
    match &chart.data {
        ChartData::Correlation(matrix) => {
            assert_eq!(matrix.fields, vec!["Severity_Numeric", "Hour", "Month"]);
            assert_eq!(matrix.get("Hour", "Hour"), Some(1.0));
            // Severity 3,1,2 against hours 8,17,23
            let r = matrix.get("Severity_Numeric", "Hour").unwrap();
            assert!(r < 0.0 && r > -1.0);
        }
        other => panic!("unexpected data {:?}", other),
    }
}

#[test]
fn test_no_region_column() {
    let report = run_csv("City,Severity\nLeeds,Fatal\nYork,Minor\n");
    for step in [
        "region_distribution",
        "severity_by_region",
        "factors_by_region",
        "region_by_year",
    ] {
        assert!(report.artifact(step).is_none(), "{} produced an artifact", step);
        assert!(report.was_skipped(step));
    }
    assert!(report.artifact("top_cities").is_some());
}

#[test]
fn test_no_severity_column() {
    let report = run_csv("City\nLeeds\n");
    assert!(report.artifact("fatal_percentage").is_none());
    assert!(report.artifact("serious_percentage").is_none());
    assert!(report.artifact("severity_distribution").is_none());
}

#[test]
fn test_all_missing_severity_is_undefined() {
    let report = run_csv("City,Severity\nLeeds,\nYork,\n");
    let fatal = report.artifact("fatal_percentage").unwrap();
    assert!(matches!(
        fatal.body,
        ArtifactBody::Statistic { value: None, .. }
    ));
}

#[test]
fn test_unknown_severity_counts_but_is_not_ordinal() {
    let report = run_csv("Severity,Time\nSlight,10:00\nFatal,11:00\nSlight,12:00\n");
    let dist = frequencies(&report, "severity_distribution");
    assert_eq!(dist[0], Frequency::new(Value::text("Slight"), 2));

    // Slight is part of the denominator
    let fatal = report.artifact("fatal_percentage").unwrap().body.statistic_value().unwrap();
    assert!((fatal - 33.333).abs() < 0.01);

    // only one ordinal value: correlation is undefined off the diagonal
    let chart = report.artifact("severity_time_correlation").unwrap().body.as_chart().unwrap();
    match &chart.data {
        ChartData::Correlation(matrix) => assert_eq!(matrix.get("Severity_Numeric", "Hour"), None),
        other => panic!("unexpected data {:?}", other),
    }
}

#[test]
fn test_invalid_dates_are_missing() {
    let report = run_csv("Date\n2023-01-01\nnot-a-date\n2023-01-01\n");
    let daily = frequencies(&report, "daily_accidents");
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].count, 2);
    let total = report.artifact("total_accidents").unwrap().body.statistic_value();
    assert_eq!(total, Some(3.0));
}

#[test]
fn test_top_k_truncation() {
    let mut csv = String::from("City\n");
    for i in 0..15 {
        for _ in 0..(15 - i) {
            csv.push_str(&format!("City{}\n", i));
        }
    }
    let report = run_csv(&csv);
    let cities = frequencies(&report, "top_cities");
    assert_eq!(cities.len(), 10);
    assert_eq!(cities[0], Frequency::new(Value::text("City0"), 15));
    let chart = report.artifact("top_cities").unwrap().body.as_chart().unwrap();
    assert_eq!(chart.top_k, Some(10));
    assert_eq!(chart.title, "Top 10 Cities with Highest Accident Frequency");
}
