//! End-to-end flow: benchmark table and family reference tables in, keyed
//! joins, per-family summaries, and the per-series power index out.

use indexmap::IndexMap;
use wattkey::constants::columns;
use wattkey::{
    assign_identity_columns, expand, family_power_report, inner_join, series_power_index,
    PipelineConfig, Row, Value,
};

fn benchmark_row(description: &str, threads: f64, cores: f64, idle: f64, max: f64, year: Value) -> Row {
    Row::from_iter([
        (columns::PROCESSOR.to_string(), Value::from(description)),
        (columns::THREADS.to_string(), Value::Number(threads)),
        (columns::CORES.to_string(), Value::Number(cores)),
        (columns::IDLE_WATTS.to_string(), Value::Number(idle)),
        (columns::MAX_WATTS.to_string(), Value::Number(max)),
        (columns::LAUNCH_YEAR.to_string(), year),
        // a column the pipeline knows nothing about
        ("vendor_notes".to_string(), Value::from("as published")),
    ])
}

fn reference_row(description: &str) -> Row {
    Row::from_iter([(columns::PROCESSOR.to_string(), Value::from(description))])
}

fn benchmark_table() -> Vec<Row> {
    vec![
        benchmark_row("Intel Xeon Platinum 8280v2 @ 2.70GHz", 56.0, 28.0, 48.0, 355.0, Value::Number(2019.0)),
        benchmark_row("Intel Xeon Platinum 8176 v7 CPU 2.10 GHz", 56.0, 28.0, 45.0, 340.0, Value::from("2,017")),
        benchmark_row("AMD EPYC 7601 L 2.20 GHz, Dell SKU [338-BNCG]", 64.0, 32.0, 60.0, 300.0, Value::from("HTML")),
    ]
}

fn family_tables() -> IndexMap<String, Vec<Row>> {
    IndexMap::from_iter([
        (
            "Cascade Lake".to_string(),
            vec![reference_row("Intel Xeon Platinum 8280 v2")],
        ),
        (
            "AMD EPYC Naples".to_string(),
            vec![reference_row("AMD EPYC 7601 L")],
        ),
    ])
}

fn fixture_config() -> PipelineConfig {
    PipelineConfig {
        families: vec!["Cascade Lake".to_string(), "AMD EPYC Naples".to_string()],
        ..PipelineConfig::default()
    }
}

#[test]
fn keyed_join_keeps_unknown_columns() {
    let keyed_benchmark = assign_identity_columns(&benchmark_table(), "processor");
    let keyed_reference =
        assign_identity_columns(&[reference_row("Intel Xeon Platinum 8280 v2")], "processor");
    let joined = inner_join(&keyed_benchmark, &keyed_reference);
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0]["vendor_notes"], Value::from("as published"));
    // the colliding description column from the right side stays visible
    assert_eq!(
        joined[0]["processor_right"],
        Value::from("Intel Xeon Platinum 8280 v2")
    );
}

#[test]
fn report_covers_overall_and_each_family() {
    let report = family_power_report(&benchmark_table(), &family_tables(), &fixture_config())
        .expect("report");
    assert_eq!(report.len(), 3);

    let overall = &report[0];
    assert_eq!(overall.family, "all");
    assert_eq!(overall.row_count, 3);
    // "2,017" parses once grouping commas are stripped; "HTML" is ignored
    assert_eq!(overall.min_year, Value::Number(2017.0));
    assert_eq!(overall.max_year, Value::Number(2019.0));
    assert_eq!(overall.median_year, Value::Number(2018.0));

    let cascade = &report[1];
    assert_eq!(cascade.family, "Cascade Lake");
    assert_eq!(cascade.row_count, 1);
    let idle = cascade.means[columns::WATTS_PER_THREAD_IDLE].as_number().expect("idle ratio");
    assert!((idle - 0.86).abs() < 1e-9); // 48/56 rounded to 2 places

    let epyc = &report[2];
    assert_eq!(epyc.family, "AMD EPYC Naples");
    assert_eq!(epyc.row_count, 1);
    assert_eq!(epyc.min_year, Value::Missing);
}

#[test]
fn series_index_flows_from_expanded_mapping() {
    let report = family_power_report(&benchmark_table(), &family_tables(), &fixture_config())
        .expect("report");

    let series_rows = vec![
        Row::from_iter([
            ("series".to_string(), Value::from("E2* General-purpose")),
            ("families".to_string(), Value::from("Cascade Lake\nAMD EPYC Naples")),
        ]),
        Row::from_iter([
            ("series".to_string(), Value::from("E2* Shared-core")),
            ("families".to_string(), Value::from("Cascade Lake\nAMD EPYC Naples")),
        ]),
        Row::from_iter([
            ("series".to_string(), Value::from("N2")),
            ("families".to_string(), Value::from("Cascade Lake")),
        ]),
    ];
    let mapping = expand(&series_rows, "series", "families");
    // duplicate category rows collapse: E2 contributes two pairs, N2 one
    assert_eq!(mapping.len(), 3);

    let index = series_power_index(&mapping, &report);
    assert_eq!(index.len(), 2);
    assert_eq!(index[0].series, "E2");
    assert_eq!(index[1].series, "N2");

    // Cascade Lake: 0.86 + 0.4*(6.34-0.86); EPYC: 0.94 + 0.4*(4.69-0.94)
    let cascade_blend = 0.86 + 0.4 * (6.34 - 0.86);
    let epyc_blend = 0.94 + 0.4 * (4.69 - 0.94);
    let e2 = index[0].blended_watts.as_number().expect("E2");
    assert!((e2 - (cascade_blend + epyc_blend) / 2.0).abs() < 1e-9);
    let n2 = index[1].blended_watts.as_number().expect("N2");
    assert!((n2 - cascade_blend).abs() < 1e-9);
}

#[test]
fn pipeline_is_deterministic_across_runs() {
    let first = family_power_report(&benchmark_table(), &family_tables(), &fixture_config())
        .expect("first run");
    let second = family_power_report(&benchmark_table(), &family_tables(), &fixture_config())
        .expect("second run");
    assert_eq!(first, second);
}
