//! End-to-end behaviour across core and operators.

use std::sync::Arc;

use colframe::{
    group_by, AggKind, Column, Describe, EngineConfig, Error, Filter, Head, Operator, Renderer,
    Scalar, SortByColumn, SortByIndex, Table,
};

fn sample() -> Table {
    Table::from_columns([
        ("A", Column::from(vec![1i64, 2, 3, 4, 5])),
        ("B", Column::from(vec![0.5, -1.0, 2.25, f64::NAN, -1.0])),
        ("C", Column::from(vec![true, false, true, false, true])),
    ])
    .unwrap()
}

#[test]
fn group_sum_in_encounter_order() {
    let t = Arc::new(sample());
    let out = group_by(&t, &["C"]).unwrap().aggregate("A", AggKind::Sum).unwrap();
    assert_eq!(out.row(0), Some(vec![Scalar::Boolean(true), Scalar::Int64(9)]));
    assert_eq!(out.row(1), Some(vec![Scalar::Boolean(false), Scalar::Int64(6)]));
}

#[test]
fn every_aggregation_kind_has_its_output_type() {
    let t = Arc::new(sample());
    let g = group_by(&t, &["C"]).unwrap();
    for kind in AggKind::ALL {
        for (col, _) in t.iter() {
            let out = g.aggregate(col, kind).unwrap();
            let input = t.column(col).unwrap().data_type();
            let name = if col == "C" { format!("C_{kind}") } else { col.to_string() };
            assert_eq!(
                out.column(&name).map(Column::data_type),
                Some(kind.output_type(input)),
                "{kind} over {col}"
            );
            assert_eq!(out.num_rows(), 2);
        }
    }
}

#[test]
fn sort_then_undo_with_index_order() {
    let t = sample();
    let sorted = SortByColumn::new("B", true).run(&t).unwrap();
    assert_eq!(sorted.column("A"), Some(&Column::Int64(vec![2, 5, 1, 3, 4])));
    let desc = SortByColumn::new("B", false).run(&t).unwrap();
    assert_eq!(desc.column("A"), Some(&Column::Int64(vec![4, 3, 1, 2, 5])));

    let reversed = SortByIndex { ascending: false }.run(&sorted).unwrap();
    assert_eq!(reversed.column("A"), Some(&Column::Int64(vec![4, 3, 1, 5, 2])));
    assert_eq!(t.column("A"), Some(&Column::Int64(vec![1, 2, 3, 4, 5])));
}

#[test]
fn filter_then_describe_then_render() {
    let t = sample();
    let kept = Filter::new("C").run(&t).unwrap();
    assert_eq!(kept.shape(), (3, 3));

    let stats = Describe.run(&kept).unwrap();
    assert_eq!(stats.shape(), (8, 3));
    assert_eq!(
        stats.column("A").and_then(Column::as_f64).map(|s| s[1]),
        Some(3.0)
    );

    let text = Renderer::default().render(&Head { n: 2 }.run(&kept).unwrap());
    assert_eq!(text, "A\tB\tC\n1\t0.5\ttrue\n3\t2.25\ttrue");
}

#[test]
fn schema_errors_leave_table_untouched() {
    let mut t = sample();
    assert!(matches!(
        t.add_column("A", Column::from(vec![0i64; 5])),
        Err(Error::Schema(_))
    ));
    assert!(matches!(
        t.add_column("D", Column::from(vec![0i64; 4])),
        Err(Error::Schema(_))
    ));
    assert_eq!(t.shape(), (5, 3));
    assert_eq!(t.column_names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
}

#[test]
fn config_serialises_through_json() {
    let cfg = EngineConfig {
        render_max_rows: Some(10),
        ..EngineConfig::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(EngineConfig::from_json(&json).unwrap(), cfg);
    let r = Renderer::from_config(&cfg);
    assert_eq!(r.max_rows, Some(10));
}
