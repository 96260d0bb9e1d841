use safecalc::{history::History, interpreter::value::core::Value};

#[test]
fn entries_pair_expression_with_result() {
    let mut history = History::new(10);
    history.record("3 + 4", &Value::Integer(7));
    history.record("10 / 4", &Value::Real(2.5));

    let entries: Vec<&str> = history.iter().collect();
    assert_eq!(entries, vec!["3 + 4 = 7", "10 / 4 = 2.5"]);
    assert_eq!(history.latest(), Some("10 / 4 = 2.5"));
}

#[test]
fn evicts_oldest_when_full() {
    let mut history = History::new(3);
    for i in 0..5_i64 {
        history.record(&format!("{i} + 0"), &Value::Integer(i));
    }

    assert_eq!(history.len(), 3);
    let entries: Vec<&str> = history.iter().collect();
    assert_eq!(entries, vec!["2 + 0 = 2", "3 + 0 = 3", "4 + 0 = 4"]);
}

#[test]
fn zero_capacity_keeps_nothing() {
    let mut history = History::new(0);
    history.record("1 + 1", &Value::Integer(2));

    assert!(history.is_empty());
    assert_eq!(history.latest(), None);
}
