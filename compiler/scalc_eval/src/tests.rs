use super::{evaluate, MemoryLoader, RuntimeError, SourceLoader};
use pretty_assertions::assert_eq;
use scalc_ir::{Expr, IntSet, SetFunction};

fn set(values: &[i64]) -> IntSet {
    values.iter().copied().collect()
}

fn loader() -> MemoryLoader {
    MemoryLoader::new()
        .with("a.txt", "1\n2\n3\n4\n")
        .with("b.txt", "2\n3\n4\n5\n")
        .with("c.txt", "3\n4\n6\n")
        .with("empty.txt", "")
        .with("bad.txt", "1\n2\nx\n4\n")
}

fn call(function: SetFunction, sources: &[&str]) -> Expr {
    Expr::call(function, sources.iter().map(|name| Expr::load(*name)).collect())
}

// === Load ===

#[test]
fn load_reads_integers() {
    assert_eq!(
        evaluate(&Expr::load("c.txt"), &loader()).unwrap(),
        set(&[3, 4, 6])
    );
}

#[test]
fn load_collapses_duplicates_and_ignores_surrounding_whitespace() {
    let loader = MemoryLoader::new().with("dup.txt", "7\n 7 \n-2\n\t+7\n");
    assert_eq!(
        evaluate(&Expr::load("dup.txt"), &loader).unwrap(),
        set(&[7, -2])
    );
}

#[test]
fn load_rejects_blank_lines() {
    for contents in ["1\n\n2\n", "1\n \t \n2\n"] {
        let loader = MemoryLoader::new().with("gap.txt", contents);
        let error = evaluate(&Expr::load("gap.txt"), &loader).unwrap_err();
        assert!(
            matches!(error, RuntimeError::InvalidInteger { line_number: 2, .. }),
            "{contents:?}"
        );
    }
}

#[test]
fn final_newline_is_not_a_blank_line() {
    let loader = MemoryLoader::new().with("n.txt", "1\n2\n");
    assert_eq!(
        evaluate(&Expr::load("n.txt"), &loader).unwrap(),
        set(&[1, 2])
    );
}

#[test]
fn malformed_line_is_reported_as_read() {
    let loader = MemoryLoader::new().with("pad.txt", "1\n x \n");
    let error = evaluate(&Expr::load("pad.txt"), &loader).unwrap_err();
    assert_eq!(
        error,
        RuntimeError::InvalidInteger {
            source_name: "pad.txt".to_string(),
            line: " x ".to_string(),
            line_number: 2,
        }
    );
    assert_eq!(
        error.to_string(),
        "invalid integer ' x ' in source 'pad.txt' at line 2"
    );
}

#[test]
fn load_empty_source_is_empty_set() {
    assert_eq!(
        evaluate(&Expr::load("empty.txt"), &loader()).unwrap(),
        IntSet::default()
    );
}

#[test]
fn load_missing_source() {
    assert_eq!(
        evaluate(&Expr::load("missing.txt"), &loader()).unwrap_err(),
        RuntimeError::SourceNotFound {
            source_name: "missing.txt".to_string()
        }
    );
}

#[test]
fn load_malformed_line_reports_content_and_position() {
    let error = evaluate(&Expr::load("bad.txt"), &loader()).unwrap_err();
    assert_eq!(
        error,
        RuntimeError::InvalidInteger {
            source_name: "bad.txt".to_string(),
            line: "x".to_string(),
            line_number: 3,
        }
    );
    assert_eq!(
        error.to_string(),
        "invalid integer 'x' in source 'bad.txt' at line 3"
    );
}

#[test]
fn load_rejects_out_of_range_and_non_decimal() {
    for line in ["9223372036854775808", "1.5", "0x10", "1_000", "1 2"] {
        let loader = MemoryLoader::new().with("n.txt", line);
        assert!(
            matches!(
                evaluate(&Expr::load("n.txt"), &loader),
                Err(RuntimeError::InvalidInteger { .. })
            ),
            "{line}"
        );
    }
}

#[test]
fn load_accepts_integer_extremes() {
    let loader = MemoryLoader::new().with("n.txt", "9223372036854775807\n-9223372036854775808\n");
    assert_eq!(
        evaluate(&Expr::load("n.txt"), &loader).unwrap(),
        set(&[i64::MAX, i64::MIN])
    );
}

// === Call ===

#[test]
fn call_folds_arguments() {
    let loader = loader();
    assert_eq!(
        evaluate(&call(SetFunction::Sum, &["a.txt", "b.txt"]), &loader).unwrap(),
        set(&[1, 2, 3, 4, 5])
    );
    assert_eq!(
        evaluate(&call(SetFunction::Int, &["b.txt", "c.txt"]), &loader).unwrap(),
        set(&[3, 4])
    );
    assert_eq!(
        evaluate(&call(SetFunction::Dif, &["a.txt", "b.txt"]), &loader).unwrap(),
        set(&[1])
    );
}

#[test]
fn nested_calls_evaluate_bottom_up() {
    let expr = Expr::call(
        SetFunction::Sum,
        vec![
            call(SetFunction::Dif, &["a.txt", "b.txt"]),
            call(SetFunction::Int, &["b.txt", "c.txt"]),
        ],
    );
    assert_eq!(evaluate(&expr, &loader()).unwrap(), set(&[1, 3, 4]));
}

#[test]
fn empty_operand_edge_cases() {
    let loader = loader();
    assert_eq!(
        evaluate(&call(SetFunction::Sum, &["a.txt", "empty.txt"]), &loader).unwrap(),
        set(&[1, 2, 3, 4])
    );
    assert_eq!(
        evaluate(&call(SetFunction::Int, &["b.txt", "empty.txt"]), &loader).unwrap(),
        IntSet::default()
    );
    assert_eq!(
        evaluate(&call(SetFunction::Dif, &["c.txt", "empty.txt"]), &loader).unwrap(),
        set(&[3, 4, 6])
    );
}

#[test]
fn first_failing_argument_is_reported() {
    let error = evaluate(
        &call(SetFunction::Sum, &["a.txt", "missing.txt", "bad.txt"]),
        &loader(),
    )
    .unwrap_err();
    assert_eq!(
        error,
        RuntimeError::SourceNotFound {
            source_name: "missing.txt".to_string()
        }
    );

    let error = evaluate(
        &call(SetFunction::Sum, &["bad.txt", "missing.txt"]),
        &loader(),
    )
    .unwrap_err();
    assert!(matches!(error, RuntimeError::InvalidInteger { .. }));
}

/// Records every source name it is asked for.
struct RecordingLoader {
    inner: MemoryLoader,
    requests: std::cell::RefCell<Vec<String>>,
}

impl SourceLoader for RecordingLoader {
    fn load(&self, name: &str) -> Result<super::Lines<'_>, super::LoadError> {
        self.requests.borrow_mut().push(name.to_string());
        self.inner.load(name)
    }
}

#[test]
fn arguments_evaluate_left_to_right_and_stop_at_first_failure() {
    let recorder = RecordingLoader {
        inner: loader(),
        requests: std::cell::RefCell::default(),
    };
    let expr = Expr::call(
        SetFunction::Sum,
        vec![
            call(SetFunction::Int, &["c.txt", "a.txt"]),
            Expr::load("missing.txt"),
            Expr::load("b.txt"),
        ],
    );
    assert!(evaluate(&expr, &recorder).is_err());
    assert_eq!(
        recorder.requests.into_inner(),
        ["c.txt", "a.txt", "missing.txt"]
    );
}

#[test]
fn each_leaf_loads_its_source() {
    let recorder = RecordingLoader {
        inner: loader(),
        requests: std::cell::RefCell::default(),
    };
    let expr = call(SetFunction::Sum, &["a.txt", "a.txt"]);
    assert_eq!(evaluate(&expr, &recorder).unwrap(), set(&[1, 2, 3, 4]));
    assert_eq!(recorder.requests.into_inner(), ["a.txt", "a.txt"]);
}

#[test]
fn deep_nesting_evaluates() {
    let mut expr = Expr::load("c.txt");
    for _ in 0..100_000 {
        expr = Expr::call(SetFunction::Int, vec![expr]);
    }
    assert_eq!(evaluate(&expr, &loader()).unwrap(), set(&[3, 4, 6]));
}
