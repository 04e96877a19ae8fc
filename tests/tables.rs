mod common;

use zawgyi_fixup::zawgyi::{classify, decompose};

#[test]
fn test_classify_table() {
    let records = common::read_records("tests/data/classify.txt");
    assert_eq!(0xA0 + 4, records.len());

    for record in records {
        let code_points = common::parse_code_points(&record.input);
        assert_eq!(1, code_points.len(), "line {}", record.line);
        assert_eq!(
            record.expected,
            format!("{:?}", classify(code_points[0])),
            "line {}",
            record.line
        );
    }
}

#[test]
fn test_decompose_table() {
    let cases = common::read_cases("tests/data/decompose.txt");
    assert_eq!(42 + 5, cases.len());

    for case in cases {
        assert_eq!(1, case.input.len(), "line {}", case.line);
        assert_eq!(
            common::to_hex(&case.expected),
            common::to_hex(&decompose(case.input[0])),
            "line {}",
            case.line
        );
    }
}
