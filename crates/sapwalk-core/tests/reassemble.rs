use sapwalk_core::walk::reassemble::Reassembler;
use sapwalk_core::WalkRecord;

fn feed(lines: &[&str]) -> Vec<WalkRecord> {
    let mut walk = Reassembler::new();
    let mut out = Vec::new();
    for line in lines {
        if let Some(rec) = walk.push_line(line.as_bytes()) {
            out.push(rec);
        }
    }
    if let Some(rec) = walk.finish() {
        out.push(rec);
    }
    out
}

#[test]
fn start_line_supersedes_open_record() {
    let recs = feed(&[
        ".1.3.6.1.2.1.1.1.0 = STRING: \"hello\"",
        ".1.3.6.1.2.1.1.2.0 = OID: .1.3.6.1.4.1.8072",
    ]);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].oid, b".1.3.6.1.2.1.1.1.0");
    assert_eq!(recs[0].tag, b"STRING");
    assert_eq!(recs[0].value, b"\"hello\"");
    assert_eq!(recs[1].tag, b"OID");
}

#[test]
fn continuation_lines_rejoin_the_open_record() {
    let recs = feed(&[".1.0 = STRING: \"a", "b", "c\"", ".2.0 = INTEGER: 1"]);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].value, b"\"a\nb\nc\"");
}

#[test]
fn untyped_lines_infer_integer_or_string() {
    let recs = feed(&[".1.0 = 42", ".2.0 = hello", ".3.0 = 0x1F"]);
    assert_eq!(recs[0].tag, b"INTEGER");
    assert_eq!(recs[1].tag, b"STRING");
    assert_eq!(recs[2].tag, b"INTEGER");
}

#[test]
fn untyped_inference_rejects_non_literals() {
    for v in ["", "4 2", "0x", "12abc", "1.5", "-"] {
        let line = format!(".1.0 = {v}");
        let recs = feed(&[&line, ".2.0 = 1"]);
        assert_eq!(recs[0].tag, b"STRING", "value {v:?}");
    }
}

#[test]
fn typed_pattern_wins_over_untyped() {
    // Satisfies both start forms; the `: ` split must be honored.
    let recs = feed(&[".1.0 = Gauge32: 100", ".2.0 = 1"]);
    assert_eq!(recs[0].tag, b"Gauge32");
    assert_eq!(recs[0].value, b"100");
}

#[test]
fn noise_line_leaves_the_open_record_alone() {
    let recs = feed(&[
        ".1.0 = STRING: \"a",
        "No more variables left in this MIB View (It is past the end of the MIB tree)",
        "b\"",
    ]);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].value, b"\"a\nb\"");
}

#[test]
fn continuations_before_any_record_are_dropped() {
    let recs = feed(&["garbage header", "more garbage", ".1.0 = INTEGER: 5"]);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].oid, b".1.0");
    assert_eq!(recs[0].value, b"5");
}

#[test]
fn open_record_with_empty_value_is_dropped_at_eof() {
    let recs = feed(&[".1.0 = STRING: "]);
    assert!(recs.is_empty());
}

#[test]
fn open_record_with_value_is_emitted_at_eof() {
    let recs = feed(&[".1.0 = STRING: \"hello\""]);
    assert_eq!(recs.len(), 1);
}

#[test]
fn lines_without_a_leading_dot_are_continuations() {
    let recs = feed(&[".1.0 = STRING: \"a", "1.2.0 = INTEGER: 5"]);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].value, b"\"a\n1.2.0 = INTEGER: 5");
}
