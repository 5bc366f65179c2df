use std::fs::{self};

use maano::{interpreter::evaluator::while_loop::MAX_LOOP_ITERATIONS, run};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expected)) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            match run(&code) {
                Ok(output) => {
                    if let Some(expected) = expected {
                        assert_eq!(output,
                                   expected.trim_end(),
                                   "Example {} in {:?} printed the wrong output:\n{}",
                                   i + 1,
                                   path,
                                   code);
                    }
                },
                Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 code,
                                 e),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Collects every ```maano block, paired with the ```output block that
/// directly follows it, if any.
fn extract_examples(content: &str) -> Vec<(String, Option<String>)> {
    let mut blocks: Vec<(String, String)> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if let Some((lang, buf)) = current.take() {
            if trimmed.starts_with("```") {
                blocks.push((lang, buf));
            } else {
                current = Some((lang, buf + line + "\n"));
            }
            continue;
        }
        if let Some(lang) = trimmed.strip_prefix("```") {
            current = Some((lang.trim().to_string(), String::new()));
        }
    }

    let mut examples = Vec::new();
    let mut iter = blocks.into_iter().peekable();
    while let Some((lang, code)) = iter.next() {
        if lang != "maano" {
            continue;
        }
        let expected = iter.next_if(|(lang, _)| lang == "output").map(|(_, out)| out);
        examples.push((code, expected));
    }

    examples
}

fn assert_output(src: &str, expected: &str) {
    match run(src) {
        Ok(output) => assert_eq!(output, expected, "Unexpected output for script:\n{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn declaration_and_print() {
    assert_output("maano x = 5\nlikho x", "5");
    assert_output(r#"likho "hello world""#, "hello world");
    assert_output("maano x = 5 maano y = 10 maano sum = x + y likho sum", "15");
}

#[test]
fn assignment_rebinds_and_creates() {
    assert_output("maano x = 1\nx = x + 1\nlikho x", "2");
    assert_output("a = 3 likho a", "3");
}

#[test]
fn arithmetic_folds_left_to_right() {
    assert_output("maano r = 2 + 3 * 4 likho r", "20");
    assert_output("maano r = 10 - 2 - 3 likho r", "5");
    assert_output("maano r = 20 / 2 / 5 likho r", "2");
    assert_output("maano r = 7 / 2 likho r", "3.5");
    assert_output("maano r = 2 * 3 + 1 likho r", "7");
}

#[test]
fn leading_minus_starts_from_zero() {
    assert_output("maano r = -5 likho r", "-5");
    assert_output("maano r = - 5 + 2 likho r", "-3");
}

#[test]
fn unbound_identifiers_evaluate_to_their_name() {
    assert_output("likho naam", "naam");
    assert_output("maano y = z + 1 likho y", "z1");
    assert_output("maano s = hello likho s", "hello");
}

#[test]
fn while_loop_counts() {
    assert_output("maano a=0\njabtak a < 3 { likho a  a = a + 1 }", "0\n1\n2");
    assert_output("maano a = 5 jabtak a < 3 { likho a }", "");
}

#[test]
fn runaway_loop_stops_at_the_cap() {
    let output = run(r#"jabtak 1 < 2 { likho "x" }"#).unwrap();
    assert_eq!(output.lines().count(), MAX_LOOP_ITERATIONS);
    assert!(output.lines().all(|l| l == "x"));

    assert_output("maano n = 0 jabtak n >= 0 { n = n + 1 } likho n", "1000");
}

#[test]
fn conditional_branches() {
    assert_output(r#"agar 1 < 2 { likho "yes" } warna { likho "no" }"#, "yes");
    assert_output(r#"agar 2 < 1 { likho "yes" } warna { likho "no" }"#, "no");
    assert_output(r#"agar 2 < 1 { likho "yes" }"#, "");
    assert_output(r#"maano a = 3 agar a == 3 { likho "eq" }"#, "eq");
    assert_output(r#"maano a = 3 agar a != 3 { likho "ne" } warna { likho "same" }"#, "same");
    assert_output(r#"agar 3 >= 3 { likho "ge" } agar 3 <= 2 { likho "le" }"#, "ge");
}

#[test]
fn text_comparisons() {
    assert_output(r#"agar abc < abd { likho "less" }"#, "less");
    assert_output(r#"agar abc == 1 { likho "eq" } warna { likho "mixed" }"#, "mixed");
}

#[test]
fn nested_blocks() {
    assert_output(r#"
        maano i = 0
        jabtak i < 4 {
            agar i < 2 { likho "small" } warna { likho i }
            i = i + 1
        }
    "#,
                  "small\nsmall\n2\n3");
}

#[test]
fn lenient_input_is_ignored() {
    assert_output(r#"x likho "ok""#, "ok");
    assert_output("maano x = 5; likho x", "5");
    assert_output(r#"likho "unterminated"#, "unterminated");
    assert_output(r#"likho "padded   ""#, "padded");
}

#[test]
fn every_run_starts_fresh() {
    assert_output("maano x = 1", "");
    assert_output("likho x", "x");
}

#[test]
fn division_by_zero_follows_floating_point() {
    assert_output("maano x = 1 / 0 likho x", "Infinity");
    assert_output("maano x = 0 - 1 / 0 likho x", "-Infinity");
    assert_output("maano x = 0 / 0 likho x", "NaN");
}

#[test]
fn long_number_literals_are_numbers() {
    assert_output("maano x = 99999999999999999999 likho x", "100000000000000000000");
    assert_output(r#"agar 99999999999999999999 > 5 { likho "big" } likho "after""#,
                  "big\nafter");
}

#[test]
fn literals_round_the_same_in_conditions_and_expressions() {
    assert_output("maano x = 9007199254740993 likho x", "9007199254740992");
    assert_output(r#"agar 9007199254740993 > 5 { likho "big" }"#, "big");
    assert_output(r#"agar 9007199254740993 == 9007199254740992 { likho "same" }"#, "same");
}

#[test]
fn arithmetic_on_text_is_error() {
    assert_failure("maano t = hello * 2");
    assert_failure("maano t = hello - 2");
}

#[test]
fn unknown_comparator_is_error() {
    assert_failure(r#"agar 1 + 2 { likho "x" }"#);
}

#[test]
fn truncated_programs_are_errors() {
    assert_failure("maano x");
    assert_failure("likho");
    assert_failure("agar 1 <");
    assert_failure("agar 1 < 2 { likho 1");
    assert_failure("jabtak a < 3 { likho a");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.maano").unwrap();
    assert_output(&contents, "1\n1\n2\n1\n2\n3\ndone");
}
