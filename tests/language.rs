use std::fs::{self};

use asmexpr::{Options, get_result, interpreter::value::core::Value};
use pretty_assertions::assert_eq;
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

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, &Options::default()) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```asmexpr") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, &Options::default()) {
        panic!("Script failed: {e}\n{src}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, &Options::default()).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

fn last_value(src: &str) -> Option<Value> {
    get_result(src, &Options::default()).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_success("let x = 1 + 2\nassert x === 3");
    assert_success("let x = 7 * 9\nassert x === 63");
    assert_success("let x = 8 - 5\nassert x === 3");
    assert_success("let x = 10 / 3\nassert x === 3");
    assert_success("assert 1.5 * 2 === 3.0");
}

#[test]
fn unsigned_subtraction_goes_negative() {
    assert_eq!(last_value("4 - 42"), Some(Value::SignedInt(-38)));
    assert_success("assert 4 - 42 === -38");
    assert_success("assert 42 - 42 === 0");
}

#[test]
fn integer_arithmetic_wraps() {
    assert_success("assert 0xFFFFFFFFFFFFFFFF + 1 === 0");
    assert_success("assert 0x7FFFFFFFFFFFFFFF * 2 === 0xFFFFFFFFFFFFFFFE");
    assert_eq!(last_value("-0x7FFFFFFFFFFFFFFF - 2"), Some(Value::SignedInt(i64::MAX)));
}

#[test]
fn division_and_remainder() {
    assert_success("assert -7 / 2 === -3");
    assert_success("assert -7 % 2 === -1");
    assert_success("assert 7.5 % 2 === 1.5");
    assert_success("assert 0xFFFFFFFFFFFFFFFF / 2 === 0x7FFFFFFFFFFFFFFF");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("let x = 1 / 0");
    assert_failure("1 % 0");
    assert_failure("1.0 / 0");
    assert_failure("-1 / 0.0");
    assert_failure("-5 % 0");
    assert_failure("5.0 % 0.0");
    assert_failure("-5 / 0");
}

#[test]
fn strings_concatenate_or_parse() {
    assert_success(r#"assert "a" + 1 === "a1""#);
    assert_success(r#"assert 1 + "a" === "1a""#);
    assert_success(r#"assert "x" + 1.5E3 === "x1500.0""#);
    assert_success(r#"assert "2" * 3 === 6.0"#);
    assert_success(r#"assert " 1.5E3 " - 0 === 1500.0"#);
    assert_success(r#"assert -"2.5" === -2.5"#);
    assert_failure(r#""abc" * 2"#);
    assert_failure(r#"1 << "1e""#);
}

#[test]
fn comparisons() {
    assert_success("assert -1 < 0xFFFFFFFFFFFFFFFF");
    assert_success("assert 0xFFFFFFFFFFFFFFFF > 1.0");
    assert_success("assert (2 < 3) === 1");
    assert_success("assert (3 < 2) === 0");
    assert_success("assert 2.0 == 2");
    assert_success(r#"assert "10" < "9""#);
    assert_success(r#"assert "10" == 10"#);
    assert_success("assert 1 != 1.5");
}

#[test]
fn strict_equality_requires_same_kind() {
    assert_success("assert 1 !== 1.0");
    assert_success("assert 1 == 1.0");
    assert_success(r#"assert "1" !== 1"#);
    assert_success("assert (1 === 1) === 1");
}

#[test]
fn shifts_follow_the_left_operand() {
    assert_success("assert 0xFFFFFFFFFFFFFFFF >> 60 === 15");
    assert_success("assert -16 >> 2 === -4");
    assert_success("assert 1 << 64 === 1");
    assert_success("assert 1 << 63 === 0x8000000000000000");
    assert_success("assert 2.9 << 1 === +4");
}

#[test]
fn negative_shift_counts_wrap() {
    assert_success("assert 1 << -1 === 0x8000000000000000");
    assert_success("assert -8 >> -62 === -2");
    assert_success("assert 1 << -64 === 1");
}

#[test]
fn bitwise_operators() {
    assert_success("assert (0xF0 | 0x0F) === 0xFF");
    assert_success("assert (0xFF & 0x0F) === 0x0F");
    assert_success("assert (0xFF ^ 0x0F) === 0xF0");
    assert_success("assert (2.9 | 1) == 3");
    assert_eq!(last_value("-1 & 0xFF"), Some(Value::SignedInt(0xFF)));
}

#[test]
fn logical_operators_return_the_deciding_operand() {
    assert_success(r#"assert (0 || "x") === "x""#);
    assert_success("assert (2 && 3) === 3");
    assert_success("assert (0.0 && 3) === 0.0");
    assert_success("assert (missing || 5) === 5");
    assert_eq!(last_value("missing && 5"), None);
}

#[test]
fn logical_operators_short_circuit() {
    assert_success("assert 1 || 1 / 0");
    assert_eq!(last_value("0 && 1 / 0"), Some(Value::UnsignedInt(0)));
    assert_failure("1 && 1 / 0");
}

#[test]
fn unary_operators() {
    assert_success("assert +0xFFFFFFFFFFFFFFFF === -1");
    assert_success("assert ~0 === 0xFFFFFFFFFFFFFFFF");
    assert_success("assert ~-1 === 0");
    assert_success("assert !0 === 1");
    assert_success(r#"assert !"" === 1"#);
    assert_success("assert !!max === 1");
    assert_success("assert -0x8000000000000000 === -0x8000000000000000");
    assert_failure("-max");
    assert_failure("~str");
}

#[test]
fn conditional_expressions() {
    assert_success("assert (1 ? 2 : 3) === 2");
    assert_success(r#"assert ("" ? 2 : 3) === 3"#);
    assert_success("let x = missing ? 1 : 2\nassert defined(x)");
    assert_eq!(last_value("missing ? 1 : 1 / 0"), None);
}

#[test]
fn undetermined_values_propagate_silently() {
    assert_eq!(last_value("missing + 1"), None);
    assert_eq!(last_value("-missing * 2 < 3"), None);
    assert_failure("assert missing");
    assert_failure("assert missing === missing");
}

#[test]
fn builtin_functions() {
    assert_success("assert max(1, 2, 3) === 3");
    assert_success("assert min(3, -2, 2.5) === -2");
    assert_success("assert str(1.5E3) === \"1500.0\"");
    assert_success("assert str(1e20) === \"1.0E20\"");
    assert_success("assert str(0.3) === \"0.3\"");
    assert_success("assert str(0.7) === \"0.7\"");
    assert_success("assert str(1e-7) === \"1.0E-7\"");
    assert_success("assert len(\"abc\") === 3");
    assert_success("assert defined(str)");
    assert_success("assert !defined(nothing)");
    assert_success("assert !defined(table[1])");
}

#[test]
fn function_values() {
    assert_success("assert max > 0");
    assert_success(r#"assert max > "zzz""#);
    assert_success("assert min != max");
    assert_success("assert min == min");
    assert_success("assert min === min");
    assert_success("assert (min < max) != (max < min)");
    assert_success(r#"assert str(max) === "<function max>""#);
}

#[test]
fn function_errors() {
    assert_failure("max + 1");
    assert_failure(r#""a" + max"#);
    assert_failure("1(2)");
    assert_failure("len()");
    assert_failure("len(1, 2)");
    assert_failure("min()");
}

#[test]
fn origin_moves_the_program_counter() {
    assert_success("assert $ === 0");
    assert_success("org 0x100\nassert $ === 0x100");
    assert_success("org 0x100 + 2\nlet here = $\norg 0\nassert here === 0x102");
    assert_success("org +4\nassert $ === 4");
    assert_failure("org -1");
    assert_failure("org 1.5");
    assert_failure(r#"org "a""#);
    assert_failure("org missing");
}

#[test]
fn symbol_redefinition_is_error() {
    assert_failure("let a = 1\nlet a = 2");
    assert_failure("let str = 1");
    assert_failure("let a = missing\nlet a = 1");
}

#[test]
fn parse_errors() {
    assert_failure("1 +");
    assert_failure("(1");
    assert_failure("let = 2");
    assert_failure("1 2");
    assert_failure("a ? 1");
    assert_failure("@");
    assert_failure("0x10000000000000000");
}

#[test]
fn comments_and_blank_lines() {
    assert_success("; leading comment\n\nlet a = 1 ; trailing comment\n\n\nassert a === 1\n");
}

#[test]
fn options_define_symbols_and_origin() {
    let options = Options { origin:      0x8000,
                            definitions: vec!["base=0x10".to_string(), "name = \"rom\"".to_string()],
                            auto_print:  false, };

    assert_eq!(get_result("$ + base", &options).unwrap(), Some(Value::UnsignedInt(0x8010)));
    assert_eq!(get_result("name + 1", &options).unwrap(), Some(Value::from("rom1")));
}

#[test]
fn malformed_definitions_are_rejected() {
    for definition in ["=1", "x", "x=1 2", "a.b=1", "x=1/0"] {
        let options = Options { definitions: vec![definition.to_string()],
                                ..Options::default() };
        assert!(get_result("1", &options).is_err(), "{definition}");
    }
}
