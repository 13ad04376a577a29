use pretty_assertions::assert_eq;
use semicalc::{EvalError, evaluate};

fn assert_value(src: &str, expected: i64) {
    assert_eq!(evaluate(src), Ok(expected), "input: {src:?}");
}

fn assert_error(src: &str, expected: EvalError) {
    assert_eq!(evaluate(src), Err(expected), "input: {src:?}");
}

#[test]
fn signed_literals_round_trip() {
    assert_value("0;", 0);
    assert_value("42;", 42);
    assert_value("-17;", -17);
    assert_value("+8;", 8);
    assert_value("  -17  ;", -17);
    assert_value("9223372036854775807;", i64::MAX);
}

#[test]
fn additive_fold_is_left_associative() {
    assert_value("10-3-2;", 5);
    assert_value("1+2+3+4;", 10);
    assert_value("1-2+3;", 2);
}

#[test]
fn multiplicative_fold_is_left_associative() {
    assert_value("100/10/2;", 5);
    assert_value("2*3*4;", 24);
    assert_value("24/2*3;", 36);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7/2;", 3);
    assert_value("-7/2;", -3);
    assert_value("7/-2;", -3);
    assert_value("-7/-2;", 3);
}

#[test]
fn division_by_zero_aborts_the_whole_evaluation() {
    assert_error("5/0;", EvalError::DivisionByZero);
    assert_error("1 + (5/0) * 3;", EvalError::DivisionByZero);
    assert_error("(2+3)/(1-1);", EvalError::DivisionByZero);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2^3^2;", 512);
    assert_value("2^10;", 1024);
    assert_value("2 ^ 3;", 8);
    assert_value("5^0;", 1);
    assert_value("0^0;", 1);
}

#[test]
fn exponent_sign_and_range_are_checked() {
    assert_error("2^-1;", EvalError::Exponentiation);
    assert_error("2^63;", EvalError::Exponentiation);
    assert_error("10^19;", EvalError::Exponentiation);
    assert_error("2^4294967296;", EvalError::Exponentiation);
    assert_value("2^62;", 4_611_686_018_427_387_904);
    assert_value("(-2)^63;", i64::MIN);
}

#[test]
fn literal_sign_binds_tighter_than_exponentiation() {
    // The sign belongs to the literal, so -2^2 is (-2)^2, not -(2^2).
    assert_value("-2^2;", 4);
    assert_value("(-2)^2;", 4);
}

#[test]
fn comparisons_chain_left_to_right() {
    assert_value("1<2;", 1);
    assert_value("2<1;", 0);
    assert_value("1<2==1;", 1);
    assert_value("3<2==1;", 0);
    assert_value("2<=2;", 1);
    assert_value("3>=4;", 0);
    assert_value("5!=5;", 0);
    assert_value("5==5;", 1);
}

#[test]
fn comparisons_bind_tighter_than_arithmetic() {
    assert_value("2*3<7;", 2);
    assert_value("1+2<3;", 2);
    assert_value("6/3>1;", 6);
}

#[test]
fn mixed_precedence_expressions() {
    assert_value("1+2*3;", 7);
    assert_value("(1+2)*3;", 9);
    assert_value("2*(3+4)-5;", 9);
    assert_value("((1));", 1);
}

#[test]
fn missing_semicolon_is_its_own_kind() {
    assert_error("1+2", EvalError::MissingSemicolon);
    assert_error("42", EvalError::MissingSemicolon);
    assert_error("1 2;", EvalError::MissingSemicolon);
}

#[test]
fn unmatched_parenthesis_is_its_own_kind() {
    assert_error("(1+2;", EvalError::MissingClosingParenthesis);
    assert_error("((1+2);", EvalError::MissingClosingParenthesis);
}

#[test]
fn trailing_characters_after_semicolon() {
    assert_error("1+2; 3", EvalError::TrailingCharacters);
    assert_error("1+2;;", EvalError::TrailingCharacters);
    assert_value("1+2;   ", 3);
}

#[test]
fn whitespace_is_insignificant_outside_literal_signs() {
    assert_value("1 + 2 ;", 3);
    assert_value(" ( 1 + 2 ) * 3 ; ", 9);
    assert_value("5- -3;", 8);
    assert_value("5--3;", 8);
    assert_error("+ 1;", EvalError::Syntax);
    assert_error("- 1;", EvalError::Syntax);
}

#[test]
fn unparsable_input_is_a_generic_syntax_error() {
    assert_error("", EvalError::Syntax);
    assert_error(";", EvalError::Syntax);
    assert_error("();", EvalError::Syntax);
    assert_error("abc;", EvalError::Syntax);
    assert_error("1+;", EvalError::Syntax);
    assert_error("--3;", EvalError::Syntax);
    assert_error("9223372036854775808;", EvalError::Syntax);
}

#[test]
fn lone_equals_or_bang_is_an_invalid_comparison_operator() {
    assert_error("1 = 2;", EvalError::InvalidComparisonOperator);
    assert_error("1 ! 2;", EvalError::InvalidComparisonOperator);
}

#[test]
fn nesting_depth_is_limited() {
    let nested = format!("{}1{};", "(".repeat(500), ")".repeat(500));
    assert_error(&nested, EvalError::Syntax);

    let shallow = format!("{}1{};", "(".repeat(50), ")".repeat(50));
    assert_value(&shallow, 1);
}

#[test]
fn evaluation_is_idempotent() {
    for src in ["2^3^2;", "5/0;", "1<2==1;", "(1+2;"] {
        assert_eq!(evaluate(src), evaluate(src), "input: {src:?}");
    }
}
