#![allow(clippy::unwrap_used)]

use super::*;
use crate::expression::BinOp;
use crate::frame::Frame;
use pretty_assertions::assert_eq;

fn var(name: &str) -> Value {
    Value::Var(name.to_owned())
}

#[test]
fn expressions_parenthesise_nested_operations_only() {
    assert_eq!(c_expression(&Value::Int(-3)), "-3");
    assert_eq!(c_expression(&Value::Bool(false)), "false");
    let sum = Value::binary(BinOp::Add, var("a"), Value::Int(1));
    assert_eq!(c_expression(&sum), "a + 1");
    let product = Value::binary(BinOp::Mul, sum.clone(), Value::binary(BinOp::Sub, var("b"), var("c")));
    assert_eq!(c_expression(&product), "(a + 1) * (b - c)");
    assert_eq!(c_expression(&Value::binary(BinOp::Equal, sum, var("d"))), "(a + 1) == d");
}

#[test]
fn blocks_nest_with_indentation() {
    let mut frame = Frame::new();
    let mut backend = CBackend::new(2);
    let labels = frame.enter_loop();
    let otherwise = frame.fresh_label();
    let end = frame.fresh_label();

    backend.begin_while(&Value::Bool(true), labels).unwrap();
    backend.begin_if(&var("done"), otherwise).unwrap();
    backend.emit_break(labels);
    backend.begin_else(otherwise, end);
    backend.emit_assign("i", &Value::binary(BinOp::Add, var("i"), Value::Int(1))).unwrap();
    backend.end_if(end);
    backend.end_while(labels);
    backend.emit_return(&var("i")).unwrap();

    assert_eq!(
        backend.finish(),
        "\
while (true) {
  if (done) {
    break;
  } else {
    i = i + 1;
  }
}
return i;
"
    );
}
