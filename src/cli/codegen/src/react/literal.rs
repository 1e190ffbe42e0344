/* src/cli/codegen/src/react/literal.rs */

use serde_json::Value;

/// JS expression for a JSON value: strings single-quoted, everything else raw JSON.
pub(super) fn js_literal(value: &Value) -> String {
  match value {
    Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
    other => other.to_string(),
  }
}

/// CSS declaration value: strings verbatim, everything else raw JSON.
pub(super) fn css_value(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

/// Double-quoted JSX attribute body.
pub(super) fn attr_escape(s: &str) -> String {
  s.replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn js_literals() {
    assert_eq!(js_literal(&json!("hi")), "'hi'");
    assert_eq!(js_literal(&json!("it's")), "'it\\'s'");
    assert_eq!(js_literal(&json!(0)), "0");
    assert_eq!(js_literal(&json!(true)), "true");
    assert_eq!(js_literal(&json!(null)), "null");
    assert_eq!(js_literal(&json!([1, 2])), "[1,2]");
  }

  #[test]
  fn css_values() {
    assert_eq!(css_value(&json!("#fff")), "#fff");
    assert_eq!(css_value(&json!(16)), "16");
  }

  #[test]
  fn attr_quotes() {
    assert_eq!(attr_escape(r#"say "hi""#), "say &quot;hi&quot;");
  }
}
