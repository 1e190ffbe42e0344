/* src/cli/codegen/src/naming.rs */

/// Suffix appended to every generated screen component.
pub const COMPONENT_SUFFIX: &str = "Screen";

/// Prefix of every generated CSS class.
pub const CLASS_PREFIX: &str = "flutter-";

/// `home_screen` -> `HomeScreenScreen`
pub fn component_name(screen_id: &str) -> String {
  let mut name: String = screen_id.split('_').map(capitalize).collect();
  name.push_str(COMPONENT_SUFFIX);
  name
}

/// `AppBar` -> `flutter-app-bar`
pub fn css_class(name: &str) -> String {
  format!("{CLASS_PREFIX}{}", to_kebab_case(name))
}

pub fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Dash before every ASCII capital, lowercase all, no leading dash.
pub fn to_kebab_case(s: &str) -> String {
  let mut out = String::with_capacity(s.len() + 4);
  for ch in s.chars() {
    if ch.is_ascii_uppercase() {
      out.push('-');
    }
    out.extend(ch.to_lowercase());
  }
  if out.starts_with('-') {
    out.remove(0);
  }
  out
}

/// `font-size` -> `fontSize`; only a dash followed by a lowercase letter folds.
pub fn to_camel_case(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut chars = s.chars().peekable();
  while let Some(ch) = chars.next() {
    if ch == '-' {
      if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
        out.push(next.to_ascii_uppercase());
        chars.next();
        continue;
      }
    }
    out.push(ch);
  }
  out
}
