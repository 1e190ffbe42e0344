/* src/cli/codegen/src/react/routing.rs */

// The routing manifest is a user-editable `App.tsx`. Registration edits it
// textually and never rewrites lines it did not add.

use std::sync::OnceLock;

use regex::Regex;

/// Manifest written when the output directory has none yet.
pub const BASE_APP: &str = "import React from 'react';
import { BrowserRouter as Router, Routes, Route } from 'react-router-dom';
import './App.css';

function App() {
  return (
    <Router>
      <div className=\"flutter-expo-app\">
        <Routes>
          {/* Routes will be auto-generated here */}
        </Routes>
      </div>
    </Router>
  );
}

export default App;
";

const ROUTES_CLOSE: &str = "</Routes>";
const ROUTE_INDENT: &str = "            ";

#[allow(clippy::expect_used)]
fn import_block_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    // First run of consecutive `import ... from ...;` lines
    Regex::new(r"(?:import.*from.*;\n)+").expect("import block pattern is a valid regex")
  })
}

fn import_line(component: &str) -> String {
  format!("import {{ {component} }} from './screens/{component}';\n")
}

fn route_line(component: &str, route: &str) -> String {
  format!("{ROUTE_INDENT}<Route path=\"{route}\" element={{<{component} />}} />\n")
}

/// Add the screen's import and route to `manifest`, skipping each one that
/// is already present.
pub fn register_route(manifest: &str, component: &str, route: &str) -> String {
  let mut out = manifest.to_string();

  let import = import_line(component);
  if !out.contains(&import) {
    let at = import_block_re().find(&out).map_or(0, |m| m.end());
    out.insert_str(at, &import);
  }

  let entry = route_line(component, route);
  if !out.contains(&entry) {
    if let Some(at) = out.find(ROUTES_CLOSE) {
      // Keep the closing tag's own indentation on its line.
      let line_start = out[..at].rfind('\n').map_or(0, |i| i + 1);
      let at = if out[line_start..at].trim().is_empty() { line_start } else { at };
      out.insert_str(at, &entry);
    }
  }

  out
}
