/* src/server/core/rust/src/app_config.rs */

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Application-level configuration pushed by the mobile app.
/// Theme objects are forwarded to viewers untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
  pub title: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub theme: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dark_theme: Option<Value>,
  #[serde(default)]
  pub routes: Vec<String>,
  #[serde(default)]
  pub initial_route: String,
  #[serde(default)]
  pub supported_locales: Vec<String>,
  #[serde(default)]
  pub current_locale: String,
}
