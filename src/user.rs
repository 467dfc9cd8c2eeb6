use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct User {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) first_name: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) last_name: Option<String>,
}

impl User {
  /// First and last name joined by a space and trimmed, so a missing last
  /// name leaves no trailing separator.
  pub(crate) fn display_name(&self) -> String {
    let first = self.first_name.as_deref().unwrap_or(NOT_AVAILABLE);
    let last = self.last_name.as_deref().unwrap_or_default();

    format!("{first} {last}").trim().to_string()
  }
}
