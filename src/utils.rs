use {super::*, std::borrow::Cow};

const LINE_BREAK: &str = "<br>\n";

pub(crate) fn deserialize_null_default<'de, D, T>(
  deserializer: D,
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s)),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

/// Escapes `&`, `<`, `>` and both quote characters.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
  html_escape::encode_quoted_attribute(text)
}

/// Escapes `text` and turns every newline into a `<br>` followed by a newline.
///
/// Empty input yields an empty string with no markup at all.
pub(crate) fn format_content(text: &str) -> String {
  if text.is_empty() {
    return String::new();
  }

  escape(text).replace('\n', LINE_BREAK)
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct OptionalWrapper {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    value: Option<String>,
  }

  #[derive(Deserialize, Debug, PartialEq)]
  struct DefaultWrapper {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    values: Vec<u32>,
  }

  fn parse_value(input: &str) -> Result<Option<String>, serde_json::Error> {
    serde_json::from_str::<OptionalWrapper>(input).map(|wrapper| wrapper.value)
  }

  fn parse_values(input: &str) -> Result<Vec<u32>, serde_json::Error> {
    serde_json::from_str::<DefaultWrapper>(input).map(|wrapper| wrapper.values)
  }

  #[test]
  fn deserialize_null_default_handles_missing_null_and_present() {
    assert_eq!(parse_values("{}").unwrap(), Vec::<u32>::new());
    assert_eq!(parse_values(r#"{"values": null}"#).unwrap(), Vec::<u32>::new());
    assert_eq!(parse_values(r#"{"values": [1, 2]}"#).unwrap(), vec![1, 2]);
    assert!(parse_values(r#"{"values": "nope"}"#).is_err());
  }

  #[test]
  fn deserialize_optional_string_supports_string_numbers_and_null() {
    assert_eq!(
      parse_value(r#"{"value": "hello"}"#).unwrap(),
      Some("hello".to_string())
    );

    assert_eq!(
      parse_value(r#"{"value": 42}"#).unwrap(),
      Some("42".to_string())
    );

    assert_eq!(parse_value(r#"{"value": null}"#).unwrap(), None);

    assert_eq!(parse_value("{}").unwrap(), None);

    assert!(
      parse_value(r#"{"value": true}"#).is_err(),
      "bools should fail deserialization"
    );

    assert!(parse_value(r#"{"value": {}}"#).is_err());
  }

  #[test]
  fn escape_handles_markup_and_quotes() {
    let escaped = escape(r#"<a href="x">Tom & 'Jerry'</a>"#);

    assert!(escaped.contains("&lt;a href="));
    assert!(escaped.contains("&amp;"));
    assert!(escaped.contains("&gt;"));
    assert!(!escaped.contains('"'));
    assert!(!escaped.contains('\''));
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
  }

  #[test]
  fn escape_leaves_plain_text_alone() {
    assert_eq!(escape("Ünïcödé text 🎉"), "Ünïcödé text 🎉");
  }

  #[test]
  fn format_content_empty_input_has_no_markup() {
    assert_eq!(format_content(""), "");
  }

  #[test]
  fn format_content_converts_newlines() {
    assert_eq!(format_content("Line1\nLine2"), "Line1<br>\nLine2");
  }

  #[test]
  fn format_content_inserts_one_break_per_newline() {
    let text = "a\n\nb\nc\n";

    let formatted = format_content(text);

    assert_eq!(formatted.matches("<br>\n").count(), 4);
    assert_eq!(formatted.matches('\n').count(), 4);
  }

  #[test]
  fn format_content_escapes_before_inserting_breaks() {
    let formatted = format_content("<b>bold</b> & more\n<br>");

    assert_eq!(
      formatted,
      "&lt;b&gt;bold&lt;/b&gt; &amp; more<br>\n&lt;br&gt;"
    );

    let without_breaks = formatted.replace("<br>", "");

    assert!(!without_breaks.contains('<'));
    assert!(!without_breaks.contains('>'));
    assert!(
      !without_breaks
        .replace("&amp;", "")
        .replace("&lt;", "")
        .replace("&gt;", "")
        .contains('&')
    );
  }
}
