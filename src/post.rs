use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Post {
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) comments: Vec<Comment>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) content: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) created_at: Option<String>,
  #[serde(default)]
  pub(crate) metadata: Option<PostMetadata>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) title: Option<String>,
  #[serde(
    alias = "author",
    default,
    deserialize_with = "deserialize_null_default"
  )]
  pub(crate) user: User,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct PostMetadata {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) content: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) title: Option<String>,
}

impl Post {
  const DEFAULT_CONTENT: &str = "No Content";

  const DEFAULT_TITLE: &str = "No Title";

  pub(crate) fn comment_count(&self) -> usize {
    self
      .comments
      .iter()
      .map(Comment::count)
      .fold(0, usize::saturating_add)
  }

  pub(crate) fn content(&self) -> &str {
    self
      .metadata
      .as_ref()
      .and_then(|metadata| metadata.content.as_deref())
      .or(self.content.as_deref())
      .unwrap_or(Self::DEFAULT_CONTENT)
  }

  pub(crate) fn render(&self) -> String {
    let mut html = format!(
      "
    <div class=\"post\">
        <h2>{}</h2>
        <p class=\"author-date\"><strong>Posted by:</strong> {} <strong>on:</strong> {}</p>
        <div class=\"content\">{}</div>
",
      escape(self.title()),
      escape(&self.user.display_name()),
      escape(self.created_at.as_deref().unwrap_or(NOT_AVAILABLE)),
      format_content(self.content()),
    );

    if !self.comments.is_empty() {
      html.push_str(
        "
        <div class=\"comments-section\">
            <h3>Comments:</h3>
",
      );

      for comment in &self.comments {
        html.push_str(&comment.render(0));
      }

      html.push_str(
        "
        </div>",
      );
    }

    html.push_str(
      "
    </div>",
    );

    html
  }

  pub(crate) fn title(&self) -> &str {
    self
      .metadata
      .as_ref()
      .and_then(|metadata| metadata.title.as_deref())
      .or(self.title.as_deref())
      .unwrap_or(Self::DEFAULT_TITLE)
  }
}
