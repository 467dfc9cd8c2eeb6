use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct Comment {
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) children: Vec<Comment>,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) post: CommentPost,
}

/// The scraper nests a comment's own fields one level down under `post`.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct CommentPost {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) created_at: Option<String>,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) metadata: CommentMetadata,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) user: User,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct CommentMetadata {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) content: Option<String>,
}

impl Comment {
  const DEFAULT_CONTENT: &str = "No content";

  const INDENT_STEP: usize = 20;

  /// Number of comments in the subtree rooted at this node.
  pub(crate) fn count(&self) -> usize {
    self
      .children
      .iter()
      .map(Self::count)
      .fold(1, usize::saturating_add)
  }

  pub(crate) fn indent(depth: usize) -> usize {
    depth.saturating_mul(Self::INDENT_STEP)
  }

  pub(crate) fn render(&self, depth: usize) -> String {
    let mut html = String::new();
    self.render_into(&mut html, depth);
    html
  }

  fn render_into(&self, html: &mut String, depth: usize) {
    let CommentPost {
      created_at,
      metadata,
      user,
    } = &self.post;

    let author = user.display_name();

    let date = created_at.as_deref().unwrap_or(NOT_AVAILABLE);

    let content = format_content(
      metadata.content.as_deref().unwrap_or(Self::DEFAULT_CONTENT),
    );

    if depth == 0 {
      html.push_str("\n    <div class=\"comment\">");
    } else {
      html.push_str(&format!(
        "\n    <div class=\"comment reply\" style=\"margin-left: {}px;\">",
        Self::indent(depth)
      ));
    }

    html.push_str(&format!(
      "\n        <p class=\"author-date\"><strong>Comment by:</strong> {} <strong>on:</strong> {}</p>",
      escape(&author),
      escape(date)
    ));

    html.push_str(&format!(
      "\n        <div class=\"content\">{content}</div>\n"
    ));

    if !self.children.is_empty() {
      html.push_str("<div class=\"replies\">");

      for child in &self.children {
        child.render_into(html, depth.saturating_add(1));
      }

      html.push_str("</div>");
    }

    html.push_str("</div>");
  }
}
