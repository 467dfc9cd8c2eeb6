use super::*;

const FOOTER: &str = "
    </div> <!-- End container -->
</body>
</html>
";

const HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Skool Posts and Comments</title>
    <style>
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.7; margin: 0; padding: 0; background-color: #eef1f5; color: #333; }
        .container { max-width: 900px; margin: 20px auto; padding: 20px; background-color: #fff; box-shadow: 0 0 15px rgba(0,0,0,0.1); border-radius: 8px; }
        h1 { color: #2c3e50; text-align: center; margin-bottom: 30px; }
        .post { background-color: #fff; border: 1px solid #d1d9e0; margin-bottom: 25px; padding: 25px; border-radius: 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.05); }
        .post h2 { color: #3498db; margin-top: 0; margin-bottom: 8px; font-size: 1.8em; }
        .author-date { font-size: 0.95em; color: #7f8c8d; margin-bottom: 15px; border-bottom: 1px solid #ecf0f1; padding-bottom: 10px; }
        .author-date strong { color: #555; }
        .content { margin-bottom: 20px; font-size: 1.05em; color: #4a4a4a; }
        .content br { margin-bottom: 8px; }
        .comments-section { margin-top: 25px; padding-top: 20px; border-top: 2px solid #bdc3c7; }
        .comments-section h3 { margin-top: 0; color: #34495e; font-size: 1.4em; margin-bottom: 15px; }
        .comment { background-color: #f8f9fa; border: 1px solid #e0e6ed; padding: 15px; margin-bottom: 12px; border-radius: 6px; position: relative; }
        .comment.reply { background-color: #e9edf2; }
        .comment .author-date { font-size: 0.9em; margin-bottom: 8px; padding-bottom: 5px; border-bottom-style: dashed; }
        .comment .content { font-size: 1em; }
        .replies { margin-top: 12px; padding-left: 25px; border-left: 3px solid #ced4da; }
    </style>
</head>
<body>
    <div class="container">
    <h1>Skool Posts and Comments</h1>
"#;

pub(crate) fn render_document(posts: &[Post]) -> String {
  let mut html = String::from(HEADER);

  for post in posts {
    tracing::debug!(
      title = post.title(),
      comments = post.comment_count(),
      "rendering post"
    );

    html.push_str(&post.render());
  }

  html.push_str(FOOTER);

  html
}
