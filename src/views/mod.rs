//! Server-side page rendering.
//!
//! One function per view; each takes the typed page data, the accumulated
//! error list, and the request language, and returns the finished HTML.
//! All user-provided strings pass through [`escape`] before they reach the
//! page; strings from the translation tables are trusted.

use axum::response::Html;

use crate::domain::{CommentView, PostDetail, PostListItem};
use crate::i18n::{translate, Lang};

/// Escape a user-provided string for embedding in HTML.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page chrome: header, navigation, language switcher, error list.
fn layout(lang: Lang, current_user: Option<&str>, title: &str, errors: &[String], body: &str) -> Html<String> {
    let t = |key| translate(lang, key);

    let nav = match current_user {
        Some(name) => format!(
            r#"<span>{} {}</span> <a href="/post/create">{}</a> <a href="/logout">{}</a>"#,
            t("welcome"),
            escape(name),
            t("nav_create"),
            t("nav_logout"),
        ),
        None => format!(
            r#"<a href="/login">{}</a> <a href="/register">{}</a>"#,
            t("nav_login"),
            t("nav_register"),
        ),
    };

    let mut error_block = String::new();
    if !errors.is_empty() {
        error_block.push_str(r#"<ul class="errors">"#);
        for error in errors {
            error_block.push_str(&format!("<li>{}</li>", escape(error)));
        }
        error_block.push_str("</ul>");
    }

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="{lang_code}">
<head>
<meta charset="utf-8">
<title>{title} - {blog_title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header>
<a class="brand" href="/">{blog_title}</a>
<nav>{nav}</nav>
<div class="lang"><a href="/language?code=de">de</a> | <a href="/language?code=en">en</a></div>
</header>
<main>
{error_block}
{body}
</main>
</body>
</html>"#,
        lang_code = lang.code(),
        blog_title = t("blog_title"),
        title = title,
        nav = nav,
        error_block = error_block,
        body = body,
    ))
}

/// Home page: post overview, newest first.
pub fn home(
    lang: Lang,
    current_user: Option<&str>,
    posts: &[PostListItem],
    errors: &[String],
) -> Html<String> {
    let t = |key| translate(lang, key);

    let mut body = format!("<h1>{}</h1>", t("latest_posts"));

    if posts.is_empty() {
        body.push_str(&format!("<p>{}</p>", t("no_posts")));
    }

    for post in posts {
        let image = match &post.image_url {
            Some(url) => format!(
                r#"<img src="/{}" alt="{}">"#,
                escape(url),
                t("alt_image")
            ),
            None => format!(r#"<div class="no-image">{}</div>"#, t("placeholder_no_image")),
        };

        body.push_str(&format!(
            r#"<article>
{image}
<h2>{title}</h2>
<p class="meta">{from} {author} {at} {date}</p>
<p>{preview}</p>
<a href="/post/show?id={id}">{read_more}</a>
</article>"#,
            image = image,
            title = escape(&post.title),
            from = t("from"),
            author = escape(&post.author),
            at = t("at"),
            date = post.display_date,
            preview = escape(&post.preview),
            id = post.id,
            read_more = t("read_more"),
        ));
    }

    layout(lang, current_user, t("latest_posts"), errors, &body)
}

/// Login form.
pub fn login(lang: Lang, current_user: Option<&str>, errors: &[String]) -> Html<String> {
    let t = |key| translate(lang, key);

    let body = format!(
        r#"<h1>{heading}</h1>
<form method="post" action="/login">
<label>{label_username}</label>
<input type="text" name="username" required>
<label>{label_password}</label>
<input type="password" name="password" required>
<button type="submit">{btn}</button>
</form>
<p>{no_account} <a href="/register">{register_here}</a></p>"#,
        heading = t("heading_login"),
        label_username = t("label_username"),
        label_password = t("label_password"),
        btn = t("btn_login"),
        no_account = t("text_no_account"),
        register_here = t("link_register_here"),
    );

    layout(lang, current_user, t("heading_login"), errors, &body)
}

/// Registration form.
pub fn register(lang: Lang, current_user: Option<&str>, errors: &[String]) -> Html<String> {
    let t = |key| translate(lang, key);

    let body = format!(
        r#"<h1>{heading}</h1>
<form method="post" action="/register">
<label>{label_username}</label>
<input type="text" name="username" required>
<label>{label_password}</label>
<input type="password" name="password" required>
<label>{label_repeat}</label>
<input type="password" name="password_repeat" required>
<button type="submit">{btn}</button>
</form>
<p>{have_account} <a href="/login">{login_here}</a></p>
<p><a href="/">{cancel}</a></p>"#,
        heading = t("heading_register"),
        label_username = t("label_username"),
        label_password = t("label_password"),
        label_repeat = t("label_password_repeat"),
        btn = t("btn_register"),
        have_account = t("text_have_account"),
        login_here = t("link_login_here"),
        cancel = t("link_cancel_home"),
    );

    layout(lang, current_user, t("heading_register"), errors, &body)
}

/// Post creation form.
pub fn create_post(lang: Lang, current_user: Option<&str>, errors: &[String]) -> Html<String> {
    let t = |key| translate(lang, key);

    let body = format!(
        r#"<h1>{heading}</h1>
<form method="post" action="/post/create" enctype="multipart/form-data">
<label>{label_title}</label>
<input type="text" name="title" placeholder="{ph_title}">
<label>{label_content}</label>
<textarea name="content" placeholder="{ph_content}"></textarea>
<label>{label_image}</label>
<input type="file" name="image" accept="image/*">
<button type="submit">{btn}</button>
</form>
<p><a href="/">{back}</a></p>"#,
        heading = t("create_heading"),
        label_title = t("label_title"),
        ph_title = t("ph_title"),
        label_content = t("label_content"),
        ph_content = t("ph_content"),
        label_image = t("label_image"),
        btn = t("btn_publish"),
        back = t("back_home"),
    );

    layout(lang, current_user, t("create_heading"), errors, &body)
}

/// Post detail page with its comment thread.
pub fn show_post(
    lang: Lang,
    current_user: Option<&str>,
    post: &PostDetail,
    comments: &[CommentView],
    errors: &[String],
) -> Html<String> {
    let t = |key| translate(lang, key);

    let image = match &post.image_url {
        Some(url) => format!(r#"<img src="/{}" alt="{}">"#, escape(url), t("alt_image")),
        None => String::new(),
    };

    let comment_form = match current_user {
        Some(_) => format!(
            r#"<form method="post" action="/comment/add">
<input type="hidden" name="post_id" value="{id}">
<label>{label}</label>
<textarea name="content" placeholder="{ph}"></textarea>
<button type="submit">{btn}</button>
</form>"#,
            id = post.id,
            label = t("label_your_comment"),
            ph = t("ph_comment"),
            btn = t("btn_submit_comment"),
        ),
        // Trusted translation string carrying the login link
        None => format!("<p>{}</p>", t("msg_login_to_comment")),
    };

    let mut thread = String::new();
    if comments.is_empty() {
        thread.push_str(&format!("<p>{}</p>", t("msg_no_comments")));
    }
    for comment in comments {
        thread.push_str(&format!(
            r#"<div class="comment">
<p class="meta">{author} {at} {date}</p>
<p>{content}</p>
</div>"#,
            author = escape(&comment.author),
            at = t("at"),
            date = comment.display_date,
            content = escape(&comment.content),
        ));
    }

    let body = format!(
        r#"<article>
{image}
<h1>{title}</h1>
<p class="meta">{written_by} {author} {at} {date}</p>
<div class="content">{content}</div>
</article>
<section>
<h2>{comments_headline}</h2>
{comment_form}
{thread}
</section>
<p><a href="/">{back}</a></p>"#,
        image = image,
        title = escape(&post.title),
        written_by = t("written_by"),
        author = escape(&post.author),
        at = t("at"),
        date = post.display_date,
        content = escape(&post.content),
        comments_headline = t("comments_headline"),
        comment_form = comment_form,
        thread = thread,
        back = t("back_overview"),
    );

    layout(lang, current_user, &escape(&post.title), errors, &body)
}

/// Generic not-found page.
pub fn not_found(lang: Lang, current_user: Option<&str>) -> Html<String> {
    let t = |key| translate(lang, key);

    let body = format!(
        r#"<h1>{heading}</h1>
<p>{message}</p>
<p><a href="/">{back}</a></p>"#,
        heading = t("page_not_found"),
        message = t("msg_page_not_found"),
        back = t("back_home"),
    );

    layout(lang, current_user, t("page_not_found"), &[], &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_metacharacters() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_home_escapes_user_content() {
        let posts = vec![PostListItem {
            id: 1,
            title: "<b>title</b>".to_string(),
            author: "alice".to_string(),
            image_url: None,
            display_date: "01.01.2026".to_string(),
            preview: "hello".to_string(),
        }];

        let Html(page) = home(Lang::En, None, &posts, &[]);
        assert!(page.contains("&lt;b&gt;title&lt;/b&gt;"));
        assert!(!page.contains("<b>title</b>"));
    }

    #[test]
    fn test_layout_shows_errors() {
        let errors = vec!["Passwords do not match!".to_string()];
        let Html(page) = login(Lang::En, None, &errors);
        assert!(page.contains("Passwords do not match!"));
    }

    #[test]
    fn test_nav_reflects_session_state() {
        let Html(anonymous) = home(Lang::En, None, &[], &[]);
        assert!(anonymous.contains("/login"));

        let Html(signed_in) = home(Lang::En, Some("alice1"), &[], &[]);
        assert!(signed_in.contains("alice1"));
        assert!(signed_in.contains("/logout"));
    }
}
