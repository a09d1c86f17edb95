//! Post and comment handlers.

use std::io::Write;

use axum::{
    extract::{
        multipart::{Field, Multipart},
        DefaultBodyLimit, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tempfile::NamedTempFile;

use crate::api::extractors::SessionContext;
use crate::api::AppState;
use crate::config::{POST_FORM_BODY_LIMIT_BYTES, SERVER_UPLOAD_LIMIT_BYTES};
use crate::errors::{AppError, AppResult};
use crate::i18n::translate;
use crate::upload::FileUpload;
use crate::views;

/// Post detail request
#[derive(Debug, Deserialize)]
pub struct ShowQuery {
    pub id: Option<String>,
}

/// Comment submission request
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub post_id: Option<String>,
    pub content: String,
}

/// Fields of the multipart post-creation form
struct PostForm {
    title: String,
    content: String,
    image: Option<FileUpload>,
}

/// Create post and comment routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/post/create", get(create_form).post(create_submit))
        .route("/post/show", get(show))
        .route("/comment/add", post(add_comment))
        .layer(DefaultBodyLimit::max(POST_FORM_BODY_LIMIT_BYTES))
}

/// Render the post creation form (authenticated only)
async fn create_form(ctx: SessionContext) -> Response {
    if ctx.user().is_none() {
        return Redirect::to("/login").into_response();
    }

    views::create_post(ctx.lang(), ctx.current_username(), &[]).into_response()
}

/// Process a post submission, including the optional image upload.
async fn create_submit(
    State(state): State<AppState>,
    ctx: SessionContext,
    multipart: Multipart,
) -> AppResult<Response> {
    let Some(user) = ctx.user() else {
        return Ok(Redirect::to("/login").into_response());
    };

    let form = read_post_form(multipart).await?;

    match state
        .post_service
        .create_post(user.id, &form.title, &form.content, form.image)
        .await
    {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(e) => {
            let errors = vec![translate(ctx.lang(), e.message_key()).to_string()];
            Ok(views::create_post(ctx.lang(), ctx.current_username(), &errors).into_response())
        }
    }
}

/// Render a post with its comment thread
async fn show(
    State(state): State<AppState>,
    ctx: SessionContext,
    Query(query): Query<ShowQuery>,
) -> AppResult<Response> {
    let id = query.id.as_deref().and_then(|raw| raw.parse::<i64>().ok());

    let Some(id) = id else {
        return Ok(not_found_page(&ctx));
    };

    match state.post_service.get_post(id).await? {
        Some(post) => {
            let comments = state.comment_service.comments_for_post(id).await?;

            Ok(views::show_post(
                ctx.lang(),
                ctx.current_username(),
                &post,
                &comments,
                &[],
            )
            .into_response())
        }
        None => Ok(not_found_page(&ctx)),
    }
}

/// Process a comment submission (authenticated only).
///
/// Invalid input is a no-op; the response redirects back to the post
/// either way.
async fn add_comment(
    State(state): State<AppState>,
    ctx: SessionContext,
    Form(form): Form<CommentForm>,
) -> Response {
    let Some(user) = ctx.user() else {
        return Redirect::to("/login").into_response();
    };

    let post_id = form
        .post_id
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(0);

    state
        .comment_service
        .add_comment(post_id, user.id, &form.content)
        .await;

    Redirect::to(&format!("/post/show?id={}", post_id)).into_response()
}

fn not_found_page(ctx: &SessionContext) -> Response {
    (
        StatusCode::NOT_FOUND,
        views::not_found(ctx.lang(), ctx.current_username()),
    )
        .into_response()
}

/// Pull title, content, and the optional image out of the multipart body.
async fn read_post_form(mut multipart: Multipart) -> AppResult<PostForm> {
    let mut title = String::new();
    let mut content = String::new();
    let mut image = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                // The body was cut off or malformed; report it through the
                // upload descriptor so the form re-renders with a message
                tracing::warn!("Multipart read failed: {}", e);
                image = Some(FileUpload::other_error(String::new()));
                break;
            }
        };

        match field.name() {
            Some("title") => {
                title = field
                    .text()
                    .await
                    .map_err(|e| AppError::internal(e.to_string()))?;
            }
            Some("content") => {
                content = field
                    .text()
                    .await
                    .map_err(|e| AppError::internal(e.to_string()))?;
            }
            Some("image") => image = Some(spool_image(field).await?),
            _ => {}
        }
    }

    Ok(PostForm {
        title,
        content,
        image,
    })
}

/// Spool the image field into a temporary file, tracking the byte count.
///
/// Crossing the server-wide cap aborts the transfer; the 5 MiB policy check
/// happens later in the upload pipeline, on the accepted payload.
async fn spool_image(mut field: Field<'_>) -> AppResult<FileUpload> {
    let original_name = field.file_name().unwrap_or_default().to_string();

    // Browsers submit an empty file part when no file was selected
    if original_name.is_empty() {
        return Ok(FileUpload::no_file());
    }

    let mut temp =
        NamedTempFile::new().map_err(|e| AppError::internal(format!("Temp file failed: {}", e)))?;
    let mut size: u64 = 0;

    loop {
        match field.chunk().await {
            Ok(Some(chunk)) => {
                size += chunk.len() as u64;
                if size > SERVER_UPLOAD_LIMIT_BYTES {
                    return Ok(FileUpload::exceeded_server_limit(original_name));
                }
                if let Err(e) = temp.write_all(&chunk) {
                    tracing::warn!("Upload spooling failed: {}", e);
                    return Ok(FileUpload::other_error(original_name));
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Upload transfer failed: {}", e);
                return Ok(FileUpload::other_error(original_name));
            }
        }
    }

    Ok(FileUpload::received(temp, original_name, size))
}
