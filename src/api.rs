//! Mock API Boundary
//!
//! Every "network" call resolves after a fixed timer delay, standing in
//! for a real HTTP client. Each call site goes through exactly one
//! async function here, so a real implementation can be swapped in
//! without touching any view logic.

use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::data;
use crate::list::filter_items;
use crate::models::{ContactMessage, Order, SearchHit, SearchKind};
use crate::thread::CommentPage;

const SEARCH_DELAY_MS: u32 = 400;
const COMMENT_DELAY_MS: u32 = 500;
const SUBMIT_DELAY_MS: u32 = 600;

/// Error taxonomy of the (future) real API. The mock layer only ever
/// produces `NotFound` and `Validation`; `Transient` is the contract
/// for a real client with a network underneath.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("temporary failure, please try again")]
    Transient,
}

/// Search posts, workouts, and products for a free-text query.
pub async fn search_content(query: &str) -> Result<Vec<SearchHit>, ApiError> {
    TimeoutFuture::new(SEARCH_DELAY_MS).await;

    let mut hits = Vec::new();
    for post in filter_items(data::blog_posts(), query) {
        hits.push(SearchHit {
            id: post.id,
            kind: SearchKind::Post,
            title: post.title.clone(),
            subtitle: post.excerpt.clone(),
            url: format!("/blog/{}", post.id),
        });
    }
    for plan in filter_items(data::workout_plans(), query) {
        hits.push(SearchHit {
            id: plan.id,
            kind: SearchKind::Workout,
            title: plan.title.clone(),
            subtitle: format!("{} · {} weeks", plan.level, plan.duration_weeks),
            url: format!("/workouts/{}", plan.id),
        });
    }
    for product in filter_items(data::products(), query) {
        hits.push(SearchHit {
            id: product.id,
            kind: SearchKind::Product,
            title: product.name.clone(),
            subtitle: product.category.clone(),
            url: "/store".to_string(),
        });
    }

    web_sys::console::log_1(
        &format!("[API] search '{}' -> {} hits", query.trim(), hits.len()).into(),
    );
    Ok(hits)
}

/// Fetch one page of a post's comment feed. The envelope carries the
/// feed total so the caller knows when it has everything.
pub async fn fetch_comment_page(
    post_id: u32,
    offset: usize,
    limit: usize,
) -> Result<CommentPage, ApiError> {
    TimeoutFuture::new(COMMENT_DELAY_MS).await;

    if !data::blog_posts().iter().any(|p| p.id == post_id) {
        return Err(ApiError::NotFound("post"));
    }
    let feed = data::seed_comments(post_id);
    let end = (offset + limit).min(feed.len());
    let comments = if offset < feed.len() {
        feed[offset..end].to_vec()
    } else {
        Vec::new()
    };
    web_sys::console::log_1(
        &format!(
            "[API] comments post={} offset={} -> {} of {}",
            post_id,
            offset,
            comments.len(),
            feed.len()
        )
        .into(),
    );
    Ok(CommentPage {
        comments,
        total: feed.len(),
    })
}

/// Mock sign-in; always succeeds with the demo member.
pub async fn sign_in() -> Result<String, ApiError> {
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
    Ok("Alex Morgan".to_string())
}

/// Mock checkout. Logs the payload a real client would POST.
pub async fn place_order(order: &Order) -> Result<(), ApiError> {
    if order.lines.is_empty() {
        return Err(ApiError::Validation("Your cart is empty".to_string()));
    }
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
    let payload = serde_json::to_string(order).unwrap_or_default();
    web_sys::console::log_1(&format!("[API] order payload: {payload}").into());
    Ok(())
}

/// Mock contact-form submission. Logs the payload a real client would
/// POST.
pub async fn send_contact(message: &ContactMessage) -> Result<(), ApiError> {
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
    let payload = serde_json::to_string(message).unwrap_or_default();
    web_sys::console::log_1(&format!("[API] contact payload: {payload}").into());
    Ok(())
}
