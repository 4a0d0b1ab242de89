//! Request extractors whose rejections are reported through [`AppError`], so
//! a malformed body or path segment gets the same JSON error envelope as
//! every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

/// `axum::Json` with an [`AppError`] rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
