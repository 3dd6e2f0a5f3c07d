//! Extractors whose rejections render through `InventoryError`, so a body or
//! query string that fails to parse gets the same 400 envelope as a failed
//! validation.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::InventoryError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(InventoryError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(InventoryError))]
pub struct ApiQuery<T>(pub T);
