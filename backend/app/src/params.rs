//! Request extractors that reject with [`ApiError`], plus the small query
//! structs the device routes share.

use axum::extract::{FromRequest, FromRequestParts};
use axum_valid::HasValidate;
use serde::Deserialize;
use validator::Validate;

use crate::{common::error::ApiError, service::filter::SortOrder};

#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct Query<T>(pub T);

impl<T> HasValidate for Query<T>
where
    T: Validate,
{
    type Validate = T;

    fn get_validate(&self) -> &Self::Validate {
        &self.0
    }
}

#[derive(Debug, Clone, Default, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

#[derive(Debug, Clone, Default, FromRequest, FromRequestParts)]
#[from_request(via(axum_valid::Valid), rejection(ApiError))]
pub struct Valid<T>(pub T);

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SortParams {
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuickSearchParams {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub query: String,
}
