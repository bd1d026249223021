use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::{Quote, QuoteParams};
use crate::error::Error;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<QuoteParams>,
) -> Result<Json<Quote>, Error> {
    let quote = api.create_quote(params).await?;

    Ok(quote.into())
}
