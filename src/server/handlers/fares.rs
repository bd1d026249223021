use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::FareEntry;
use crate::error::Error;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<FareEntry>>, Error> {
    let fares = api.list_fares().await?;

    Ok(fares.into())
}
