use super::Engine;

use async_trait::async_trait;

use crate::api::FareAPI;
use crate::entities::FareEntry;
use crate::error::{fares_unavailable_error, Error};

#[async_trait]
impl FareAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_fares(&self) -> Result<Vec<FareEntry>, Error> {
        if self.fares.is_empty() {
            return Err(fares_unavailable_error());
        }

        Ok(self.fares.entries().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fares::FareTable;

    #[tokio::test]
    async fn empty_table_is_reported_as_unavailable() {
        let engine = Engine::new(FareTable::default());

        let err = engine.list_fares().await.unwrap_err();
        assert_eq!(err.code, 201);
    }

    #[tokio::test]
    async fn full_table_is_returned_as_is() {
        let engine = Engine::new(FareTable::from_entries(vec![FareEntry {
            postal_code: "1000".into(),
            airport: "Aéroport de Bruxelles".into(),
            price: 100.0,
        }]));

        let fares = engine.list_fares().await.unwrap();
        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].postal_code, "1000");
    }
}
