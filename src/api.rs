//! Thin client for the remote POS service. One function per endpoint, no
//! retry, no timeout, no pagination.

use serde::Deserialize;

/// Read/lookup host.
pub const BASE_URL: &str = match option_env!("POS_API_BASE") {
    Some(url) => url,
    None => "https://ipos-api-1.onrender.com/api/v1",
};

/// Product writes go to a separate catalog host.
pub const CATALOG_BASE_URL: &str = match option_env!("POS_CATALOG_BASE") {
    Some(url) => url,
    None => "https://barter-docker-607836465200.asia-south1.run.app/api/v1",
};

/// Wrapper the service uses for list responses. A missing `data` field is
/// treated as an empty list.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    // `default = "Vec::new"` keeps the derive from requiring `T: Default`.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[cfg(target_arch = "wasm32")]
pub use client::*;

#[cfg(target_arch = "wasm32")]
mod client {
    use gloo_net::http::Request;
    use serde::de::DeserializeOwned;
    use thiserror::Error;

    use super::{Envelope, BASE_URL, CATALOG_BASE_URL};
    use crate::models::{Customer, Lookup, NewLookup, NewProduct, Product, ProductUpdate, Sale, Shop};

    #[derive(Debug, Error)]
    pub enum Error {
        #[error("request failed: {0}")]
        Transport(#[from] gloo_net::Error),
        #[error("server returned status {0}")]
        Status(u16),
    }

    async fn fetch_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, Error> {
        let res = Request::get(&format!("{BASE_URL}{path}")).send().await?;
        if !res.ok() {
            return Err(Error::Status(res.status()));
        }
        let envelope: Envelope<T> = res.json().await?;
        Ok(envelope.data)
    }

    pub async fn get_customers() -> Result<Vec<Customer>, Error> {
        fetch_list("/customers").await
    }

    pub async fn get_sales() -> Result<Vec<Sale>, Error> {
        fetch_list("/sales").await
    }

    pub async fn get_products() -> Result<Vec<Product>, Error> {
        fetch_list("/gproducts").await
    }

    pub async fn get_shops() -> Result<Vec<Shop>, Error> {
        fetch_list("/shops").await
    }

    pub async fn get_categories() -> Result<Vec<Lookup>, Error> {
        fetch_list("/categories").await
    }

    pub async fn get_brands() -> Result<Vec<Lookup>, Error> {
        fetch_list("/brands").await
    }

    async fn create_lookup(path: &str, payload: &NewLookup) -> Result<Lookup, Error> {
        let res = Request::post(&format!("{BASE_URL}{path}"))
            .json(payload)?
            .send()
            .await?;
        if !res.ok() {
            return Err(Error::Status(res.status()));
        }
        Ok(res.json().await?)
    }

    pub async fn create_category(payload: &NewLookup) -> Result<Lookup, Error> {
        create_lookup("/categories", payload).await
    }

    pub async fn create_brand(payload: &NewLookup) -> Result<Lookup, Error> {
        create_lookup("/brands", payload).await
    }

    pub async fn create_product(payload: &NewProduct) -> Result<(), Error> {
        let res = Request::post(&format!("{CATALOG_BASE_URL}/gproducts"))
            .json(payload)?
            .send()
            .await?;
        if !res.ok() {
            return Err(Error::Status(res.status()));
        }
        Ok(())
    }

    pub async fn update_product(payload: &ProductUpdate) -> Result<(), Error> {
        let res = Request::put(&format!("{CATALOG_BASE_URL}/gproducts"))
            .json(payload)?
            .send()
            .await?;
        if !res.ok() {
            return Err(Error::Status(res.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Sale};

    #[test]
    fn envelope_decodes_listed_data() {
        let json = r#"{"data": [
            {"id": "c1", "name": "Asha", "image": "", "phone": "123",
             "createdAt": "2025-01-01T00:00:00Z", "updatedAt": "2025-01-01T00:00:00Z"},
            {"id": "c2", "name": "Ravi", "image": "", "phone": "456",
             "createdAt": "2025-01-02T00:00:00Z", "updatedAt": "2025-01-02T00:00:00Z"}
        ]}"#;
        let envelope: Envelope<Customer> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].name, "Asha");
    }

    #[test]
    fn envelope_defaults_missing_data_to_empty() {
        let envelope: Envelope<Sale> = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_empty());
    }
}
