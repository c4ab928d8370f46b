//! Tabular REST surface: select with filters and ordering, insert, update.
//! Row-level security on the backend decides what each identity may touch.

use std::rc::Rc;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::auth::AuthClient;
use super::{error_from_response, ApiError};

pub const ASSIGNMENTS_TABLE: &str = "assignments";
pub const PROFILES_TABLE: &str = "profiles";

#[derive(Clone)]
pub struct Db {
    auth: Rc<AuthClient>,
}

impl Db {
    pub fn new(auth: Rc<AuthClient>) -> Self {
        Self { auth }
    }

    pub fn from(&self, table: &str) -> QueryBuilder {
        QueryBuilder {
            auth: self.auth.clone(),
            table: table.to_string(),
            params: Vec::new(),
        }
    }

    pub async fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<(), ApiError> {
        let response = Request::post(&self.auth.rest_url(table))
            .header("apikey", self.auth.anon_key())
            .header("Authorization", &format!("Bearer {}", self.auth.bearer()))
            .header("Prefer", "return=minimal")
            .json(row)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;
        if !response.ok() {
            return Err(error_from_response(&response).await);
        }
        Ok(())
    }

    pub async fn update<T: Serialize>(
        &self,
        table: &str,
        patch: &T,
        column: &str,
        value: &str,
    ) -> Result<(), ApiError> {
        let filter = format!("eq.{value}");
        let response = Request::patch(&self.auth.rest_url(table))
            .query([(column, filter.as_str())])
            .header("apikey", self.auth.anon_key())
            .header("Authorization", &format!("Bearer {}", self.auth.bearer()))
            .header("Prefer", "return=minimal")
            .json(patch)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;
        if !response.ok() {
            return Err(error_from_response(&response).await);
        }
        Ok(())
    }
}

pub struct QueryBuilder {
    auth: Rc<AuthClient>,
    table: String,
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn order(mut self, column: &str, descending: bool) -> Self {
        let direction = if descending { "desc" } else { "asc" };
        self.params
            .push(("order".to_string(), format!("{column}.{direction}")));
        self
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, ApiError> {
        let response = self.request(false).send().await.map_err(ApiError::network)?;
        if !response.ok() {
            return Err(error_from_response(&response).await);
        }
        response.json().await.map_err(ApiError::decode)
    }

    /// Fetch exactly one row; the backend rejects zero or several matches.
    pub async fn fetch_single<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let response = self.request(true).send().await.map_err(ApiError::network)?;
        if !response.ok() {
            return Err(error_from_response(&response).await);
        }
        response.json().await.map_err(ApiError::decode)
    }

    fn request(&self, single: bool) -> gloo_net::http::RequestBuilder {
        let mut builder = Request::get(&self.auth.rest_url(&self.table))
            .query(
                self.params
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            )
            .header("apikey", self.auth.anon_key())
            .header("Authorization", &format!("Bearer {}", self.auth.bearer()));
        if single {
            builder = builder.header("Accept", "application/vnd.pgrst.object+json");
        }
        builder
    }
}
