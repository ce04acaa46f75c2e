use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{College, Course, NewCourse, Profile};
use crate::store::{CollegeStore, Order, StoreConfig};

const COLLEGES: &str = "colleges";
const COURSES: &str = "courses";
const PROFILES: &str = "profiles";

/// Gateway to the hosted store over its PostgREST endpoint.
pub struct RestStore {
    client: Client,
    config: StoreConfig,
}

impl RestStore {
    pub fn new(config: StoreConfig) -> Result<Self, AppError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url.trim_end_matches('/'), table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {}", self.config.anon_key))
    }

    async fn check(&self, response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(AppError::Store {
            status: status.as_u16(),
            message,
        })
    }

    /// Shared read path: `select=*` plus whatever filters the caller adds.
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, AppError> {
        let request = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*")])
            .query(query);

        let response = self.authorize(request).send().await?;
        let response = self.check(response).await?;
        let rows = response.json::<Vec<T>>().await?;
        Ok(rows)
    }

    async fn fetch_row<T: DeserializeOwned>(
        &self,
        table: &str,
        id: Uuid,
    ) -> Result<Option<T>, AppError> {
        let query = [("id", format!("eq.{id}")), ("limit", "1".to_string())];
        let mut rows = self.fetch_rows::<T>(table, &query).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.swap_remove(0)))
        }
    }
}

#[async_trait]
impl CollegeStore for RestStore {
    async fn fetch_colleges(&self, order: Order) -> Result<Vec<College>, AppError> {
        let query = [("order", order.to_query_value())];
        self.fetch_rows(COLLEGES, &query).await
    }

    async fn fetch_college(&self, id: Uuid) -> Result<Option<College>, AppError> {
        self.fetch_row(COLLEGES, id).await
    }

    async fn fetch_courses_for_college(
        &self,
        college_id: Uuid,
        order: Order,
    ) -> Result<Vec<Course>, AppError> {
        let query = [
            ("college_id", format!("eq.{college_id}")),
            ("order", order.to_query_value()),
        ];
        self.fetch_rows(COURSES, &query).await
    }

    async fn fetch_profile(&self, id: Uuid) -> Result<Option<Profile>, AppError> {
        self.fetch_row(PROFILES, id).await
    }

    async fn insert_course(&self, course: NewCourse) -> Result<(), AppError> {
        let request = self
            .client
            .post(self.table_url(COURSES))
            .header("Prefer", "return=minimal")
            .json(&course);

        let response = self.authorize(request).send().await?;
        self.check(response).await?;
        Ok(())
    }

    /// Deletes by id. PostgREST reports success even when the id matched no
    /// row, so absence is not distinguished from a completed delete here.
    async fn delete_course(&self, id: Uuid) -> Result<(), AppError> {
        let request = self
            .client
            .delete(self.table_url(COURSES))
            .query(&[("id", format!("eq.{id}"))]);

        let response = self.authorize(request).send().await?;
        self.check(response).await?;
        Ok(())
    }
}
