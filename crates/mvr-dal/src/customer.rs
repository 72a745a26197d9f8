use crate::{Error, error::Result};
use futures::{StreamExt as _, TryStreamExt as _};
use garde::Validate;
use serde::{Deserialize, Serialize};
use sqlx::Pool;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    #[garde(length(min = 4, max = 30))]
    pub name: String,
    // at least five digits
    #[garde(range(min = 10_000))]
    pub phone: i64,
    #[garde(skip)]
    #[serde(default)]
    pub is_gold: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: i64,
    pub is_gold: bool,
}

pub type CustomerRepository = CustomerRepositoryImpl<Pool<crate::ChosenDB>>;

pub struct CustomerRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> CustomerRepositoryImpl<E>
where
    for<'a> &'a E: sqlx::Executor<'c, Database = crate::ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub async fn create(&self, payload: CreateCustomer) -> Result<Customer> {
        let result = sqlx::query("INSERT INTO customer (name, phone, is_gold) VALUES (?, ?, ?)")
            .bind(&payload.name)
            .bind(payload.phone)
            .bind(payload.is_gold)
            .execute(&self.executor)
            .await?;

        let id = result.last_insert_rowid();
        self.get(id).await
    }

    pub async fn update(&self, id: i64, payload: CreateCustomer) -> Result<Customer> {
        let result =
            sqlx::query("UPDATE customer SET name = ?, phone = ?, is_gold = ? WHERE id = ?")
                .bind(&payload.name)
                .bind(payload.phone)
                .bind(payload.is_gold)
                .bind(id)
                .execute(&self.executor)
                .await?;

        if result.rows_affected() == 0 {
            debug!("No customer with id {id} to update");
            Err(Error::RecordNotFound("customer".to_string()))
        } else {
            self.get(id).await
        }
    }

    pub async fn list(&self, limit: usize) -> Result<Vec<Customer>> {
        let records =
            sqlx::query_as::<_, Customer>("SELECT id, name, phone, is_gold FROM customer")
                .fetch(&self.executor)
                .take(limit)
                .try_collect::<Vec<_>>()
                .await?;
        Ok(records)
    }

    pub async fn delete(&self, id: i64) -> Result<Customer> {
        match self.find(id).await? {
            Some(record) => {
                sqlx::query("DELETE FROM customer WHERE id = ?")
                    .bind(id)
                    .execute(&self.executor)
                    .await?;
                Ok(record)
            }
            None => Err(Error::RecordNotFound("customer".to_string())),
        }
    }

    pub async fn get(&self, id: i64) -> Result<Customer> {
        self.find(id)
            .await?
            .ok_or_else(|| Error::RecordNotFound("customer".to_string()))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Customer>> {
        let records = sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone, is_gold FROM customer WHERE name = ?",
        )
        .bind(name)
        .fetch(&self.executor)
        .take(crate::MAX_LIMIT)
        .try_collect::<Vec<_>>()
        .await?;
        Ok(records)
    }

    async fn find(&self, id: i64) -> Result<Option<Customer>> {
        let record = sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone, is_gold FROM customer WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.executor)
        .await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_name_and_phone() {
        let customer = CreateCustomer {
            name: "John Doe".to_string(),
            phone: 777_123_456,
            is_gold: false,
        };
        assert!(customer.validate().is_ok());

        let short_name = CreateCustomer {
            name: "Jo".to_string(),
            phone: 777_123_456,
            is_gold: false,
        };
        assert!(short_name.validate().is_err());

        let short_phone = CreateCustomer {
            name: "John Doe".to_string(),
            phone: 999,
            is_gold: true,
        };
        assert!(short_phone.validate().is_err());
    }

    #[test]
    fn is_gold_defaults_to_false() {
        let payload: CreateCustomer =
            serde_json::from_str(r#"{"name":"John Doe","phone":777123456}"#).unwrap();
        assert!(!payload.is_gold);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_non_boolean_gold_flag() {
        let result = serde_json::from_str::<CreateCustomer>(
            r#"{"name":"John Doe","phone":777123456,"isGold":"yes"}"#,
        );
        assert!(result.is_err());
    }
}
