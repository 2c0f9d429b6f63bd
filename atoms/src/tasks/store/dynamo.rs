use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

use super::TaskStore;
use crate::dynamo::item_to_json;
use crate::error::{ApiError, ApiResult};
use crate::tasks::model::Task;

/// Durable task store - a single DynamoDB table keyed by `id`.
///
/// Holds the one long-lived client created at process start. `list` is a
/// full-table scan (small datasets, no pagination); every item read is passed
/// through numeric normalization before it is decoded into a `Task`.
#[derive(Debug, Clone)]
pub struct DynamoTaskStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoTaskStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        DynamoTaskStore {
            client,
            table_name: table_name.into(),
        }
    }

    fn item_to_task(item: &HashMap<String, AttributeValue>) -> ApiResult<Task> {
        let value = item_to_json(item)?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::BackendUnavailable(format!("malformed task record: {}", e)))
    }
}

#[async_trait]
impl TaskStore for DynamoTaskStore {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| ApiError::BackendUnavailable(format!("DynamoDB scan error: {}", e)))?;

        let mut tasks = Vec::new();
        for item in result.items() {
            tasks.push(Self::item_to_task(item)?);
        }

        // Sort by created_at desc (newest first)
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn get(&self, task_id: &str) -> ApiResult<Task> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(task_id.to_string()))
            .send()
            .await
            .map_err(|e| ApiError::BackendUnavailable(format!("DynamoDB get_item error: {}", e)))?;

        match result.item() {
            Some(item) => Self::item_to_task(item),
            None => Err(ApiError::NotFound("Task")),
        }
    }

    async fn create(&self, task: Task) -> ApiResult<Task> {
        let photo_url = match &task.photo_url {
            Some(url) => AttributeValue::S(url.clone()),
            None => AttributeValue::Null(true),
        };

        let mut builder = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(task.id.clone()))
            .item("title", AttributeValue::S(task.title.clone()))
            .item("completed", AttributeValue::Bool(task.completed))
            .item("photo_url", photo_url)
            .item("created_at", AttributeValue::S(task.created_at.clone()));

        if let Some(completed_at) = &task.completed_at {
            builder = builder.item("completed_at", AttributeValue::S(completed_at.clone()));
        }

        builder
            .send()
            .await
            .map_err(|e| ApiError::BackendUnavailable(format!("DynamoDB put_item error: {}", e)))?;

        Ok(task)
    }

    async fn complete(&self, task_id: &str, photo_url: &str) -> ApiResult<Task> {
        // Existence check first so an absent id is NotFound, not a blind upsert
        self.get(task_id).await?;

        // Targeted update of the three completion fields only
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(task_id.to_string()))
            .update_expression(
                "SET completed = :completed, photo_url = :photo, completed_at = :completed_at",
            )
            .expression_attribute_values(":completed", AttributeValue::Bool(true))
            .expression_attribute_values(":photo", AttributeValue::S(photo_url.to_string()))
            .expression_attribute_values(
                ":completed_at",
                AttributeValue::S(chrono::Utc::now().to_rfc3339()),
            )
            .send()
            .await
            .map_err(|e| {
                ApiError::BackendUnavailable(format!("DynamoDB update_item error: {}", e))
            })?;

        // Return the updated record
        self.get(task_id).await
    }

    async fn delete(&self, task_id: &str) -> ApiResult<()> {
        // Check if task exists first
        self.get(task_id).await?;

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(task_id.to_string()))
            .send()
            .await
            .map_err(|e| {
                ApiError::BackendUnavailable(format!("DynamoDB delete_item error: {}", e))
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_to_task_decodes_a_normalized_item() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("abc-123".to_string()));
        item.insert("title".to_string(), AttributeValue::S("Feed Rex".to_string()));
        item.insert("completed".to_string(), AttributeValue::Bool(false));
        item.insert("photo_url".to_string(), AttributeValue::Null(true));
        item.insert(
            "created_at".to_string(),
            AttributeValue::S("2025-10-18T10:00:00+00:00".to_string()),
        );

        let task = DynamoTaskStore::item_to_task(&item).unwrap();
        assert_eq!(task.id, "abc-123");
        assert_eq!(task.title, "Feed Rex");
        assert!(!task.completed);
        assert_eq!(task.photo_url, None);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn item_to_task_keeps_completion_fields() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("abc-123".to_string()));
        item.insert("title".to_string(), AttributeValue::S("Walk Buddy".to_string()));
        item.insert("completed".to_string(), AttributeValue::Bool(true));
        item.insert("photo_url".to_string(), AttributeValue::S("rex.jpg".to_string()));
        item.insert(
            "created_at".to_string(),
            AttributeValue::S("2025-10-18T10:00:00+00:00".to_string()),
        );
        item.insert(
            "completed_at".to_string(),
            AttributeValue::S("2025-10-18T11:00:00+00:00".to_string()),
        );

        let task = DynamoTaskStore::item_to_task(&item).unwrap();
        assert!(task.completed);
        assert_eq!(task.photo_url.as_deref(), Some("rex.jpg"));
        assert_eq!(
            task.completed_at.as_deref(),
            Some("2025-10-18T11:00:00+00:00")
        );
    }

    #[test]
    fn item_to_task_rejects_records_missing_required_fields() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("abc-123".to_string()));

        assert!(matches!(
            DynamoTaskStore::item_to_task(&item),
            Err(ApiError::BackendUnavailable(_))
        ));
    }
}
