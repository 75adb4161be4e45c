//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{TaskId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::domain::value_object::task_text::TaskText;
use crate::error::TaskResult;

/// PostgreSQL-backed task store
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TaskRepository for PgTaskRepository {
    async fn create(&self, task: &Task) -> TaskResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tasks (
                task_id,
                owner_id,
                text,
                completed,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(task.task_id.as_uuid())
        .bind(task.owner_id.as_uuid())
        .bind(task.text.as_str())
        .bind(task.completed)
        .bind(task.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, task_id: TaskId, owner_id: UserId) -> TaskResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT
                task_id,
                owner_id,
                text,
                completed,
                created_at
            FROM tasks
            WHERE task_id = $1 AND owner_id = $2
            "#,
        )
        .bind(task_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskRow::into_task))
    }

    async fn list_by_owner(&self, owner_id: UserId) -> TaskResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT
                task_id,
                owner_id,
                text,
                completed,
                created_at
            FROM tasks
            WHERE owner_id = $1
            ORDER BY created_at, task_id
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    async fn set_completed(
        &self,
        task_id: TaskId,
        owner_id: UserId,
        completed: bool,
    ) -> TaskResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks
            SET completed = $3
            WHERE task_id = $1 AND owner_id = $2
            RETURNING
                task_id,
                owner_id,
                text,
                completed,
                created_at
            "#,
        )
        .bind(task_id.as_uuid())
        .bind(owner_id.as_uuid())
        .bind(completed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskRow::into_task))
    }

    async fn delete(&self, task_id: TaskId, owner_id: UserId) -> TaskResult<bool> {
        let deleted = sqlx::query("DELETE FROM tasks WHERE task_id = $1 AND owner_id = $2")
            .bind(task_id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct TaskRow {
    task_id: Uuid,
    owner_id: Uuid,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Task {
        Task {
            task_id: TaskId::from_uuid(self.task_id),
            owner_id: UserId::from_uuid(self.owner_id),
            text: TaskText::from_db(self.text),
            completed: self.completed,
            created_at: self.created_at,
        }
    }
}
