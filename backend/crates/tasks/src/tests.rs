//! Unit tests for the tasks crate

#[cfg(test)]
mod support {
    use kernel::id::{TaskId, UserId};
    use std::sync::{Arc, Mutex};

    use crate::domain::entity::task::Task;
    use crate::domain::repository::TaskRepository;
    use crate::error::TaskResult;

    /// In-memory task store with the same owner scoping as the SQL queries
    #[derive(Clone, Default)]
    pub struct InMemoryTaskRepository {
        tasks: Arc<Mutex<Vec<Task>>>,
    }

    impl InMemoryTaskRepository {
        pub fn all(&self) -> Vec<Task> {
            self.tasks.lock().unwrap().clone()
        }
    }

    impl TaskRepository for InMemoryTaskRepository {
        async fn create(&self, task: &Task) -> TaskResult<()> {
            self.tasks.lock().unwrap().push(task.clone());
            Ok(())
        }

        async fn find_by_id(&self, task_id: TaskId, owner_id: UserId) -> TaskResult<Option<Task>> {
            let tasks = self.tasks.lock().unwrap();
            Ok(tasks
                .iter()
                .find(|t| t.task_id == task_id && t.owner_id == owner_id)
                .cloned())
        }

        async fn list_by_owner(&self, owner_id: UserId) -> TaskResult<Vec<Task>> {
            let tasks = self.tasks.lock().unwrap();
            Ok(tasks
                .iter()
                .filter(|t| t.owner_id == owner_id)
                .cloned()
                .collect())
        }

        async fn set_completed(
            &self,
            task_id: TaskId,
            owner_id: UserId,
            completed: bool,
        ) -> TaskResult<Option<Task>> {
            let mut tasks = self.tasks.lock().unwrap();
            Ok(tasks
                .iter_mut()
                .find(|t| t.task_id == task_id && t.owner_id == owner_id)
                .map(|t| {
                    t.completed = completed;
                    t.clone()
                }))
        }

        async fn delete(&self, task_id: TaskId, owner_id: UserId) -> TaskResult<bool> {
            let mut tasks = self.tasks.lock().unwrap();
            let before = tasks.len();
            tasks.retain(|t| !(t.task_id == task_id && t.owner_id == owner_id));
            Ok(tasks.len() < before)
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use kernel::id::{TaskId, UserId};
    use std::sync::Arc;

    use super::support::InMemoryTaskRepository;
    use crate::application::*;
    use crate::domain::entity::task::Task;
    use crate::error::TaskError;

    async fn create(repo: &Arc<InMemoryTaskRepository>, owner: UserId, text: &str) -> Task {
        CreateTaskUseCase::new(repo.clone())
            .execute(CreateTaskInput {
                owner_id: owner,
                text: text.to_string(),
            })
            .await
            .unwrap()
    }

    async fn set(
        repo: &Arc<InMemoryTaskRepository>,
        owner: UserId,
        task_id: TaskId,
        completed: Option<bool>,
    ) -> Result<Task, TaskError> {
        UpdateTaskUseCase::new(repo.clone())
            .execute(UpdateTaskInput {
                task_id,
                owner_id: owner,
                completed,
            })
            .await
    }

    async fn get(
        repo: &Arc<InMemoryTaskRepository>,
        owner: UserId,
        task_id: TaskId,
    ) -> Result<Task, TaskError> {
        GetTaskUseCase::new(repo.clone())
            .execute(GetTaskInput {
                task_id,
                owner_id: owner,
            })
            .await
    }

    async fn delete(
        repo: &Arc<InMemoryTaskRepository>,
        owner: UserId,
        task_id: TaskId,
    ) -> Result<(), TaskError> {
        DeleteTaskUseCase::new(repo.clone())
            .execute(DeleteTaskInput {
                task_id,
                owner_id: owner,
            })
            .await
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = Arc::new(InMemoryTaskRepository::default());
        let owner = UserId::new();

        create(&repo, owner, "buy milk").await;

        let tasks = ListTasksUseCase::new(repo.clone()).execute(owner).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text.as_str(), "buy milk");
        assert!(!tasks[0].completed);
        assert_eq!(tasks[0].owner_id, owner);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = Arc::new(InMemoryTaskRepository::default());
        let owner = UserId::new();

        for text in ["one", "two", "three"] {
            create(&repo, owner, text).await;
        }

        let texts: Vec<String> = ListTasksUseCase::new(repo.clone())
            .execute(owner)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.text.into_inner())
            .collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let repo = Arc::new(InMemoryTaskRepository::default());

        let result = CreateTaskUseCase::new(repo.clone())
            .execute(CreateTaskInput {
                owner_id: UserId::new(),
                text: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(TaskError::Validation(_))));
        assert!(repo.all().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_then_delete() {
        let repo = Arc::new(InMemoryTaskRepository::default());
        let owner = UserId::new();
        let task = create(&repo, owner, "buy milk").await;

        let updated = set(&repo, owner, task.task_id, Some(true)).await.unwrap();
        assert!(updated.completed);
        assert!(get(&repo, owner, task.task_id).await.unwrap().completed);

        delete(&repo, owner, task.task_id).await.unwrap();
        assert!(matches!(
            get(&repo, owner, task.task_id).await,
            Err(TaskError::NotFound)
        ));
        assert!(matches!(
            set(&repo, owner, task.task_id, Some(false)).await,
            Err(TaskError::NotFound)
        ));
        assert!(matches!(
            delete(&repo, owner, task.task_id).await,
            Err(TaskError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let repo = Arc::new(InMemoryTaskRepository::default());
        let owner = UserId::new();
        let task = create(&repo, owner, "buy milk").await;

        let first = set(&repo, owner, task.task_id, Some(true)).await.unwrap();
        let second = set(&repo, owner, task.task_id, Some(true)).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_update_requires_completed() {
        let repo = Arc::new(InMemoryTaskRepository::default());
        let owner = UserId::new();
        let task = create(&repo, owner, "buy milk").await;

        assert!(matches!(
            set(&repo, owner, task.task_id, None).await,
            Err(TaskError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_foreign_task_is_not_found() {
        let repo = Arc::new(InMemoryTaskRepository::default());
        let alice = UserId::new();
        let bob = UserId::new();
        let bobs = create(&repo, bob, "bob's task").await;

        assert!(matches!(
            get(&repo, alice, bobs.task_id).await,
            Err(TaskError::NotFound)
        ));
        assert_eq!(get(&repo, bob, bobs.task_id).await.unwrap(), bobs);
        assert!(matches!(
            set(&repo, alice, bobs.task_id, Some(true)).await,
            Err(TaskError::NotFound)
        ));
        assert!(matches!(
            delete(&repo, alice, bobs.task_id).await,
            Err(TaskError::NotFound)
        ));

        let alices = ListTasksUseCase::new(repo.clone()).execute(alice).await.unwrap();
        assert!(alices.is_empty());

        // Bob's task is untouched
        let remaining = repo.all();
        assert_eq!(remaining.len(), 1);
        assert!(!remaining[0].completed);
    }
}

#[cfg(test)]
mod router_tests {
    use auth::{AccessTokenService, AuthConfig};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::{Duration, Utc};
    use kernel::id::UserId;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use super::support::InMemoryTaskRepository;
    use crate::presentation::router::task_router_generic;

    struct TestApp {
        router: Router,
        tokens: Arc<AccessTokenService>,
    }

    impl TestApp {
        fn new() -> Self {
            let tokens =
                Arc::new(AccessTokenService::new(&AuthConfig::with_random_secret()).unwrap());
            let router = task_router_generic(InMemoryTaskRepository::default(), tokens.clone());
            Self { router, tokens }
        }

        fn token_for(&self, user_id: UserId) -> String {
            self.tokens.issue(user_id, "user@mail.com").unwrap()
        }

        async fn send(
            &self,
            method: &str,
            uri: &str,
            token: Option<&str>,
            body: Option<&str>,
        ) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
            }
            let body = match body {
                Some(json) => {
                    builder = builder.header(header::CONTENT_TYPE, "application/json");
                    Body::from(json.to_string())
                }
                None => Body::empty(),
            };

            let response = self
                .router
                .clone()
                .oneshot(builder.body(body).unwrap())
                .await
                .unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
        }
    }

    #[tokio::test]
    async fn test_create_and_list_buy_milk() {
        let app = TestApp::new();
        let user = UserId::new();
        let token = app.token_for(user);

        let (status, created) = app
            .send("POST", "/tasks", Some(&token), Some(r#"{"text":"buy milk"}"#))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["text"], "buy milk");
        assert_eq!(created["completed"], false);
        assert_eq!(created["ownerId"], user.to_string());

        let (status, list) = app.send("GET", "/tasks", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["id"], created["id"]);
        assert_eq!(list[0]["text"], "buy milk");
        assert_eq!(list[0]["completed"], false);
    }

    #[tokio::test]
    async fn test_owner_field_in_body_is_ignored() {
        let app = TestApp::new();
        let user = UserId::new();
        let token = app.token_for(user);
        let body = json!({"text": "mine", "ownerId": UserId::new().to_string()}).to_string();

        let (status, created) = app.send("POST", "/tasks", Some(&token), Some(&body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["ownerId"], user.to_string());
    }

    #[tokio::test]
    async fn test_toggle_then_delete_then_not_found() {
        let app = TestApp::new();
        let token = app.token_for(UserId::new());

        let (_, created) = app
            .send("POST", "/tasks", Some(&token), Some(r#"{"text":"buy milk"}"#))
            .await;
        let uri = format!("/tasks/{}", created["id"].as_str().unwrap());

        let (status, updated) = app
            .send("PATCH", &uri, Some(&token), Some(r#"{"completed":true}"#))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["completed"], true);

        let (status, fetched) = app.send("GET", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["completed"], true);
        assert_eq!(fetched["text"], "buy milk");

        let (status, again) = app
            .send("PATCH", &uri, Some(&token), Some(r#"{"completed":true}"#))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(again, updated);

        let (status, body) = app.send("DELETE", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Task deleted");

        let (status, body) = app.send("GET", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");

        let (status, body) = app
            .send("PATCH", &uri, Some(&token), Some(r#"{"completed":false}"#))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");

        let (status, _) = app.send("DELETE", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_other_users_task_is_invisible() {
        let app = TestApp::new();
        let alice = app.token_for(UserId::new());
        let bob = app.token_for(UserId::new());

        let (_, bobs) = app
            .send("POST", "/tasks", Some(&bob), Some(r#"{"text":"bob only"}"#))
            .await;
        let uri = format!("/tasks/{}", bobs["id"].as_str().unwrap());

        let (status, list) = app.send("GET", "/tasks", Some(&alice), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([]));

        let (status, body) = app.send("GET", &uri, Some(&alice), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");

        let (status, fetched) = app.send("GET", &uri, Some(&bob), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["text"], "bob only");

        let (status, _) = app
            .send("PATCH", &uri, Some(&alice), Some(r#"{"completed":true}"#))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app.send("DELETE", &uri, Some(&alice), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, list) = app.send("GET", "/tasks", Some(&bob), None).await;
        assert_eq!(list[0]["completed"], false);
    }

    #[tokio::test]
    async fn test_missing_token_is_401_and_bad_tokens_are_403() {
        let app = TestApp::new();
        let user = UserId::new();

        let (status, body) = app.send("GET", "/tasks", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "UNAUTHENTICATED");

        let (_, created) = app
            .send("POST", "/tasks", Some(&app.token_for(user)), Some(r#"{"text":"keep"}"#))
            .await;
        let task_uri = format!("/tasks/{}", created["id"].as_str().unwrap());

        let expired = app
            .tokens
            .issue_at(user, "user@mail.com", Utc::now() - Duration::hours(1))
            .unwrap();
        let mut tampered = app.token_for(user);
        tampered.insert(2, 'A');

        let endpoints = [
            ("GET", "/tasks", None),
            ("POST", "/tasks", Some(r#"{"text":"x"}"#)),
            ("GET", task_uri.as_str(), None),
            ("PATCH", task_uri.as_str(), Some(r#"{"completed":true}"#)),
            ("DELETE", task_uri.as_str(), None),
        ];

        for token in [expired, tampered] {
            for (method, uri, body) in endpoints {
                let (status, json) = app.send(method, uri, Some(&token), body).await;
                assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
                assert_eq!(json["code"], "FORBIDDEN");
            }
        }

        for (method, uri, body) in endpoints {
            let (status, _) = app.send(method, uri, None, body).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        }

        // Rejected requests changed nothing
        let (status, task) = app
            .send("GET", &task_uri, Some(&app.token_for(user)), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(task["completed"], false);
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let app = TestApp::new();
        let token = app.token_for(UserId::new());

        for body in ["{}", r#"{"text":"   "}"#, "{broken"] {
            let (status, json) = app.send("POST", "/tasks", Some(&token), Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
            assert_eq!(json["code"], "VALIDATION_ERROR");
        }

        let (_, created) = app
            .send("POST", "/tasks", Some(&token), Some(r#"{"text":"buy milk"}"#))
            .await;
        let uri = format!("/tasks/{}", created["id"].as_str().unwrap());

        let (status, json) = app.send("PATCH", &uri, Some(&token), Some("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_task_id_is_not_found() {
        let app = TestApp::new();
        let token = app.token_for(UserId::new());

        let (status, json) = app
            .send("PATCH", "/tasks/not-a-uuid", Some(&token), Some(r#"{"completed":true}"#))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "NOT_FOUND");

        let (status, _) = app.send("DELETE", "/tasks/12345", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app.send("GET", "/tasks/not-a-uuid", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(TaskError, StatusCode)> = vec![
            (TaskError::Validation("x"), StatusCode::BAD_REQUEST),
            (TaskError::NotFound, StatusCode::NOT_FOUND),
            (
                TaskError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            assert_eq!(error.into_response().status(), expected_status);
        }
    }

    #[test]
    fn test_database_details_are_not_exposed() {
        let app_error = TaskError::Database(sqlx::Error::PoolTimedOut).to_app_error();
        assert_eq!(app_error.message(), "Server error");
        assert_eq!(app_error.code(), "INTERNAL_ERROR");
    }
}
