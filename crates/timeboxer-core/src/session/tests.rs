//! Tests for the session module.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::*;
use crate::{
    generation::GenerationError,
    normalizer::fallback_plan,
    persistence::{MemoryStore, SAVE_KEY},
};

struct StaticService(Value);

#[async_trait]
impl PlanGenerationService for StaticService {
    async fn generate(&self, _request: &GenerationRequest) -> std::result::Result<Value, GenerationError> {
        Ok(self.0.clone())
    }
}

struct UnreachableService;

#[async_trait]
impl PlanGenerationService for UnreachableService {
    async fn generate(&self, _request: &GenerationRequest) -> std::result::Result<Value, GenerationError> {
        Err(GenerationError::InvalidResponse("connection refused".to_string()))
    }
}

/// Service whose request never completes.
struct PendingService;

#[async_trait]
impl PlanGenerationService for PendingService {
    async fn generate(&self, _request: &GenerationRequest) -> std::result::Result<Value, GenerationError> {
        std::future::pending().await
    }
}

/// Store whose writes always fail.
#[derive(Default)]
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(TimeboxError::Configuration {
            message: "read-only".to_string(),
        })
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Err(TimeboxError::Configuration {
            message: "read-only".to_string(),
        })
    }
}

fn react_body() -> Value {
    json!({
        "projectName": "Learn React",
        "steps": [
            {"id": "s1", "title": "Basics", "subTasks": [
                {"id": "t1", "task": "JSX", "time": 60, "done": false},
                {"id": "t2", "task": "Props", "time": "30", "done": false}
            ]},
            {"id": "s2", "title": "Hooks", "subTasks": [
                {"id": "t3", "task": "useState", "time": 90, "done": false}
            ]}
        ]
    })
}

fn saved_plan(session: &Session<MemoryStore>) -> Option<Plan> {
    session
        .persistence
        .store()
        .get(SAVE_KEY)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

async fn generated_session() -> Session<MemoryStore> {
    let mut session = Session::open(MemoryStore::default());
    session.set_goal("Learn React");
    session.set_duration("3 hours");
    session
        .generate(&StaticService(react_body()))
        .await
        .unwrap();
    session
}

#[tokio::test]
async fn test_generate_installs_and_saves() {
    let session = generated_session().await;

    let plan = session.plan().expect("plan generated");
    assert_eq!(plan.project_name, "Learn React");
    assert_eq!(plan.steps[0].sub_tasks[1].time, 30);
    assert_eq!(saved_plan(&session).as_ref(), Some(plan));
    assert!(!session.is_loading());
    assert!(session.last_saved().is_some());

    let metrics = session.metrics();
    assert_eq!(metrics.total_minutes, 180);
    assert_eq!(metrics.progress, 0);
}

#[tokio::test]
async fn test_generate_failure_installs_fallback() {
    let mut session = Session::open(MemoryStore::default());
    let plan = session.generate(&UnreachableService).await.unwrap();
    assert_eq!(plan, &fallback_plan());
    assert_eq!(saved_plan(&session), Some(fallback_plan()));
}

#[tokio::test]
async fn test_fetch_failure_keeps_state() {
    let mut session = generated_session().await;
    let before = session.plan().cloned();

    let result = session.fetch(&UnreachableService).await;
    assert!(matches!(result, Err(TimeboxError::Generation { .. })));
    assert_eq!(session.plan().cloned(), before);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_fetch_malformed_body_installs_fallback() {
    let mut session = generated_session().await;
    let plan = session
        .fetch(&StaticService(json!({"error": "quota"})))
        .await
        .unwrap();
    assert_eq!(plan, &fallback_plan());
}

#[tokio::test]
async fn test_cancelled_generate_releases_loading() {
    let mut session = Session::open(MemoryStore::default());

    tokio::select! {
        biased;
        _ = session.generate(&PendingService) => panic!("pending service answered"),
        () = std::future::ready(()) => {}
    }
    assert!(!session.is_loading());
    assert!(session.plan().is_none());

    let plan = session.generate(&StaticService(react_body())).await.unwrap();
    assert_eq!(plan.project_name, "Learn React");
}

#[tokio::test]
async fn test_cancelled_fetch_releases_loading() {
    let mut session = generated_session().await;

    tokio::select! {
        biased;
        _ = session.fetch(&PendingService) => panic!("pending service answered"),
        () = std::future::ready(()) => {}
    }
    assert!(!session.is_loading());
    assert_eq!(session.plan().unwrap().project_name, "Learn React");

    let plan = session.fetch(&StaticService(json!({"error": "quota"}))).await.unwrap();
    assert_eq!(plan, &fallback_plan());
}

#[tokio::test]
async fn test_mutations_are_saved() {
    let mut session = generated_session().await;

    session.toggle_sub_task("s1", "t1").unwrap();
    session.edit_sub_task_text("s1", "t2", "Props & state").unwrap();
    session.edit_sub_task_time_input("s2", "t3", "abc").unwrap();
    session.reorder_steps("s2", "s1").unwrap();

    let saved = saved_plan(&session).unwrap();
    assert_eq!(session.plan(), Some(&saved));
    assert_eq!(saved.steps[0].id, "s2");
    assert_eq!(saved.steps[0].sub_tasks[0].time, 0);
    assert!(saved.steps[1].sub_tasks[0].done);
    assert_eq!(saved.steps[1].sub_tasks[1].task, "Props & state");

    let metrics = session.metrics();
    assert_eq!(metrics.total_minutes, 90);
    assert_eq!(metrics.completed_minutes, 60);
    assert_eq!(metrics.progress, 67);
}

#[tokio::test]
async fn test_apply_drop_moves_step() {
    let mut session = generated_session().await;
    let end = DragEnd {
        active_id: "s1".to_string(),
        over_id: Some("s2".to_string()),
    };

    let plan = session.apply_drop(&end).unwrap();
    assert_eq!(plan.step_ids(), ["s2", "s1"]);
    assert_eq!(saved_plan(&session).unwrap().steps[0].id, "s2");
}

#[test]
fn test_mutations_without_plan_are_noops() {
    let mut session = Session::open(MemoryStore::default());
    assert!(session.toggle_sub_task("s1", "t1").is_none());
    assert!(session.edit_sub_task_time("s1", "t1", 5).is_none());
    assert!(session.reorder_steps("s1", "s2").is_none());
    assert!(session.persistence.store().is_empty());
}

#[tokio::test]
async fn test_reset_clears_everything() {
    let mut session = generated_session().await;
    session.reset();

    assert!(session.plan().is_none());
    assert!(saved_plan(&session).is_none());
    assert_eq!(session.goal(), "");
    assert_eq!(session.duration(), "");
    assert_eq!(session.metrics().total_minutes, 0);
}

#[tokio::test]
async fn test_save_failure_keeps_change_in_memory() {
    let mut session = Session::open(ReadOnlyStore);
    session.generate(&UnreachableService).await.unwrap();

    let plan = session.toggle_sub_task("step1", "st1").unwrap();
    assert!(plan.steps[0].sub_tasks[0].done);

    session.reset();
    assert!(session.plan().is_none());
}

#[test]
fn test_open_restores_saved_plan() {
    let mut store = MemoryStore::default();
    store
        .set(SAVE_KEY, &serde_json::to_string(&fallback_plan()).unwrap())
        .unwrap();

    let session = Session::open(store);
    assert_eq!(session.plan(), Some(&fallback_plan()));
}

#[test]
fn test_open_ignores_corrupt_state() {
    let mut store = MemoryStore::default();
    store.set(SAVE_KEY, "{not json").unwrap();

    let session = Session::open(store);
    assert!(session.plan().is_none());
}
