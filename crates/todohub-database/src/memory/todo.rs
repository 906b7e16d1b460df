//! In-memory todo store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use todohub_core::result::AppResult;
use todohub_core::types::{TodoId, UserId};
use todohub_entity::todo::{CreateTodo, Todo};

use crate::store::TodoStore;

#[derive(Debug, Clone)]
struct Slot {
    /// Insertion order; breaks ties between equal timestamps.
    seq: u64,
    todo: Todo,
}

/// Process-local [`TodoStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoStore {
    todos: Arc<DashMap<TodoId, Slot>>,
    next_seq: Arc<AtomicU64>,
}

impl MemoryTodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Todo>> {
        let mut slots: Vec<Slot> = self
            .todos
            .iter()
            .filter(|entry| entry.todo.is_owned_by(user_id))
            .map(|entry| entry.value().clone())
            .collect();

        slots.sort_by(|a, b| {
            b.todo
                .created_at
                .cmp(&a.todo.created_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });

        Ok(slots.into_iter().map(|slot| slot.todo).collect())
    }

    async fn create(&self, data: CreateTodo) -> AppResult<Todo> {
        let todo = data.into_todo();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.todos.insert(
            todo.id,
            Slot {
                seq,
                todo: todo.clone(),
            },
        );
        Ok(todo)
    }

    async fn toggle(&self, id: TodoId, user_id: UserId) -> AppResult<Option<Todo>> {
        let Some(mut slot) = self.todos.get_mut(&id) else {
            return Ok(None);
        };
        if !slot.todo.is_owned_by(user_id) {
            return Ok(None);
        }
        slot.todo.completed = !slot.todo.completed;
        Ok(Some(slot.todo.clone()))
    }

    async fn delete(&self, id: TodoId, user_id: UserId) -> AppResult<bool> {
        Ok(self
            .todos
            .remove_if(&id, |_, slot| slot.todo.is_owned_by(user_id))
            .is_some())
    }
}
