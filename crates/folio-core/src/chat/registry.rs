//! In-memory registry of live conversations.
//!
//! Conversations are never persisted. The registry is bounded: once it holds
//! `capacity` conversations, starting a new one evicts the oldest.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use super::exchange::Conversation;

pub struct ConversationRegistry {
    conversations: DashMap<Uuid, Arc<Conversation>>,
    capacity: usize,
}

impl ConversationRegistry {
    /// `capacity` is clamped to at least one.
    pub fn new(capacity: usize) -> Self {
        Self {
            conversations: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Store `conversation`, evicting the oldest ones if the registry is full.
    pub fn insert(&self, conversation: Conversation) -> Arc<Conversation> {
        while self.conversations.len() >= self.capacity {
            if !self.evict_oldest() {
                break;
            }
        }

        let conversation = Arc::new(conversation);
        self.conversations
            .insert(conversation.id(), Arc::clone(&conversation));
        conversation
    }

    pub fn get(&self, id: &Uuid) -> Option<Arc<Conversation>> {
        self.conversations.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    fn evict_oldest(&self) -> bool {
        let oldest = self
            .conversations
            .iter()
            .min_by_key(|entry| (entry.value().started_at(), *entry.key()))
            .map(|entry| *entry.key());

        match oldest {
            Some(id) => {
                self.conversations.remove(&id);
                debug!(conversation_id = %id, "evicted oldest conversation");
                true
            }
            None => false,
        }
    }
}
