//! In-memory question store
//!
//! Used when no database is configured and throughout the HTTP tests.
//! Questions are listed in insertion order.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    db::store::{QuestionStore, StoreError, StoreResult},
    models::{Question, QuestionId},
};

#[derive(Default)]
struct Inner {
    /// Insertion sequence -> question
    questions: BTreeMap<u64, Question>,
    /// Question id -> insertion sequence
    index: HashMap<QuestionId, u64>,
    next_seq: u64,
}

/// Question store backed by process memory
#[derive(Default)]
pub struct InMemoryQuestionStore {
    inner: RwLock<Inner>,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with questions. Questions without an id
    /// get one assigned.
    pub fn with_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let mut inner = Inner::default();
        for mut question in questions {
            let id = question.id.get_or_insert_with(QuestionId::generate).clone();
            let seq = inner.next_seq;
            inner.next_seq += 1;
            inner.index.insert(id, seq);
            inner.questions.insert(seq, question);
        }

        Self {
            inner: RwLock::new(inner),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.questions.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, id: &QuestionId) -> StoreResult<Option<Question>> {
        let inner = self.inner.read().await;
        Ok(inner
            .index
            .get(id)
            .and_then(|seq| inner.questions.get(seq))
            .cloned())
    }

    async fn list(&self, theme: Option<String>, pvt: Option<bool>) -> StoreResult<Vec<Question>> {
        let inner = self.inner.read().await;
        Ok(inner
            .questions
            .values()
            .filter(|q| theme.as_deref().is_none_or(|theme| q.theme == theme))
            .filter(|q| pvt.is_none_or(|pvt| q.pvt == pvt))
            .cloned()
            .collect())
    }

    async fn add(&self, mut question: Question) -> StoreResult<QuestionId> {
        let mut inner = self.inner.write().await;

        match question.id.clone() {
            Some(id) => {
                let seq = *inner
                    .index
                    .get(&id)
                    .ok_or_else(|| StoreError::NotFound(id.clone()))?;
                debug!(question_id = %id, "Replacing question");
                inner.questions.insert(seq, question);
                Ok(id)
            }
            None => {
                let id = QuestionId::generate();
                question.id = Some(id.clone());
                let seq = inner.next_seq;
                inner.next_seq += 1;
                inner.index.insert(id.clone(), seq);
                inner.questions.insert(seq, question);
                debug!(question_id = %id, "Inserted question");
                Ok(id)
            }
        }
    }

    async fn remove(&self, id: &QuestionId) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let seq = inner
            .index
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        inner.questions.remove(&seq);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn question(id: Option<&str>, theme: &str, pvt: bool) -> Question {
        Question {
            id: id.map(QuestionId::from),
            theme: theme.to_string(),
            description: format!("{} question", theme),
            statement: None,
            record: None,
            pvt,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id() {
        let store = InMemoryQuestionStore::new();
        let id = store.add(question(None, "Logic", false)).await.unwrap();

        let stored = store.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.theme, "Logic");
    }

    #[tokio::test]
    async fn test_add_with_id_replaces() {
        let store = InMemoryQuestionStore::with_questions([question(Some("1"), "Logic", false)]);

        let mut updated = question(Some("1"), "Sets", true);
        updated.statement = Some("Prove it".to_string());
        store.add(updated.clone()).await.unwrap();

        assert_eq!(store.get(&"1".into()).await.unwrap(), Some(updated));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_add_with_unknown_id_fails() {
        let store = InMemoryQuestionStore::new();
        let result = store.add(question(Some("missing"), "Logic", false)).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_filters_and_keeps_order() {
        let store = InMemoryQuestionStore::with_questions([
            question(Some("1"), "Logic", false),
            question(Some("2"), "Logic", true),
            question(Some("3"), "Sets", false),
        ]);

        let ids = |questions: Vec<Question>| -> Vec<String> {
            questions
                .into_iter()
                .map(|q| q.id.unwrap().0)
                .collect()
        };

        assert_eq!(ids(store.list(None, None).await.unwrap()), ["1", "2", "3"]);
        assert_eq!(ids(store.list(None, Some(false)).await.unwrap()), ["1", "3"]);
        assert_eq!(
            ids(store.list(Some("Logic".to_string()), None).await.unwrap()),
            ["1", "2"]
        );
        assert_eq!(
            ids(store.list(Some("Logic".to_string()), Some(true)).await.unwrap()),
            ["2"]
        );
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryQuestionStore::with_questions([question(Some("1"), "Logic", false)]);

        store.remove(&"1".into()).await.unwrap();
        assert!(store.get(&"1".into()).await.unwrap().is_none());
        assert!(matches!(
            store.remove(&"1".into()).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_statistics_from_record() {
        let mut graded = question(Some("1"), "Logic", false);
        graded.record = Some(BTreeMap::from([(
            "2019/1".to_string(),
            BTreeMap::from([
                ("ana".to_string(), 4.0),
                ("bia".to_string(), 6.0),
                ("caio".to_string(), 8.0),
            ]),
        )]));
        let store = InMemoryQuestionStore::with_questions([graded]);

        let stats = store.statistics(&"1".into()).await.unwrap().unwrap();
        assert_eq!(stats.average, 6.0);
        assert_eq!(stats.median, 6.0);

        assert!(store.statistics(&"2".into()).await.unwrap().is_none());
    }
}
