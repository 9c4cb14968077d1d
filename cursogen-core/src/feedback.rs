//! Feedback capture for generated courses

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::model::{CourseRecord, Feedback};
use crate::store::CourseStore;

#[derive(Debug, Error)]
pub enum FeedbackError {
    /// Rating outside the accepted 1 to 5 range
    #[error("Avaliação fora do intervalo: {rating} (esperado de 1 a 5)")]
    InvalidRating { rating: u8 },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl FeedbackError {
    /// True when the caller sent something invalid, as opposed to the
    /// store failing
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRating { .. })
    }
}

/// Record a rating and comments against a stored course.
///
/// Rating again replaces the earlier feedback.
pub async fn record_feedback(
    store: &CourseStore,
    id: Uuid,
    rating: u8,
    comments: impl Into<String>,
) -> Result<CourseRecord, FeedbackError> {
    if !(1..=5).contains(&rating) {
        return Err(FeedbackError::InvalidRating { rating });
    }

    let mut record = store.load(id).await?;
    record.curso.feedback = Some(Feedback::new(rating, comments.into()));
    store.save(&record).await?;
    info!("Recorded feedback {}/5 for course {}", rating, id);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    async fn stored_course(dir: &tempfile::TempDir) -> (CourseStore, Uuid) {
        let store = CourseStore::open(dir.path()).await.unwrap();
        let record = CourseRecord::new(fixtures::curso());
        let id = record.id;
        store.save(&record).await.unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn test_feedback_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let (store, id) = stored_course(&dir).await;

        record_feedback(&store, id, 4, "Conteúdo claro e bem organizado").await.unwrap();

        let feedback = store.load(id).await.unwrap().curso.feedback.unwrap();
        assert_eq!(feedback.rating, 4);
        assert_eq!(feedback.comments, "Conteúdo claro e bem organizado");
    }

    #[tokio::test]
    async fn test_out_of_range_ratings_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (store, id) = stored_course(&dir).await;

        for rating in [0, 6, 200] {
            let err = record_feedback(&store, id, rating, "").await.unwrap_err();
            assert!(err.is_client_error());
            assert!(err.to_string().contains("Avaliação fora do intervalo"));
        }
        assert!(store.load(id).await.unwrap().curso.feedback.is_none());
    }

    #[tokio::test]
    async fn test_rating_again_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let (store, id) = stored_course(&dir).await;

        record_feedback(&store, id, 2, "Raso demais").await.unwrap();
        record_feedback(&store, id, 5, "Muito melhor após revisão").await.unwrap();

        let feedback = store.load(id).await.unwrap().curso.feedback.unwrap();
        assert_eq!(feedback.rating, 5);
        assert_eq!(feedback.comments, "Muito melhor após revisão");
    }

    #[tokio::test]
    async fn test_unknown_course_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CourseStore::open(dir.path()).await.unwrap();

        let err = record_feedback(&store, Uuid::new_v4(), 3, "").await.unwrap_err();
        assert!(!err.is_client_error());
    }
}
