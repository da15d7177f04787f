//! Quiz question selection
//!
//! Picks one question the player hasn't seen yet, uniformly at random.
//! The random source is passed in so selection can be seeded.

use std::sync::Mutex;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::models::{Question, QuestionFilter};
use crate::store::TriviaStore;

/// Category id the client sends for "all categories".
pub const ALL_CATEGORIES: i32 = 0;

/// Choose an unseen candidate, or `None` when every candidate was served.
pub fn select_next<'a, R>(
    candidates: &'a [Question],
    previous: &[i32],
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    unseen.choose(rng).copied()
}

/// Load the candidates for `category` and pick the next question.
///
/// `None` or [`ALL_CATEGORIES`] draws from every question. An unknown
/// category has no candidates and therefore yields `None`. The rng lock is
/// only taken once the candidates are loaded.
pub async fn next_question<R>(
    store: &dyn TriviaStore,
    category: Option<i32>,
    previous: &[i32],
    rng: &Mutex<R>,
) -> Result<Option<Question>>
where
    R: Rng + Send,
{
    let filter = match category {
        Some(id) if id != ALL_CATEGORIES => QuestionFilter::category(id),
        _ => QuestionFilter::all(),
    };

    let candidates = store.questions(&filter).await?;
    let next = {
        let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        select_next(&candidates, previous, &mut *rng).cloned()
    };

    tracing::debug!(
        candidates = candidates.len(),
        previous = previous.len(),
        selected = ?next.as_ref().map(|q| q.id),
        "quiz selection"
    );

    Ok(next)
}
