//! Reaction count aggregation
//!
//! Attaches like/dislike totals to publications as a separate view; counts are
//! never stored on the publication itself.

use std::collections::HashMap;

use agora_core::entities::{AnnotatedPublication, Publication};
use agora_core::traits::UnitOfWork;
use tracing::instrument;
use uuid::Uuid;

use super::error::ServiceResult;

/// Annotate publications with their current counts, preserving input order.
///
/// One grouped query covers the whole batch; publications without reactions
/// get zero counts.
#[instrument(skip_all)]
pub async fn annotate_counts<I>(
    tx: &mut dyn UnitOfWork,
    publications: I,
) -> ServiceResult<Vec<AnnotatedPublication>>
where
    I: IntoIterator<Item = Publication>,
{
    let publications: Vec<Publication> = publications.into_iter().collect();
    if publications.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = publications.iter().map(|p| p.id).collect();
    let counts: HashMap<Uuid, _> = tx
        .reactions()
        .count_by_publications(&ids)
        .await?
        .into_iter()
        .collect();

    Ok(publications
        .into_iter()
        .map(|p| {
            let c = counts.get(&p.id).copied().unwrap_or_default();
            AnnotatedPublication::new(p, c)
        })
        .collect())
}

/// Annotate a single publication
pub async fn annotate_one(
    tx: &mut dyn UnitOfWork,
    publication: Publication,
) -> ServiceResult<AnnotatedPublication> {
    let mut annotated = annotate_counts(tx, [publication.clone()]).await?;
    Ok(annotated
        .pop()
        .unwrap_or_else(|| AnnotatedPublication::new(publication, Default::default())))
}
