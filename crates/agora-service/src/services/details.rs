//! Publication detail resolution
//!
//! Expands annotated publications with the author, page and tag rows they
//! reference. Each referenced table is read once per batch.

use std::collections::HashMap;

use agora_core::entities::{AnnotatedPublication, AuthorSummary, Page, PublicationDetails, Tag};
use agora_core::error::DomainError;
use agora_core::traits::UnitOfWork;
use tracing::instrument;
use uuid::Uuid;

use super::error::{ServiceError, ServiceResult};

/// Resolve author, page and tags for every publication, preserving input order.
///
/// # Errors
/// `InternalError` if a publication points at a user or page that is gone,
/// which the foreign keys rule out inside one transaction.
#[instrument(skip_all, fields(count = annotated.len()))]
pub async fn resolve_details(
    tx: &mut dyn UnitOfWork,
    annotated: Vec<AnnotatedPublication>,
) -> ServiceResult<Vec<PublicationDetails>> {
    if annotated.is_empty() {
        return Ok(Vec::new());
    }

    let user_ids = distinct(annotated.iter().map(|a| a.publication.user_id));
    let page_ids = distinct(annotated.iter().map(|a| a.publication.page_id));
    let tag_ids = distinct(
        annotated
            .iter()
            .flat_map(|a| a.publication.tag_ids.iter().copied()),
    );

    let authors: HashMap<Uuid, AuthorSummary> = tx
        .users()
        .find_by_ids(&user_ids)
        .await?
        .iter()
        .map(|u| (u.id, AuthorSummary::from(u)))
        .collect();
    let pages: HashMap<i32, Page> = tx
        .pages()
        .find_by_ids(&page_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    let tags_by_id: HashMap<i32, Tag> = tx
        .tags()
        .find_by_ids(&tag_ids)
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect();

    annotated
        .into_iter()
        .map(|AnnotatedPublication { publication, counts }| -> ServiceResult<_> {
            let author = authors
                .get(&publication.user_id)
                .cloned()
                .ok_or_else(|| dangling(publication.id, "user", publication.user_id))?;
            let page = pages
                .get(&publication.page_id)
                .cloned()
                .ok_or_else(|| dangling(publication.id, "page", publication.page_id))?;
            let tags = publication
                .tag_ids
                .iter()
                .filter_map(|id| tags_by_id.get(id).cloned())
                .collect();

            Ok(PublicationDetails {
                publication,
                counts,
                author,
                page,
                tags,
            })
        })
        .collect()
}

/// Resolve a single publication
pub async fn resolve_one(
    tx: &mut dyn UnitOfWork,
    annotated: AnnotatedPublication,
) -> ServiceResult<PublicationDetails> {
    let id = annotated.publication.id;
    resolve_details(tx, vec![annotated])
        .await?
        .pop()
        .ok_or_else(|| DomainError::InternalError(format!("publication {id} did not resolve")).into())
}

fn distinct<T: Ord>(keys: impl Iterator<Item = T>) -> Vec<T> {
    let mut keys: Vec<T> = keys.collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

fn dangling(publication_id: Uuid, table: &str, key: impl std::fmt::Display) -> ServiceError {
    DomainError::InternalError(format!(
        "publication {publication_id} references missing {table} {key}"
    ))
    .into()
}
