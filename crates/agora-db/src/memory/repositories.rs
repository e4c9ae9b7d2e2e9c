//! In-memory repository implementations operating on a transaction's working copy

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use agora_core::entities::{
    Degree, Page, Publication, Reaction, ReactionCounts, ReactionKind, Tag, User,
};
use agora_core::error::DomainError;
use agora_core::traits::{
    DegreeRepository, PageRepository, PublicationRepository, ReactionRepository, RepoResult,
    TagRepository, UserRepository,
};

use super::state::{duplicate_key, still_referenced, MemoryState};

pub struct MemoryUserRepository<'s> {
    pub(super) state: &'s mut MemoryState,
}

#[async_trait]
impl UserRepository for MemoryUserRepository<'_> {
    async fn find_by_id(&mut self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.state.users.get(&id).cloned())
    }

    async fn find_by_ids(&mut self, ids: &[Uuid]) -> RepoResult<Vec<User>> {
        Ok(self
            .state
            .users
            .values()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn lock(&mut self, id: Uuid) -> RepoResult<bool> {
        // The working copy is already exclusive to this transaction
        Ok(self.state.users.contains_key(&id))
    }

    async fn email_exists(&mut self, mail: &str) -> RepoResult<bool> {
        Ok(self.state.users.values().any(|u| u.mail == mail))
    }

    async fn create(&mut self, user: &User) -> RepoResult<()> {
        if self.state.users.values().any(|u| u.mail == user.mail) {
            return Err(DomainError::EmailAlreadyExists);
        }
        if self.state.users.contains_key(&user.id) {
            return Err(duplicate_key("users"));
        }
        self.state.ensure_degree(user.degree_id)?;
        self.state.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn update(&mut self, user: &User) -> RepoResult<()> {
        self.state.ensure_degree(user.degree_id)?;
        let row = self
            .state
            .users
            .get_mut(&user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        row.name.clone_from(&user.name);
        row.last_name.clone_from(&user.last_name);
        row.bio.clone_from(&user.bio);
        row.degree_id = user.degree_id;
        Ok(())
    }

    async fn delete(&mut self, id: Uuid) -> RepoResult<()> {
        if self.state.user_is_referenced(id) {
            return Err(still_referenced("user", id));
        }
        self.state.users.remove(&id);
        Ok(())
    }
}

pub struct MemoryDegreeRepository<'s> {
    pub(super) state: &'s mut MemoryState,
}

#[async_trait]
impl DegreeRepository for MemoryDegreeRepository<'_> {
    async fn find_by_id(&mut self, id: i32) -> RepoResult<Option<Degree>> {
        Ok(self.state.degrees.get(&id).cloned())
    }

    async fn find_all(&mut self) -> RepoResult<Vec<Degree>> {
        Ok(self.state.degrees.values().cloned().collect())
    }

    async fn create(&mut self, title: &str) -> RepoResult<Degree> {
        self.state.next_degree_id += 1;
        let degree = Degree {
            id: self.state.next_degree_id,
            title: title.to_string(),
        };
        self.state.degrees.insert(degree.id, degree.clone());
        Ok(degree)
    }
}

pub struct MemoryPageRepository<'s> {
    pub(super) state: &'s mut MemoryState,
}

#[async_trait]
impl PageRepository for MemoryPageRepository<'_> {
    async fn find_by_id(&mut self, id: i32) -> RepoResult<Option<Page>> {
        Ok(self.state.pages.get(&id).cloned())
    }

    async fn find_by_ids(&mut self, ids: &[i32]) -> RepoResult<Vec<Page>> {
        Ok(self
            .state
            .pages
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn find_all(&mut self) -> RepoResult<Vec<Page>> {
        Ok(self.state.pages.values().cloned().collect())
    }

    async fn create(&mut self, url: &str) -> RepoResult<Page> {
        self.state.next_page_id += 1;
        let page = Page {
            id: self.state.next_page_id,
            url: url.to_string(),
        };
        self.state.pages.insert(page.id, page.clone());
        Ok(page)
    }
}

pub struct MemoryTagRepository<'s> {
    pub(super) state: &'s mut MemoryState,
}

#[async_trait]
impl TagRepository for MemoryTagRepository<'_> {
    async fn find_all(&mut self) -> RepoResult<Vec<Tag>> {
        Ok(self.state.tags.values().cloned().collect())
    }

    async fn find_by_ids(&mut self, ids: &[i32]) -> RepoResult<Vec<Tag>> {
        Ok(self
            .state
            .tags
            .values()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn find_existing_ids(&mut self, ids: &[i32]) -> RepoResult<Vec<i32>> {
        let mut found: Vec<i32> = ids
            .iter()
            .copied()
            .filter(|id| self.state.tags.contains_key(id))
            .collect();
        found.sort_unstable();
        found.dedup();
        Ok(found)
    }

    async fn find_by_publication(&mut self, publication_id: Uuid) -> RepoResult<Vec<Tag>> {
        Ok(self
            .state
            .publication_tags
            .iter()
            .filter(|(p, _)| *p == publication_id)
            .filter_map(|(_, tag_id)| self.state.tags.get(tag_id).cloned())
            .collect())
    }

    async fn create(&mut self, title: Option<&str>, description: Option<&str>) -> RepoResult<Tag> {
        self.state.next_tag_id += 1;
        let tag = Tag {
            id: self.state.next_tag_id,
            title: title.map(String::from),
            description: description.map(String::from),
        };
        self.state.tags.insert(tag.id, tag.clone());
        Ok(tag)
    }
}

pub struct MemoryPublicationRepository<'s> {
    pub(super) state: &'s mut MemoryState,
}

#[async_trait]
impl PublicationRepository for MemoryPublicationRepository<'_> {
    async fn find_by_id(&mut self, id: Uuid) -> RepoResult<Option<Publication>> {
        Ok(self
            .state
            .publication_index(id)
            .map(|i| self.state.hydrate(&self.state.publications[i])))
    }

    async fn exists(&mut self, id: Uuid) -> RepoResult<bool> {
        Ok(self.state.publication_index(id).is_some())
    }

    async fn find_all(&mut self) -> RepoResult<Vec<Publication>> {
        Ok(self.state.select_publications(|_| true))
    }

    async fn find_by_page(&mut self, page_id: i32) -> RepoResult<Vec<Publication>> {
        Ok(self.state.select_publications(|p| p.page_id == page_id))
    }

    async fn find_by_user(&mut self, user_id: Uuid) -> RepoResult<Vec<Publication>> {
        Ok(self.state.select_publications(|p| p.user_id == user_id))
    }

    async fn find_by_tags(&mut self, tag_ids: &[i32]) -> RepoResult<Vec<Publication>> {
        let tags = &self.state.publication_tags;
        Ok(self.state.select_publications(|p| {
            tag_ids.iter().any(|tag_id| tags.contains(&(p.id, *tag_id)))
        }))
    }

    async fn find_by_user_reaction(
        &mut self,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> RepoResult<Vec<Publication>> {
        let mut matched: Vec<&Reaction> = self
            .state
            .reactions
            .values()
            .filter(|r| r.user_id == user_id && r.kind == kind)
            .collect();
        matched.sort_by_key(|r| (r.reacted_at, r.publication_id));

        Ok(matched
            .into_iter()
            .filter_map(|r| self.state.publication_index(r.publication_id))
            .map(|i| self.state.hydrate(&self.state.publications[i]))
            .collect())
    }

    async fn create(&mut self, publication: &Publication) -> RepoResult<()> {
        if self.state.publication_index(publication.id).is_some() {
            return Err(duplicate_key("publications"));
        }
        self.state.ensure_user(publication.user_id)?;
        self.state.ensure_page(publication.page_id)?;

        let mut row = publication.clone();
        row.tag_ids.clear();
        self.state.publications.push(row);
        Ok(())
    }

    async fn update(&mut self, publication: &Publication) -> RepoResult<()> {
        self.state.ensure_page(publication.page_id)?;
        let index = self
            .state
            .publication_index(publication.id)
            .ok_or(DomainError::PublicationNotFound(publication.id))?;

        let row = &mut self.state.publications[index];
        row.title.clone_from(&publication.title);
        row.content.clone_from(&publication.content);
        row.page_id = publication.page_id;
        Ok(())
    }

    async fn delete(&mut self, id: Uuid) -> RepoResult<()> {
        if self.state.publication_is_referenced(id) {
            return Err(still_referenced("publication", id));
        }
        self.state.publications.retain(|p| p.id != id);
        Ok(())
    }

    async fn add_tags(&mut self, publication_id: Uuid, tag_ids: &[i32]) -> RepoResult<()> {
        self.state.ensure_publication(publication_id)?;
        for tag_id in tag_ids {
            self.state.ensure_tag(*tag_id)?;
            if !self.state.publication_tags.insert((publication_id, *tag_id)) {
                return Err(duplicate_key("publication_tags"));
            }
        }
        Ok(())
    }

    async fn clear_tags(&mut self, publication_id: Uuid) -> RepoResult<()> {
        self.state
            .publication_tags
            .retain(|(p, _)| *p != publication_id);
        Ok(())
    }
}

pub struct MemoryReactionRepository<'s> {
    pub(super) state: &'s mut MemoryState,
}

#[async_trait]
impl ReactionRepository for MemoryReactionRepository<'_> {
    async fn find(&mut self, user_id: Uuid, publication_id: Uuid) -> RepoResult<Option<Reaction>> {
        Ok(self.state.reactions.get(&(user_id, publication_id)).cloned())
    }

    async fn create(&mut self, reaction: &Reaction) -> RepoResult<()> {
        let key = (reaction.user_id, reaction.publication_id);
        if self.state.reactions.contains_key(&key) {
            return Err(duplicate_key("reactions"));
        }
        self.state.ensure_user(reaction.user_id)?;
        self.state.ensure_publication(reaction.publication_id)?;
        self.state.reactions.insert(key, reaction.clone());
        Ok(())
    }

    async fn update(&mut self, reaction: &Reaction) -> RepoResult<()> {
        if let Some(row) = self
            .state
            .reactions
            .get_mut(&(reaction.user_id, reaction.publication_id))
        {
            row.kind = reaction.kind;
            row.reacted_at = reaction.reacted_at;
        }
        Ok(())
    }

    async fn delete(&mut self, user_id: Uuid, publication_id: Uuid) -> RepoResult<()> {
        self.state.reactions.remove(&(user_id, publication_id));
        Ok(())
    }

    async fn delete_by_publication(&mut self, publication_id: Uuid) -> RepoResult<u64> {
        let before = self.state.reactions.len();
        self.state
            .reactions
            .retain(|(_, p), _| *p != publication_id);
        Ok((before - self.state.reactions.len()) as u64)
    }

    async fn delete_by_user(&mut self, user_id: Uuid) -> RepoResult<u64> {
        let before = self.state.reactions.len();
        self.state.reactions.retain(|(u, _), _| *u != user_id);
        Ok((before - self.state.reactions.len()) as u64)
    }

    async fn count_by_publications(
        &mut self,
        publication_ids: &[Uuid],
    ) -> RepoResult<Vec<(Uuid, ReactionCounts)>> {
        let mut counts: HashMap<Uuid, ReactionCounts> = HashMap::new();
        for reaction in self.state.reactions.values() {
            if !publication_ids.contains(&reaction.publication_id) {
                continue;
            }
            let entry = counts.entry(reaction.publication_id).or_default();
            match reaction.kind {
                ReactionKind::Like => entry.likes += 1,
                ReactionKind::Dislike => entry.dislikes += 1,
            }
        }
        Ok(counts.into_iter().collect())
    }
}
