//! Entity and DTO conversions
//!
//! Requests convert into service inputs; domain entities convert into
//! response DTOs.

use agora_core::entities::{
    AuthorSummary, Degree, NewPublication, Page, PublicationChanges, PublicationDetails,
    ReactionStatus, Tag, User, UserProfile,
};
use uuid::Uuid;

use super::requests::{
    CreatePublicationRequest, CreateUserRequest, UpdatePublicationRequest, UpdateUserRequest,
};
use super::responses::{
    AuthorResponse, DegreeResponse, PageResponse, PublicationResponse, ReactionStatusResponse,
    TagResponse, UserProfileResponse, UserResponse,
};
use crate::services::user::{NewUser, UserChanges};

// ============================================================================
// Request Mappers
// ============================================================================

impl CreatePublicationRequest {
    /// Service input authored by `author_id`, the authenticated caller
    pub fn into_new_publication(self, author_id: Uuid) -> NewPublication {
        NewPublication {
            title: self.title,
            content: self.content,
            user_id: author_id,
            page_id: self.page_id,
            tag_ids: self.tag_ids,
        }
    }
}

impl From<UpdatePublicationRequest> for PublicationChanges {
    fn from(req: UpdatePublicationRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            page_id: req.page_id,
            tag_ids: req.tag_ids,
        }
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            last_name: req.last_name,
            mail: req.mail,
            bio: req.bio,
            password_hash: req.password_hash,
            degree_id: req.degree_id,
        }
    }
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            last_name: req.last_name,
            bio: req.bio,
            degree_id: req.degree_id,
        }
    }
}

// ============================================================================
// Publication Mappers
// ============================================================================

impl From<PublicationDetails> for PublicationResponse {
    fn from(details: PublicationDetails) -> Self {
        let PublicationDetails {
            publication,
            counts,
            author,
            page,
            tags,
        } = details;
        Self {
            id: publication.id,
            title: publication.title,
            content: publication.content,
            created_at: publication.created_at,
            user_id: publication.user_id,
            user: author.into(),
            page_id: publication.page_id,
            page: page.into(),
            tag_ids: publication.tag_ids,
            tags: to_responses(tags),
            likes_count: counts.likes,
            dislikes_count: counts.dislikes,
        }
    }
}

impl From<AuthorSummary> for AuthorResponse {
    fn from(author: AuthorSummary) -> Self {
        Self {
            name: author.name,
            last_name: author.last_name,
            mail: author.mail,
            bio: author.bio,
            degree_id: author.degree_id,
        }
    }
}

impl From<ReactionStatus> for ReactionStatusResponse {
    fn from(status: ReactionStatus) -> Self {
        Self {
            exists: status.exists,
            reaction_type: status.kind,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            last_name: user.last_name.clone(),
            mail: user.mail.clone(),
            bio: user.bio.clone(),
            degree_id: user.degree_id,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            name: profile.name,
            last_name: profile.last_name,
            mail: profile.mail,
            bio: profile.bio,
            degree_title: profile.degree_title,
        }
    }
}

// ============================================================================
// Catalog Mappers
// ============================================================================

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            title: tag.title,
            description: tag.description,
        }
    }
}

impl From<Page> for PageResponse {
    fn from(page: Page) -> Self {
        Self {
            id: page.id,
            url: page.url,
        }
    }
}

impl From<Degree> for DegreeResponse {
    fn from(degree: Degree) -> Self {
        Self {
            id: degree.id,
            title: degree.title,
        }
    }
}

/// Convert a list of entities into response DTOs
pub fn to_responses<T, R>(items: Vec<T>) -> Vec<R>
where
    R: From<T>,
{
    items.into_iter().map(R::from).collect()
}
