//! User service
//!
//! Account creation, profile lookup, partial updates and account removal.

use agora_core::entities::{User, UserProfile};
use agora_core::error::DomainError;
use agora_core::traits::UnitOfWork;
use tracing::{info, instrument};
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::publication::delete_cascade;

/// Input for creating a user. The password arrives already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub last_name: String,
    pub mail: String,
    pub bio: Option<String>,
    pub password_hash: Option<String>,
    pub degree_id: i32,
}

/// Partial update; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub degree_id: Option<i32>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.last_name.is_none()
            && self.bio.is_none()
            && self.degree_id.is_none()
    }
}

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn create(&self, input: NewUser) -> ServiceResult<User> {
        let mut tx = self.ctx.begin().await?;
        let user = create(tx.as_mut(), input).await?;
        tx.commit().await?;
        Ok(user)
    }

    pub async fn get_profile(&self, user_id: Uuid) -> ServiceResult<UserProfile> {
        let mut tx = self.ctx.begin().await?;
        let profile = get_profile(tx.as_mut(), user_id).await?;
        Ok(profile)
    }

    pub async fn update(&self, user_id: Uuid, changes: UserChanges) -> ServiceResult<User> {
        let mut tx = self.ctx.begin().await?;
        let user = update(tx.as_mut(), user_id, changes).await?;
        tx.commit().await?;
        Ok(user)
    }

    pub async fn delete(&self, user_id: Uuid) -> ServiceResult<()> {
        let mut tx = self.ctx.begin().await?;
        delete(tx.as_mut(), user_id).await?;
        tx.commit().await?;
        Ok(())
    }
}

async fn ensure_degree(tx: &mut dyn UnitOfWork, degree_id: i32) -> ServiceResult<()> {
    if tx.degrees().find_by_id(degree_id).await?.is_none() {
        return Err(DomainError::UnknownDegree(degree_id).into());
    }
    Ok(())
}

async fn load(tx: &mut dyn UnitOfWork, user_id: Uuid) -> ServiceResult<User> {
    Ok(tx
        .users()
        .find_by_id(user_id)
        .await?
        .ok_or(DomainError::UserNotFound(user_id))?)
}

#[instrument(skip(tx, input), fields(mail = %input.mail))]
pub async fn create(tx: &mut dyn UnitOfWork, input: NewUser) -> ServiceResult<User> {
    ensure_degree(tx, input.degree_id).await?;
    if tx.users().email_exists(&input.mail).await? {
        return Err(DomainError::EmailAlreadyExists.into());
    }

    let user = User::new(input.name, input.last_name, input.mail, input.degree_id)
        .with_bio(input.bio)
        .with_password_hash(input.password_hash);
    tx.users().create(&user).await?;

    info!(user_id = %user.id, "User created");
    Ok(user)
}

/// Public profile with the degree title resolved
#[instrument(skip(tx))]
pub async fn get_profile(tx: &mut dyn UnitOfWork, user_id: Uuid) -> ServiceResult<UserProfile> {
    let user = load(tx, user_id).await?;
    let degree = tx.degrees().find_by_id(user.degree_id).await?;
    Ok(UserProfile::new(&user, degree.map(|d| d.title)))
}

#[instrument(skip(tx, changes))]
pub async fn update(
    tx: &mut dyn UnitOfWork,
    user_id: Uuid,
    changes: UserChanges,
) -> ServiceResult<User> {
    let mut user = load(tx, user_id).await?;
    if changes.is_empty() {
        return Ok(user);
    }

    if let Some(degree_id) = changes.degree_id {
        ensure_degree(tx, degree_id).await?;
        user.degree_id = degree_id;
    }
    if let Some(name) = changes.name {
        user.name = name;
    }
    if let Some(last_name) = changes.last_name {
        user.last_name = last_name;
    }
    if let Some(bio) = changes.bio {
        user.bio = Some(bio);
    }

    tx.users().update(&user).await?;
    info!(%user_id, "User updated");
    Ok(user)
}

/// Remove a user together with everything they own.
///
/// Order: the user's own reactions, then each owned publication with its
/// reactions and tag links, then the user row.
#[instrument(skip(tx))]
pub async fn delete(tx: &mut dyn UnitOfWork, user_id: Uuid) -> ServiceResult<()> {
    load(tx, user_id).await?;

    let reactions = tx.reactions().delete_by_user(user_id).await?;
    let owned = tx.publications().find_by_user(user_id).await?;
    for publication in &owned {
        delete_cascade(tx, publication.id).await?;
    }
    tx.users().delete(user_id).await?;

    info!(%user_id, reactions, publications = owned.len(), "User deleted");
    Ok(())
}
