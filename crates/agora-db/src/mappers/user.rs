//! User entity <-> model mapper

use agora_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            last_name: model.last_name,
            bio: model.bio,
            mail: model.mail,
            password_hash: model.password_hash,
            degree_id: model.degree_id,
        }
    }
}
