//! Publication entity <-> model mapper

use agora_core::entities::Publication;

use crate::models::PublicationModel;

/// Convert PublicationModel to Publication entity
impl From<PublicationModel> for Publication {
    fn from(model: PublicationModel) -> Self {
        Publication {
            id: model.id,
            title: model.title,
            content: model.content,
            created_at: model.created_at,
            user_id: model.user_id,
            page_id: model.page_id,
            tag_ids: model.tag_ids,
        }
    }
}
