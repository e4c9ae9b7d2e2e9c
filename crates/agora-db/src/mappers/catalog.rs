//! Reference data entity <-> model mappers

use agora_core::entities::{Degree, Page, Tag};

use crate::models::{DegreeModel, PageModel, TagModel};

impl From<DegreeModel> for Degree {
    fn from(model: DegreeModel) -> Self {
        Degree {
            id: model.id,
            title: model.title,
        }
    }
}

impl From<PageModel> for Page {
    fn from(model: PageModel) -> Self {
        Page {
            id: model.id,
            url: model.url,
        }
    }
}

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: model.id,
            title: model.title,
            description: model.description,
        }
    }
}
