use crate::shared::crud::ReadService;
use contracts::domain::a007_media::aggregate::Media;

/// The media library is read-only from this client: list and get only
impl ReadService for Media {}
