use crate::{crud_api, value_router};
use mvr_dal::genre::{CreateGenre, GenreRepository};

crud_api!(GenreRepository, CreateGenre);

value_router!();
