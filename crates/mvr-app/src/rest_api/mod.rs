pub mod customer;
pub mod genre;

#[macro_export]
macro_rules! crud_api {
    ($repository:ty, $create_type:ty) => {
        crate::repository_from_request!($repository);
        pub mod crud_api {
            use super::*;
            use crate::error::ApiResult;
            use crate::state::AppState;
            use crate::validate::Garde;
            use axum::{
                extract::{Path, State},
                response::IntoResponse,
                Json,
            };
            use http::StatusCode;

            pub async fn create(
                repository: $repository,
                Garde(Json(payload)): Garde<Json<$create_type>>,
            ) -> ApiResult<impl IntoResponse> {
                let record = repository.create(payload).await?;

                Ok((StatusCode::OK, Json(record)))
            }

            pub async fn list(
                repository: $repository,
                State(state): State<AppState>,
            ) -> ApiResult<impl IntoResponse> {
                let records = repository.list(state.config().list_limit).await?;
                Ok((StatusCode::OK, Json(records)))
            }

            pub async fn get(
                Path(id): Path<i64>,
                repository: $repository,
            ) -> ApiResult<impl IntoResponse> {
                let record = repository.get(id).await?;

                Ok((StatusCode::OK, Json(record)))
            }

            pub async fn update(
                Path(id): Path<i64>,
                repository: $repository,
                Garde(Json(payload)): Garde<Json<$create_type>>,
            ) -> ApiResult<impl IntoResponse> {
                let record = repository.update(id, payload).await?;

                Ok((StatusCode::OK, Json(record)))
            }

            pub async fn delete(
                Path(id): Path<i64>,
                repository: $repository,
            ) -> ApiResult<impl IntoResponse> {
                let record = repository.delete(id).await?;

                Ok((StatusCode::OK, Json(record)))
            }
        }
    };
}

#[macro_export]
macro_rules! value_router {
    () => {
        pub fn router() -> axum::Router<$crate::state::AppState> {
            use axum::routing::{get, post};
            axum::Router::new()
                .route("/", post(crud_api::create).get(crud_api::list))
                .route(
                    "/{id}",
                    get(crud_api::get)
                        .put(crud_api::update)
                        .delete(crud_api::delete),
                )
        }
    };
}
