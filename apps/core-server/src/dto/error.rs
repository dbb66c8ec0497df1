use axum::Json;
use axum::extract::rejection::{BytesRejection, JsonRejection, PathRejection};
use axum::extract::path::ErrorKind;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use one_dto_mapper::From;
use rbac_core::service::error::{self, ServiceError};
use serde::Serialize;
use utoipa::ToSchema;

use super::response::ErrorResponse;

#[derive(Serialize, From, ToSchema)]
#[schema(example = "BR_XXXX")]
#[from("rbac_core::service::error::ErrorCode")]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
    BR_0047,
    BR_0054,
    BR_0084,
}

const GENERAL_INPUT_VALIDATION: &str = "General input validation error";

#[derive(Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

impl ErrorResponseRestDTO {
    pub fn input_validation(error: &impl std::error::Error) -> ErrorResponseRestDTO {
        Self {
            code: ErrorCode::BR_0084,
            message: GENERAL_INPUT_VALIDATION.to_string(),
            cause: Some(Cause::with_message_from_error(error)),
        }
    }

    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.cause = None;
        }

        self
    }
}

#[derive(Serialize, ToSchema)]
pub struct Cause {
    pub message: String,
}

impl Cause {
    pub fn with_message_from_error(error: &impl std::error::Error) -> Cause {
        Cause {
            message: error.to_string(),
        }
    }
}

impl From<&ServiceError> for ErrorResponseRestDTO {
    fn from(error: &ServiceError) -> Self {
        let code = error.error_code();
        let message = match error {
            // names the offending field
            ServiceError::Validation(validation) => validation.to_string(),
            _ => code.msg().to_string(),
        };

        Self {
            code: code.into(),
            message,
            cause: Some(Cause::with_message_from_error(error)),
        }
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

macro_rules! gen_from_rejection {
    ($from:ty, $rejection:ty ) => {
        impl From<$from> for $rejection {
            fn from(value: $from) -> Self {
                Self {
                    code: ErrorCode::BR_0084,
                    message: GENERAL_INPUT_VALIDATION.to_string(),
                    cause: Some(Cause {
                        message: value.body_text(),
                    }),
                }
            }
        }
    };
}

gen_from_rejection!(JsonRejection, ErrorResponseRestDTO);
gen_from_rejection!(PathRejection, ErrorResponseRestDTO);
gen_from_rejection!(BytesRejection, ErrorResponseRestDTO);

/// Rejection of an id path segment. An id which cannot be parsed names no
/// entity, so it is reported as not found.
pub struct PathIdRejection(PathRejection);

impl From<PathRejection> for PathIdRejection {
    fn from(value: PathRejection) -> Self {
        Self(value)
    }
}

impl IntoResponse for PathIdRejection {
    fn into_response(self) -> axum::response::Response {
        let Self(rejection) = self;
        let unparsable = matches!(
            &rejection,
            PathRejection::FailedToDeserializePathParams(params)
                if matches!(
                    params.kind(),
                    ErrorKind::ParseErrorAtKey { .. }
                        | ErrorKind::ParseErrorAtIndex { .. }
                        | ErrorKind::ParseError { .. }
                )
        );

        if unparsable {
            tracing::info!(cause = %rejection.body_text(), "Unparsable id in path");
            ErrorResponse::NotFound(ErrorResponseRestDTO {
                code: ErrorCode::BR_0010,
                message: error::ErrorCode::BR_0010.msg().to_string(),
                cause: Some(Cause {
                    message: rejection.body_text(),
                }),
            })
            .into_response()
        } else {
            ErrorResponse::BadRequest(ErrorResponseRestDTO::from(rejection)).into_response()
        }
    }
}
