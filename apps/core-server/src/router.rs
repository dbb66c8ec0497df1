use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use rbac_core::RbacCore;
use rbac_core::config::core_config::AppConfig;
use sea_orm::DatabaseConnection;
use secrecy::SecretString;
use sql_data_provider::DataLayer;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, employee, misc, organisation};
use crate::middleware::get_http_request_context;
use crate::token_validator::{TokenAuthority, TokenError};
use crate::{ServerConfig, build_info, dto};

pub(crate) struct InternalAppState {
    pub core: RbacCore,
    pub config: Arc<ServerConfig>,
    pub token_authority: TokenAuthority,
}

pub(crate) type AppState = Arc<InternalAppState>;

#[derive(Debug, Error)]
pub enum StartServerError {
    #[error("Listener error: {0}")]
    Listener(#[from] std::io::Error),
    #[error("Token verification setup failed: {0}")]
    TokenAuthority(#[from] TokenError),
}

pub async fn start_server(
    listener: TcpListener,
    config: AppConfig<ServerConfig>,
    db_conn: DatabaseConnection,
) -> Result<(), StartServerError> {
    listener.set_nonblocking(true)?;

    let token_authority = TokenAuthority::new(
        &SecretString::from(config.app.jwt_secret.to_owned()),
        config.app.jwt_leeway,
    )?;

    let core = RbacCore::new(Arc::new(DataLayer::build(db_conn)), config.core);

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
        token_authority,
    });

    let addr = listener.local_addr()?;
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)?,
        router.into_make_service(),
    )
    .await?;

    Ok(())
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let protected = Router::new()
        .route(
            "/organisation",
            post(organisation::controller::post_organisation),
        )
        .route(
            "/organisation/{id}",
            get(organisation::controller::get_organisation)
                .put(organisation::controller::put_organisation)
                .delete(organisation::controller::delete_organisation),
        )
        .route("/employee", post(employee::controller::post_employee))
        .route(
            "/employee/{id}",
            get(employee::controller::get_employee)
                .put(employee::controller::put_employee)
                .delete(employee::controller::delete_employee),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::bearer_check,
        ));

    let mut technical_endpoints = Router::new();
    if config.enable_server_info {
        technical_endpoints = technical_endpoints
            .route("/build-info", get(misc::get_build_info))
            .route("/health", get(misc::health_check));
    }
    if config.enable_metrics {
        technical_endpoints = technical_endpoints.route("/metrics", get(misc::get_metrics));
    }

    let mut router = Router::new().merge(protected).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let context = get_http_request_context(request);
                info_span!(
                    "http_request",
                    method = context.method,
                    path = context.path,
                    service = build_info::PKG_NAME,
                    RequestId = context.request_id,
                    SessionId = context.session_id,
                )
            })
            .on_request(|request: &Request<_>, _span: &Span| {
                tracing::debug!(
                    "SERVICE CALL START {} {}",
                    request.method(),
                    request.uri().path()
                )
            })
            .on_failure(|_, _, _: &_| {}) // override default on_failure handler
            .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                tracing::debug!("SERVICE CALL END {}", response.status())
            }),
    );

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::organisation::controller::post_organisation,
            endpoint::organisation::controller::get_organisation,
            endpoint::organisation::controller::put_organisation,
            endpoint::organisation::controller::delete_organisation,

            endpoint::employee::controller::post_employee,
            endpoint::employee::controller::get_employee,
            endpoint::employee::controller::put_employee,
            endpoint::employee::controller::delete_employee,

            endpoint::misc::get_build_info,
            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                endpoint::organisation::dto::CreateOrganisationRequestRestDTO,
                endpoint::organisation::dto::UpdateOrganisationRequestRestDTO,
                endpoint::organisation::dto::OrganisationResponseRestDTO,

                endpoint::employee::dto::EmployeeRequestRestDTO,
                endpoint::employee::dto::EmployeeResponseRestDTO,

                dto::response::MessageResponseRestDTO,

                dto::error::ErrorResponseRestDTO,
                dto::error::ErrorCode,
                dto::error::Cause,

                shared_types::OrganisationId,
                shared_types::EmployeeId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "organisation_management", description = "Organisation management"),
            (name = "employee_management", description = "Employee management"),
        ),
        modifiers(&SecurityAddon)
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            if let Some(components) = openapi.components.as_mut() {
                components.add_security_scheme(
                    "bearer",
                    SecurityScheme::Http(
                        HttpBuilder::new()
                            .scheme(HttpAuthScheme::Bearer)
                            .bearer_format("JWT")
                            .description(Some("HS256 access token carrying `sub` and `roles`"))
                            .build(),
                    ),
                );
            }
        }
    }

    let mut docs = ApiDoc::openapi();
    docs.info.version = build_info::PKG_VERSION.to_owned();

    docs
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
