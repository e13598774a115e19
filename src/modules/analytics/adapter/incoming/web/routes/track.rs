use actix_web::{post, web, HttpRequest, Responder};
use tracing::error;

use crate::modules::analytics::application::ports::incoming::use_cases::{
    RecordEventError, RecordEventInput, RequestMeta,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn header_string(req: &HttpRequest, name: &str) -> String {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Unauthenticated tracking beacon; published portfolio pages call it
/// from the visitor's browser.
#[post("/api/track")]
pub async fn track_handler(
    req: HttpRequest,
    body: web::Json<RecordEventInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let meta = RequestMeta {
        user_agent: header_string(&req, "user-agent"),
        referrer: header_string(&req, "referer"),
        forwarded_for: header_string(&req, "x-forwarded-for"),
    };

    match data.analytics.record.execute(body.into_inner(), meta).await {
        Ok(()) => ApiResponse::<()>::no_content(),

        Err(RecordEventError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(RecordEventError::RecordFailed(e)) => {
            error!("Storage error recording analytics: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::analytics::application::ports::incoming::use_cases::RecordEventUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct CapturingRecord {
        seen: Mutex<Vec<(RecordEventInput, RequestMeta)>>,
    }

    #[async_trait]
    impl RecordEventUseCase for CapturingRecord {
        async fn execute(
            &self,
            input: RecordEventInput,
            meta: RequestMeta,
        ) -> Result<(), RecordEventError> {
            self.seen.lock().unwrap().push((input, meta));
            Ok(())
        }
    }

    #[actix_web::test]
    async fn track_needs_no_auth_and_forwards_headers() {
        let record = Arc::new(CapturingRecord {
            seen: Mutex::new(Vec::new()),
        });
        let state = TestAppStateBuilder::new()
            .with_record_event(record.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(track_handler),
        )
        .await;

        let portfolio_id = Uuid::new_v4();
        let req = test::TestRequest::post()
            .uri("/api/track")
            .insert_header(("user-agent", "Mozilla/5.0 (iPhone) Mobile"))
            .insert_header(("referer", "https://example.com/"))
            .insert_header(("x-forwarded-for", "203.0.113.7"))
            .set_json(json!({"portfolioId": portfolio_id}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let seen = record.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.portfolio_id, Some(portfolio_id));
        assert_eq!(seen[0].1.forwarded_for, "203.0.113.7");
        assert_eq!(seen[0].1.referrer, "https://example.com/");
    }

    struct RejectingRecord;

    #[async_trait]
    impl RecordEventUseCase for RejectingRecord {
        async fn execute(
            &self,
            _input: RecordEventInput,
            _meta: RequestMeta,
        ) -> Result<(), RecordEventError> {
            Err(RecordEventError::Validation(
                "portfolioId is required".to_string(),
            ))
        }
    }

    #[actix_web::test]
    async fn missing_portfolio_id_returns_400() {
        let state = TestAppStateBuilder::new()
            .with_record_event(Arc::new(RejectingRecord))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(track_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/track")
            .set_json(json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
