//! Request logging: method and path before delegating, status and elapsed
//! wall-clock time after the inner service returns.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    tracing::info!(%method, %path, "started");
    let start = Instant::now();
    let response = next.run(req).await;
    tracing::info!(
        %method,
        %path,
        status = %response.status(),
        elapsed = ?start.elapsed(),
        "completed"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::{middleware, routing::get, Router};
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::instrument::WithSubscriber;
    use tracing::{span, Dispatch, Event, Metadata, Subscriber};
    use tower::ServiceExt;

    /// Collects event messages so tests can observe the before/after logs.
    struct MessageCollector(Arc<Mutex<Vec<String>>>);

    impl Subscriber for MessageCollector {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

        fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            struct MessageVisitor(String);

            impl Visit for MessageVisitor {
                fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
                    if field.name() == "message" {
                        self.0 = format!("{value:?}");
                    }
                }
            }

            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push(visitor.0);
        }

        fn enter(&self, _span: &span::Id) {}

        fn exit(&self, _span: &span::Id) {}
    }

    #[tokio::test]
    async fn passes_response_through_unchanged() {
        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn(log_requests));

        let response = app
            .oneshot(HttpRequest::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn runs_after_step_on_error_responses() {
        let messages: Arc<Mutex<Vec<String>>> = Arc::default();
        let dispatch = Dispatch::new(MessageCollector(messages.clone()));
        let app = Router::new().layer(middleware::from_fn(log_requests));

        let response = async {
            app.oneshot(HttpRequest::builder().uri("/missing").body(Body::empty()).unwrap())
                .await
                .unwrap()
        }
        .with_subscriber(dispatch)
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let messages = messages.lock().unwrap();
        assert!(messages.iter().any(|m| m.contains("started")));
        assert!(messages.iter().any(|m| m.contains("completed")));
    }
}
