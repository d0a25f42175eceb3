//! Spin HTTP wiring for the product detail workload.

use std::time::Instant;

use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use store_sdk::store_auth::CookieTokenSource;
use store_sdk::store_core::{
    Headers, Method, NavigationMode, Navigator, PendingNavigation, RequestContext, RequestId,
};
use store_sdk::store_data::ApiClient;
use store_sdk::store_observability::{LogFormat, LogLevel, MetricsCollector, StructuredLogger};
use store_sdk::store_render::{HeadContent, Shell, StreamingSink};

use crate::sections;
use crate::view::{DetailView, LISTING_PATH};
use crate::{fetch_product_detail, route, Route, API_BASE};

/// Workload name used in logs and metrics.
const WORKLOAD_NAME: &str = "product-detail";

/// Main HTTP handler.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_default();
    let headers = request_headers(&req);
    let ctx = RequestContext::new(Method::Get, path).with_headers(headers);

    match route(&ctx.path) {
        Route::Detail(id) => {
            let id = id.to_string();
            serve_detail(&ctx, &id, response_out).await;
        }
        Route::ContinueShopping(id) => {
            let id = id.to_string();
            serve_continue_shopping(&ctx, &id, response_out);
        }
        Route::Unmatched => serve_unmatched(response_out),
    }
}

/// Serve `/products/{id}`: shell and loading view first, then the view the
/// fetch outcome selects.
async fn serve_detail(ctx: &RequestContext, product_id: &str, response_out: ResponseOutparam) {
    let request_id = ctx.request_id.clone();

    let logger = StructuredLogger::new(request_id.clone())
        .with_workload(WORKLOAD_NAME)
        .with_route(&ctx.path)
        .with_min_level(LogLevel::Debug)
        .with_format(LogFormat::Human);

    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_workload(WORKLOAD_NAME);
    metrics.set_route(&ctx.path);

    logger
        .info_builder("Detail request started")
        .field("product_id", product_id.to_string())
        .emit();

    let headers = Fields::from_list(&[
        (
            "content-type".to_owned(),
            b"text/html; charset=utf-8".to_vec(),
        ),
        ("x-request-id".to_owned(), request_id.to_string().into_bytes()),
    ])
    .unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    let shell = page_shell(product_id, &request_id);
    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        logger
            .error_builder("Failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }
    metrics.record_shell_sent();
    logger.debug("Shell sent");

    // Mount the view. The quantity selection travels in the URL; the step
    // parameter applies one increment or decrement against it.
    let mut view = DetailView::new();
    if let Some(qty) = ctx.query_param("qty").and_then(|q| q.parse::<u32>().ok()) {
        view.restore_quantity(qty);
    }
    match ctx.query_param("step") {
        Some("up") => view.increment_quantity(),
        Some("down") => view.decrement_quantity(),
        _ => {}
    }

    // In-progress before the request goes out, so the client paints the
    // loading view while the fetch is in flight.
    view.start_loading();
    if let Some(html) = view.render(product_id) {
        let _ = sink.send_section("status", &html).await;
        metrics.record_section_sent("status", Some(html.len()));
    }

    let tokens = CookieTokenSource::from_header(ctx.header("cookie"));
    let client = ApiClient::new().with_base_url(API_BASE);
    let url = format!("{}/products/{}", API_BASE, product_id);

    let started = Instant::now();
    let outcome = fetch_product_detail(&client, &tokens, product_id).await;
    metrics.record_upstream(
        &url,
        started.elapsed(),
        outcome.as_ref().ok().map(|r| r.status),
        matches!(&outcome, Ok(r) if r.is_success()),
    );
    match &outcome {
        Ok(resp) => logger
            .debug_builder("Product fetch resolved")
            .field_u64("status", resp.status as u64)
            .emit(),
        Err(e) => logger
            .warn_builder("Product fetch failed")
            .field("error", e.to_string())
            .emit(),
    }

    view.apply_fetch(outcome);

    let _ = sink.send_raw(sections::clear_loading().into_bytes()).await;
    if let Some(html) = view.render(product_id) {
        let _ = sink.send_section("detail", &html).await;
        metrics.record_section_sent("detail", Some(html.len()));
    }

    let _ = sink.send_raw(shell.render_closing().into_bytes()).await;
    sink.complete();

    let final_metrics = metrics.finalize(Some(200));
    logger.info("Detail request complete");
    eprintln!("{}", final_metrics.to_summary());
}

/// Serve `/products/{id}/continue-shopping` as a replace-navigation to the
/// product listing.
fn serve_continue_shopping(ctx: &RequestContext, product_id: &str, response_out: ResponseOutparam) {
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD_NAME)
        .with_route(&ctx.path)
        .with_format(LogFormat::Human);

    let mut nav = RedirectNavigator::default();
    DetailView::new().continue_shopping(&mut nav);
    let pending = nav.pending.unwrap_or(PendingNavigation {
        path: LISTING_PATH.to_string(),
        mode: NavigationMode::Replace,
    });

    logger
        .info_builder("Continue shopping")
        .field("product_id", product_id.to_string())
        .field("location", pending.path.clone())
        .emit();

    let headers =
        Fields::from_list(&[("location".to_owned(), pending.path.clone().into_bytes())]).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(pending.status_code()).unwrap();
    response_out.set(response);
}

/// Paths outside this workload's routes get a bare 404.
fn serve_unmatched(response_out: ResponseOutparam) {
    let headers = Fields::from_list(&[("content-type".to_owned(), b"text/plain".to_vec())]).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(404).unwrap();
    response_out.set(response);
}

/// Navigator realized as an HTTP redirect.
#[derive(Debug, Default)]
struct RedirectNavigator {
    pending: Option<PendingNavigation>,
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, path: &str, mode: NavigationMode) {
        self.pending = Some(PendingNavigation {
            path: path.to_string(),
            mode,
        });
    }
}

fn request_headers(req: &IncomingRequest) -> Headers {
    req.headers()
        .entries()
        .into_iter()
        .map(|(name, value)| (name, String::from_utf8_lossy(&value).into_owned()))
        .collect()
}

fn page_shell(product_id: &str, request_id: &RequestId) -> Shell {
    Shell::new(
        HeadContent::new(format!("Product {} | Trendline", product_id))
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(DETAIL_STYLES),
    )
    .with_body_start(format!(
        "<body>\n<main class=\"detail-container\" data-request-id=\"{}\">\n",
        request_id
    ))
    .with_body_end("</main>\n</body>\n</html>".to_string())
}

/// CSS for the detail page.
const DETAIL_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f9f9f9; color: #1e293b; }
.detail-container { max-width: 1100px; margin: 0 auto; padding: 2rem; }

/* Loading */
.detail-status { display: flex; flex-direction: column; align-items: center; padding: 4rem 0; }
.spinner { width: 48px; height: 48px; border: 5px solid #e2e8f0; border-top-color: #0b69ff; border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.loading-text { color: #64748b; margin-top: 1rem; }

/* Detail */
.product-detail { background: white; padding: 2rem; border-radius: 8px; }
.product-main { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.product-image { width: 100%; border-radius: 8px; }
.product-title { font-size: 2rem; margin: 0 0 0.5rem 0; }
.product-price { font-size: 1.5rem; font-weight: bold; color: #3b82f6; }
.product-rating-row { display: flex; align-items: center; gap: 1rem; }
.rating-badge { background: #3b82f6; color: white; padding: 0.25rem 0.75rem; border-radius: 4px; }
.product-reviews { color: #64748b; }
.product-description { line-height: 1.6; margin: 1rem 0; }
.product-meta { margin: 0.25rem 0; }
.meta-label { font-weight: 600; }
.detail-rule { border: none; border-top: 1px solid #e2e8f0; margin: 1rem 0; }
.quantity-controls { display: flex; align-items: center; gap: 1rem; }
.btn-quantity { font-size: 1.25rem; text-decoration: none; color: #1e293b; border: 1px solid #cbd5e1; border-radius: 4px; padding: 0.25rem 0.75rem; }
.quantity-value { font-size: 1.25rem; min-width: 2rem; text-align: center; }
.btn-add-to-cart { background: #3b82f6; color: white; border: none; padding: 0.75rem 2rem; font-size: 1rem; border-radius: 8px; cursor: pointer; margin-top: 1rem; }

/* Similar products */
.similar-heading { margin-top: 2rem; }
.similar-list { list-style: none; display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; padding: 0; }
.similar-product-item { border: 1px solid #e2e8f0; border-radius: 8px; overflow: hidden; }
.similar-product-link { text-decoration: none; color: inherit; display: block; padding-bottom: 0.75rem; }
.similar-product-img { width: 100%; aspect-ratio: 1; object-fit: cover; }
.similar-product-title { font-weight: 600; margin: 0.5rem 0.75rem 0; }
.similar-product-brand { color: #64748b; margin: 0.25rem 0.75rem; }
.similar-product-row { display: flex; justify-content: space-between; align-items: center; margin: 0 0.75rem; }
.similar-product-price { font-weight: bold; margin: 0; }

/* Failure */
.detail-failure { background: white; padding: 4rem 2rem; border-radius: 8px; text-align: center; }
.failure-heading { margin: 0 0 0.5rem 0; }
.failure-text { color: #64748b; }
.btn-continue-shopping { display: inline-block; background: #3b82f6; color: white; text-decoration: none; padding: 0.75rem 2rem; border-radius: 8px; margin-top: 1.5rem; }
"#;
