//! Detail view state machine.
//!
//! One `DetailView` is mounted per request. Status moves linearly from
//! `Initial` through `InProgress` to exactly one terminal variant; the
//! quantity counter is independent of fetch status.

use http::StatusCode;
use store_sdk::store_core::Navigator;
use store_sdk::store_data::Response;

use crate::data::{ProductRecord, RawProductDetail};
use crate::sections;

/// Listing page the continue-shopping action navigates to.
pub const LISTING_PATH: &str = "/products";

/// Lifecycle status of the detail view.
///
/// The terminal variants carry their data, so a success view cannot exist
/// without a product and render can match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    /// Mounted, fetch not yet started.
    Initial,
    /// Fetch issued, response pending.
    InProgress,
    /// Product loaded and mapped.
    Success {
        product: ProductRecord,
        similar_products: Vec<ProductRecord>,
    },
    /// The API answered 404 for this product id.
    NotFound,
    /// Any other upstream failure: non-404 error status, transport error,
    /// or a body that did not parse.
    Failed,
}

/// View state for one product detail page.
#[derive(Debug)]
pub struct DetailView {
    status: DetailStatus,
    quantity: u32,
}

impl DetailView {
    /// Mount a fresh view: nothing fetched, quantity at 1.
    pub fn new() -> Self {
        Self {
            status: DetailStatus::Initial,
            quantity: 1,
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    /// The loaded product, present only on success.
    pub fn product(&self) -> Option<&ProductRecord> {
        match &self.status {
            DetailStatus::Success { product, .. } => Some(product),
            _ => None,
        }
    }

    /// Similar products in API order, empty unless loaded.
    pub fn similar_products(&self) -> &[ProductRecord] {
        match &self.status {
            DetailStatus::Success {
                similar_products, ..
            } => similar_products,
            _ => &[],
        }
    }

    /// Current quantity selection.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Move to in-progress. Called synchronously before the fetch is issued
    /// so the loading view can be flushed first. No-op once past `Initial`.
    pub fn start_loading(&mut self) {
        if self.status == DetailStatus::Initial {
            self.status = DetailStatus::InProgress;
        }
    }

    /// Resolve the in-flight fetch into a terminal status.
    ///
    /// Only a view in `InProgress` transitions; a second resolution is
    /// ignored, so status never regresses.
    pub fn apply_fetch(&mut self, outcome: anyhow::Result<Response>) {
        if self.status != DetailStatus::InProgress {
            return;
        }

        self.status = match outcome {
            Ok(response) if response.is_success() => {
                match response.json::<RawProductDetail>() {
                    Ok(detail) => DetailStatus::Success {
                        product: ProductRecord::from(detail.product),
                        similar_products: detail
                            .similar_products
                            .into_iter()
                            .map(ProductRecord::from)
                            .collect(),
                    },
                    Err(_) => DetailStatus::Failed,
                }
            }
            Ok(response) if response.status == StatusCode::NOT_FOUND.as_u16() => {
                DetailStatus::NotFound
            }
            Ok(_) | Err(_) => DetailStatus::Failed,
        };
    }

    /// Raise the quantity. No upper bound.
    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Lower the quantity, clamped at the floor of 1.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Restore a quantity carried in the URL, clamped at the floor of 1.
    pub fn restore_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    /// Leave the detail page for the product listing, replacing the current
    /// history entry so back-navigation skips this view.
    pub fn continue_shopping(&self, nav: &mut dyn Navigator) {
        nav.replace(LISTING_PATH);
    }

    /// Select the view for the current status. `Initial` renders nothing.
    pub fn render(&self, product_id: &str) -> Option<String> {
        match &self.status {
            DetailStatus::Initial => None,
            DetailStatus::InProgress => Some(sections::render_loading()),
            DetailStatus::Success {
                product,
                similar_products,
            } => Some(sections::render_detail(
                product,
                similar_products,
                self.quantity,
                product_id,
            )),
            DetailStatus::NotFound => Some(sections::render_not_found(product_id)),
            DetailStatus::Failed => Some(sections::render_failed(product_id)),
        }
    }
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}
