//! Fetch/render contract for catalog backends.

use crate::{DisplayPayload, Item, RatingWidget};
use async_trait::async_trait;
use lagrange_error::LagrangeResult;

/// A catalog the rating widget can draw items from.
///
/// Implementations own the network client and know how their items should be
/// presented. The widget itself stays independent of both.
///
/// # Example
///
/// ```rust,ignore
/// use lagrange_core::{ItemSource, RatingWidget};
///
/// let item = source.fetch().await?;
/// let widget = RatingWidget::new(item, Some(owner));
/// let payload = source.render(&widget);
/// ```
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetches one item.
    ///
    /// # Errors
    ///
    /// Fails when the catalog is unreachable, answers with an error, or
    /// returns no usable item.
    async fn fetch(&self) -> LagrangeResult<Item>;

    /// Builds the display for the widget's current item and votes.
    fn render(&self, widget: &RatingWidget) -> DisplayPayload;
}
