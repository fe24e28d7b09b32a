//! Link resolvers, one per link type.

mod asset;
mod category;
mod listing;
mod marketplace;
mod path;
mod request;
mod translation;

use crate::core::link::{Envelope, NormalizedData};
use crate::Result;

pub use self::asset::AssetResolver;
pub use self::category::CategoryResolver;
pub use self::listing::ListingResolver;
pub use self::marketplace::MarketplaceDataResolver;
pub use self::path::PathResolver;
pub use self::request::{RequestResolver, RequestValue};
pub use self::translation::{TranslationResolver, TRANSLATION_KEYS};

/// Turns the id of a link into a resolved envelope.
///
/// Resolvers hold their bound data immutably, so one instance can serve any
/// number of calls, from any thread, in any order.
pub trait LinkResolver: Send + Sync {
    /// Resolves `id` within `link_type`.
    ///
    /// `data` is the per-call normalized data; most resolvers ignore it.
    fn call(&self, link_type: &str, id: &str, data: &NormalizedData) -> Result<Envelope>;
}
