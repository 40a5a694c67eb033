//! Listing core shared by every paginated page.
//!
//! Pure state and algorithms only: the frontend owns signals and network
//! calls and delegates every decision here.

pub mod facets;
pub mod filter_state;
pub mod merge;
pub mod pager;
pub mod query;
pub mod sequencer;

pub use facets::{category_facets, filter_by_category, page_slice, Facet};
pub use filter_state::{reduce, FacetKey, FilterAction, ListingFilter};
pub use merge::{merge_all, EagerMerge, MergeStep};
pub use pager::Pager;
pub use query::{from_query_string, to_query_string};
pub use sequencer::{RequestSequencer, RequestTicket};
