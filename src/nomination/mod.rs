pub mod model;
pub mod reconcile;
pub mod search;
pub mod store;
pub mod view;

pub use model::{
    Nomination, NominationError, NominationList, SearchResult, MAX_NOMINATIONS,
    NOMINATION_LIST_KEY,
};
pub use reconcile::{reconcile, Reconciled, NO_MOVIES_FOUND};
pub use search::{run_search, SearchOutcome, SearchQuery, MIN_QUERY_CHARS, QUERY_TOO_SHORT};
pub use store::NominationStore;
pub use view::{build_view, Card, ViewState};
