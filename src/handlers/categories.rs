//! Category listing handler

use crate::clue::difficulty_choices;
use crate::formatting::CategoryListing;
use crate::remote::ClueSource;
use crate::session::Session;

impl<S: ClueSource> Session<S> {
    /// Lists the category and difficulty choices available for searching.
    pub fn handle_list_categories(&self) -> CategoryListing {
        CategoryListing {
            categories: self.index.names(),
            difficulties: difficulty_choices(),
            sample_size: self.index.sample_size(),
        }
    }
}
