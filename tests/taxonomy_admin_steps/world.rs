//! Shared world state for taxonomy administration BDD scenarios.

use std::sync::Arc;

use munitrack::seed::demo_board;
use munitrack::taxonomy::adapters::memory::InMemoryTaxonomyStore;
use munitrack::taxonomy::services::TaxonomyAdminService;
use munitrack::ticket::adapters::memory::InMemoryTicketStore;
use munitrack::ticket::ports::TicketStore;
use rstest::fixture;

/// Scenario world for taxonomy administration behaviour tests.
pub struct TaxonomyWorld {
    /// The admin service under test.
    pub admin: TaxonomyAdminService<InMemoryTaxonomyStore>,
    /// Ticket collection used to observe orphaning behaviour.
    pub tickets: Arc<InMemoryTicketStore>,
}

impl TaxonomyWorld {
    /// Creates a world with an empty taxonomy and an empty ticket store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            admin: TaxonomyAdminService::new(Arc::new(InMemoryTaxonomyStore::new())),
            tickets: Arc::new(InMemoryTicketStore::new()),
        }
    }

    /// Replaces the world's state with the seeded demo dataset.
    pub fn load_demo(&mut self) -> Result<(), eyre::Report> {
        let board = demo_board().map_err(|err| eyre::eyre!("demo dataset failed: {err}"))?;
        self.admin = TaxonomyAdminService::new(Arc::new(InMemoryTaxonomyStore::seeded(
            board.projects,
            board.modules_by_project,
        )));
        let store = InMemoryTicketStore::new();
        for record in board.tickets {
            store
                .import(record)
                .map_err(|err| eyre::eyre!("demo ticket import failed: {err}"))?;
        }
        self.tickets = Arc::new(store);
        Ok(())
    }
}

impl Default for TaxonomyWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaxonomyWorld {
    TaxonomyWorld::default()
}
