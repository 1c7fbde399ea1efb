//! Unit tests for the in-memory ticket store.

use crate::taxonomy::domain::{ModuleName, ProjectName};
use crate::ticket::{
    adapters::memory::InMemoryTicketStore,
    domain::{
        ImportedTicketRecord, Priority, ReportedOn, Status, TicketDomainError, TicketDraft,
        TicketId, TicketPatch,
    },
    ports::{TicketStore, TicketStoreError},
};
use eyre::{bail, ensure};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryTicketStore {
    InMemoryTicketStore::new()
}

fn draft(title: &str) -> Result<TicketDraft, TicketDomainError> {
    TicketDraft::new(
        ProjectName::new("Cem-Muni9").expect("valid project name"),
        ModuleName::new("Pagos").expect("valid module name"),
        title,
    )
}

fn record(id: &str, title: &str) -> eyre::Result<ImportedTicketRecord> {
    Ok(ImportedTicketRecord {
        id: TicketId::new(id)?,
        legacy_id: None,
        project: ProjectName::new("Cem-Muni9")?,
        module: ModuleName::new("Pagos")?,
        title: title.to_owned(),
        description: String::new(),
        priority: Priority::Medium,
        status: Status::Pending,
        assignee: None,
        reported_raw: "Feb-25".to_owned(),
    })
}

#[rstest]
fn append_assigns_sequential_tokens_from_collection_size(
    store: InMemoryTicketStore,
) -> eyre::Result<()> {
    let first = store.append(draft("Primera")?, ReportedOn::parse_legacy("Feb-25"))?;
    let second = store.append(draft("Segunda")?, ReportedOn::parse_legacy("Feb-25"))?;

    ensure!(first.id().as_str() == "T-001");
    ensure!(second.id().as_str() == "T-002");
    Ok(())
}

#[rstest]
fn append_derives_the_token_from_size_not_prior_tokens(
    store: InMemoryTicketStore,
) -> eyre::Result<()> {
    store.import(record("T-900", "Importada")?)?;
    let appended = store.append(draft("Nueva")?, ReportedOn::parse_legacy("Feb-25"))?;
    ensure!(appended.id().as_str() == "T-002");
    Ok(())
}

#[rstest]
fn list_preserves_insertion_order(store: InMemoryTicketStore) -> eyre::Result<()> {
    store.append(draft("Primera")?, ReportedOn::parse_legacy("Feb-25"))?;
    store.append(draft("Segunda")?, ReportedOn::parse_legacy("Feb-25"))?;
    store.append(draft("Tercera")?, ReportedOn::parse_legacy("Feb-25"))?;

    let titles: Vec<String> = store
        .list()?
        .iter()
        .map(|ticket| ticket.title().to_owned())
        .collect();
    ensure!(titles == ["Primera", "Segunda", "Tercera"]);
    Ok(())
}

#[rstest]
fn amend_merges_into_the_matching_ticket(store: InMemoryTicketStore) -> eyre::Result<()> {
    let created = store.append(draft("Primera")?, ReportedOn::parse_legacy("Feb-25"))?;

    let amended = store.amend(
        created.id(),
        TicketPatch::new().with_priority(Priority::Critical),
    )?;

    let Some(ticket) = amended else {
        bail!("expected the ticket to be amended");
    };
    ensure!(ticket.priority() == Priority::Critical);
    ensure!(store.find(created.id())? == Some(ticket.clone()));
    Ok(())
}

#[rstest]
fn amend_on_an_unknown_token_is_a_no_op(store: InMemoryTicketStore) -> eyre::Result<()> {
    store.append(draft("Primera")?, ReportedOn::parse_legacy("Feb-25"))?;
    let before = store.list()?;

    let amended = store.amend(
        &TicketId::new("T-999")?,
        TicketPatch::new().with_priority(Priority::Critical),
    )?;

    ensure!(amended.is_none());
    ensure!(store.list()? == before);
    Ok(())
}

#[rstest]
fn import_rejects_a_duplicate_token(store: InMemoryTicketStore) -> eyre::Result<()> {
    store.import(record("T-001", "Primera")?)?;
    let result = store.import(record("T-001", "Repetida")?);
    if !matches!(result, Err(TicketStoreError::DuplicateTicket(_))) {
        bail!("expected a duplicate-token error, got {result:?}");
    }
    Ok(())
}

#[rstest]
fn seeded_loads_records_in_order() -> eyre::Result<()> {
    let seeded = InMemoryTicketStore::seeded([
        record("T-001", "Primera")?,
        record("T-002", "Segunda")?,
    ])?;
    let ids: Vec<String> = seeded
        .list()?
        .iter()
        .map(|ticket| ticket.id().to_string())
        .collect();
    ensure!(ids == ["T-001", "T-002"]);
    Ok(())
}

#[rstest]
fn find_returns_none_for_an_unknown_token(store: InMemoryTicketStore) -> eyre::Result<()> {
    ensure!(store.find(&TicketId::new("T-404")?)?.is_none());
    Ok(())
}
