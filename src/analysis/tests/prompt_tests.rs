//! Unit tests for backlog prompt assembly.

use crate::analysis::domain::BacklogPrompt;
use crate::taxonomy::domain::{ModuleName, ProjectName};
use crate::ticket::domain::{Priority, ReportedOn, Status, Ticket, TicketDraft, TicketId};
use eyre::ensure;
use rstest::{fixture, rstest};

fn ticket(position: usize, title: &str, priority: Priority, status: Status) -> Ticket {
    let draft = TicketDraft::new(
        ProjectName::new("Cem-Muni9").expect("valid project name"),
        ModuleName::new("Pagos").expect("valid module name"),
        title,
    )
    .expect("valid draft")
    .with_priority(priority)
    .with_status(status);
    Ticket::new(
        TicketId::from_position(position),
        draft,
        ReportedOn::parse_legacy("Feb-25"),
    )
}

#[fixture]
fn tickets() -> Vec<Ticket> {
    vec![
        ticket(1, "Error pago 2023", Priority::High, Status::Testing),
        ticket(2, "Pago Unificado", Priority::Medium, Status::Done),
        ticket(3, "Anulación de comprobantes", Priority::Medium, Status::Future),
        ticket(4, "Problema en campo Buscar", Priority::Medium, Status::Pending),
    ]
}

#[rstest]
fn backlog_narrows_to_open_tickets(tickets: Vec<Ticket>) -> eyre::Result<()> {
    let prompt = BacklogPrompt::from_tickets(&tickets, "Roberto");
    let lines: Vec<&str> = prompt.backlog().lines().collect();

    ensure!(
        lines
            == [
                "- [Alta] Pagos: Error pago 2023 (Testing)",
                "- [Media] Pagos: Problema en campo Buscar (Pendiente)",
            ]
    );
    Ok(())
}

#[rstest]
fn rendered_prompt_embeds_backlog_and_lead(tickets: Vec<Ticket>) -> eyre::Result<()> {
    let rendered = BacklogPrompt::from_tickets(&tickets, "Roberto").render()?;

    ensure!(rendered.contains("- [Alta] Pagos: Error pago 2023 (Testing)"));
    ensure!(rendered.contains("\"Roberto\" (el desarrollador principal)"));
    ensure!(rendered.contains("LA RESPUESTA DEBE SER EN ESPAÑOL"));
    ensure!(rendered.contains("formato Markdown"));
    Ok(())
}

#[rstest]
fn empty_collection_renders_an_empty_backlog() -> eyre::Result<()> {
    let prompt = BacklogPrompt::from_tickets(&[], "Roberto");
    ensure!(prompt.backlog().is_empty());
    ensure!(prompt.lead_developer() == "Roberto");
    ensure!(prompt.render().is_ok());
    Ok(())
}
