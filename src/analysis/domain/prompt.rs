//! Backlog prompt assembly and template rendering.

use crate::ticket::domain::{Status, Ticket};
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Natural-language-generation prompt sent to the backlog analyzer.
///
/// The prompt embeds a bulleted summary of the open backlog: tickets whose
/// status is neither `Done` nor `Future`, one line each.
const PROMPT_TEMPLATE: &str = "\
Actúa como un Jefe de Proyectos para un equipo de desarrollo de software municipal.
Analiza el siguiente backlog de incidencias pendientes:

{{ backlog }}

Instrucciones:
1. Identifica los 3 cuellos de botella más críticos basándote en la Prioridad y la importancia del Módulo (Pagos y Ventas suelen ser los más críticos para la operación municipal).
2. Sugiere un plan de acción rápido y concreto para \"{{ lead_developer }}\" (el desarrollador principal).
3. Proporciona una frase motivacional profesional para el equipo.

Requisito indispensable: LA RESPUESTA DEBE SER EN ESPAÑOL.
Mantén el tono profesional, conciso y utiliza formato Markdown para estructurar la respuesta.";

/// Error returned when the prompt template fails to render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render backlog prompt: {reason}")]
pub struct PromptRenderError {
    /// Template engine failure description.
    pub reason: String,
}

/// Renderable backlog prompt context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BacklogPrompt {
    backlog: String,
    lead_developer: String,
}

impl BacklogPrompt {
    /// Builds the prompt context from the full ticket collection.
    ///
    /// Narrows to open tickets (not `Done`, not `Future`) to keep the prompt
    /// small; each becomes one `- [priority] module: title (status)` line
    /// using the product's display labels.
    #[must_use]
    pub fn from_tickets(tickets: &[Ticket], lead_developer: impl Into<String>) -> Self {
        let lines: Vec<String> = tickets
            .iter()
            .filter(|ticket| !matches!(ticket.status(), Status::Done | Status::Future))
            .map(summary_line)
            .collect();
        Self {
            backlog: lines.join("\n"),
            lead_developer: lead_developer.into(),
        }
    }

    /// Returns the bulleted backlog summary.
    #[must_use]
    pub fn backlog(&self) -> &str {
        &self.backlog
    }

    /// Returns the lead developer the action plan addresses.
    #[must_use]
    pub fn lead_developer(&self) -> &str {
        &self.lead_developer
    }

    /// Renders the full prompt text.
    ///
    /// # Errors
    ///
    /// Returns [`PromptRenderError`] when template rendering fails.
    pub fn render(&self) -> Result<String, PromptRenderError> {
        let environment = Environment::new();
        environment
            .render_str(PROMPT_TEMPLATE, self)
            .map_err(|error| PromptRenderError {
                reason: error.to_string(),
            })
    }
}

fn summary_line(ticket: &Ticket) -> String {
    format!(
        "- [{}] {}: {} ({})",
        ticket.priority().label(),
        ticket.module(),
        ticket.title(),
        ticket.status().label()
    )
}
