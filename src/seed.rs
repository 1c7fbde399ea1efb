//! Demo dataset carried over from the municipality's previous tracker.
//!
//! Downstream UIs load this as their initial session state; the test suite
//! uses it as a realistic fixture. Ticket dates arrive as the raw tokens the
//! old spreadsheet stored and are normalized through the legacy-import
//! boundary.

use crate::directory::domain::{DirectoryDomainError, UserId, UserName, UserProfile, UserRole};
use crate::taxonomy::domain::{ModuleName, ProjectName, TaxonomyDomainError};
use crate::ticket::domain::{
    ImportedTicketRecord, LegacyId, Priority, Status, TicketDomainError, TicketId,
};
use thiserror::Error;

/// Lead developer the demo backlog's action plans are addressed to.
pub const DEMO_LEAD_DEVELOPER: &str = "Roberto";

/// Errors returned while constructing the demo dataset.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Ticket field construction failed.
    #[error(transparent)]
    Ticket(#[from] TicketDomainError),
    /// Taxonomy name construction failed.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyDomainError),
    /// Directory value construction failed.
    #[error(transparent)]
    Directory(#[from] DirectoryDomainError),
}

/// The previous tracker's full dataset.
#[derive(Debug, Clone)]
pub struct DemoBoard {
    /// Registered projects, in their original order.
    pub projects: Vec<ProjectName>,
    /// Module lists per project.
    pub modules_by_project: Vec<(ProjectName, Vec<ModuleName>)>,
    /// Assignable users.
    pub users: Vec<UserProfile>,
    /// Legacy ticket records, ready for the import boundary.
    pub tickets: Vec<ImportedTicketRecord>,
}

/// Builds the demo dataset.
///
/// # Errors
///
/// Returns [`SeedError`] when any constant fails domain validation; the
/// dataset is fixed, so this signals a programming error rather than bad
/// input.
pub fn demo_board() -> Result<DemoBoard, SeedError> {
    Ok(DemoBoard {
        projects: projects()?,
        modules_by_project: modules_by_project()?,
        users: users()?,
        tickets: tickets()?,
    })
}

fn projects() -> Result<Vec<ProjectName>, SeedError> {
    Ok(vec![
        ProjectName::new("Cem-Muni9")?,
        ProjectName::new("MesaEntrad-Muni9")?,
    ])
}

fn modules_by_project() -> Result<Vec<(ProjectName, Vec<ModuleName>)>, SeedError> {
    let cementerio = (
        ProjectName::new("Cem-Muni9")?,
        module_list(&[
            "General",
            "Parcelas",
            "Nichos",
            "Ventas",
            "Pagos",
            "Base de Datos",
        ])?,
    );
    let mesa_entradas = (
        ProjectName::new("MesaEntrad-Muni9")?,
        module_list(&["General", "Expedientes", "Digitalización", "Reportes"])?,
    );
    Ok(vec![cementerio, mesa_entradas])
}

fn module_list(names: &[&str]) -> Result<Vec<ModuleName>, SeedError> {
    names
        .iter()
        .map(|name| Ok(ModuleName::new(*name)?))
        .collect()
}

fn users() -> Result<Vec<UserProfile>, SeedError> {
    let entries = [
        ("u1", "Roberto", UserRole::Developer),
        ("u2", "Laura", UserRole::Functional),
        ("u3", "Carlos", UserRole::Developer),
        ("u4", "Admin", UserRole::Functional),
    ];
    entries
        .iter()
        .map(|(id, name, role)| {
            Ok(UserProfile::new(
                UserId::new(*id)?,
                UserName::new(*name)?,
                *role,
            ))
        })
        .collect()
}

struct LegacyRow {
    position: usize,
    legacy: u64,
    module: &'static str,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    status: Status,
    assignee: Option<&'static str>,
    reported: &'static str,
}

const LEGACY_ROWS: [LegacyRow; 12] = [
    LegacyRow {
        position: 1,
        legacy: 1,
        module: "General",
        title: "Problema en campo Buscar",
        description: "No trae registros o paginación errónea en el listado general.",
        priority: Priority::Medium,
        status: Status::Pending,
        assignee: None,
        reported: "Feb-25",
    },
    LegacyRow {
        position: 2,
        legacy: 2,
        module: "Parcelas",
        title: "Ocupación: Fondo oscuro ilegible",
        description: "El modo noche afecta la legibilidad de las letras en la vista de ocupación.",
        priority: Priority::Low,
        status: Status::Pending,
        assignee: None,
        reported: "Feb-25",
    },
    LegacyRow {
        position: 3,
        legacy: 6,
        module: "Nichos",
        title: "Datos faltantes en Mantenimiento",
        description: "Agregar N° Comprobante, Año de Pago y Forma de Pago en pantalla de mantenimiento.",
        priority: Priority::High,
        status: Status::Pending,
        assignee: None,
        reported: "Feb-25",
    },
    LegacyRow {
        position: 4,
        legacy: 13,
        module: "Ventas",
        title: "Consulta de Ventas por Tipo",
        description: "Nueva consulta de ventas filtrando por Tipo y Nro Documento.",
        priority: Priority::Medium,
        status: Status::InProgress,
        assignee: Some("Roberto"),
        reported: "Mayo-25",
    },
    LegacyRow {
        position: 5,
        legacy: 39,
        module: "Pagos",
        title: "Anulación de comprobantes",
        description: "Generar contra-asiento/débito al anular.",
        priority: Priority::Medium,
        status: Status::Future,
        assignee: None,
        reported: "Mayo-25",
    },
    LegacyRow {
        position: 6,
        legacy: 1,
        module: "General",
        title: "Reimprimir comprobante",
        description: "Botón directo para volver a imprimir comprobante generado.",
        priority: Priority::Medium,
        status: Status::Testing,
        assignee: Some("Roberto"),
        reported: "Jun-25",
    },
    LegacyRow {
        position: 7,
        legacy: 5,
        module: "Pagos",
        title: "Error pago 2023 en Mausoleo",
        description: "Figura pago 2023 en un mausoleo que no debería tenerlo acreditado.",
        priority: Priority::High,
        status: Status::Testing,
        assignee: None,
        reported: "Jun-25",
    },
    LegacyRow {
        position: 8,
        legacy: 1,
        module: "Parcelas",
        title: "Pago Unificado Mantenimiento",
        description: "Emitir 1 solo comprobante para todos los niveles.",
        priority: Priority::Medium,
        status: Status::Done,
        assignee: Some("Roberto"),
        reported: "Ago-25",
    },
    LegacyRow {
        position: 9,
        legacy: 2,
        module: "Base de Datos",
        title: "Modificación tablas pagos",
        description: "Ajuste de estructura DB para soporte de pagos multinivel.",
        priority: Priority::High,
        status: Status::Done,
        assignee: Some("Roberto"),
        reported: "Ago-25",
    },
    LegacyRow {
        position: 10,
        legacy: 1,
        module: "Pagos",
        title: "Error Crítico: Titularidad Comprobante",
        description: "El comprobante sale a nombre de otra persona aleatoria.",
        priority: Priority::High,
        status: Status::Done,
        assignee: Some("Roberto"),
        reported: "Nov-25",
    },
    LegacyRow {
        position: 11,
        legacy: 2,
        module: "Pagos",
        title: "Error PDF Consulta Pagos",
        description: "Fallo al generar PDF en el reporte de pagos por fecha.",
        priority: Priority::High,
        status: Status::Done,
        assignee: Some("Roberto"),
        reported: "Nov-25",
    },
    LegacyRow {
        position: 12,
        legacy: 6,
        module: "Ventas",
        title: "Carga Factura ARCA",
        description: "Permitir cargar factura de ARCA posterior a la venta.",
        priority: Priority::Medium,
        status: Status::Pending,
        assignee: None,
        reported: "Nov-25",
    },
];

fn tickets() -> Result<Vec<ImportedTicketRecord>, SeedError> {
    LEGACY_ROWS.iter().map(record_from_row).collect()
}

fn record_from_row(row: &LegacyRow) -> Result<ImportedTicketRecord, SeedError> {
    Ok(ImportedTicketRecord {
        id: TicketId::from_position(row.position),
        legacy_id: Some(LegacyId::new(row.legacy)),
        project: ProjectName::new("Cem-Muni9")?,
        module: ModuleName::new(row.module)?,
        title: row.title.to_owned(),
        description: row.description.to_owned(),
        priority: row.priority,
        status: row.status,
        assignee: row.assignee.map(UserName::new).transpose()?,
        reported_raw: row.reported.to_owned(),
    })
}
