//! Local fallback analyzer used when no backend credential is configured.

use async_trait::async_trait;
use std::time::Duration;

use crate::analysis::ports::{AnalyzerResult, BacklogAnalyzer};

/// Fixed delay simulating the remote round trip.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

const CANNED_ANALYSIS: &str = "\
### Análisis de Backlog (Simulado)

**1. Cuellos de Botella Críticos:**
*   **Nichos - Datos faltantes (Alta):** Afecta la integridad de los registros de pago.
*   **Pagos - Error 2023 en Mausoleo (Alta):** Problema de consistencia de datos contables.
*   **Ventas - Descuento no reflejado (Alta):** Impacto financiero directo.

**2. Plan de Acción para Roberto:**
*   Priorizar el **Error 2023 en Mausoleo** ya que afecta la confianza del contribuyente.
*   Seguir con la corrección de **Descuentos en Ventas**.
*   Delegar o posponer cambios estéticos (Modo noche) hasta resolver inconsistencias de datos.

**3. Mensaje:**
> \"La calidad nunca es un accidente; siempre es el resultado de un esfuerzo de la inteligencia.\" - John Ruskin";

/// Analyzer that returns a canned analysis after a fixed simulated delay.
///
/// Never fails; the prompt content is ignored.
#[derive(Debug, Clone)]
pub struct SimulatedAnalyzer {
    delay: Duration,
}

impl SimulatedAnalyzer {
    /// Creates a fallback analyzer with the product's simulated delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }

    /// Overrides the simulated delay (tests).
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BacklogAnalyzer for SimulatedAnalyzer {
    async fn analyze(&self, _prompt: &str) -> AnalyzerResult<String> {
        tokio::time::sleep(self.delay).await;
        Ok(CANNED_ANALYSIS.to_owned())
    }
}
