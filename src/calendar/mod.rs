pub mod bridge;
pub mod ics;

pub use bridge::{BridgeError, CalendarBridge, CalendarEntry};
pub use ics::IcsFileBridge;

use crate::catalog::InstitutionCatalog;
use crate::events::{EventId, EventStore};
use crate::session::AppState;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no calendar is connected")]
    NotConnected,
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Outcome of one export, per event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub exported: Vec<EventId>,
    pub failed: Vec<EventId>,
}

impl ExportReport {
    pub fn is_total_failure(&self) -> bool {
        self.exported.is_empty() && !self.failed.is_empty()
    }
}

/**
Inserts every selected event into the calendar, in store order.

The state is left untouched: feed the report back as `Action::ExportCompleted`
so only the exported events leave the selection.
*/
#[tracing::instrument(skip_all, fields(selected = state.selection.len()))]
pub async fn export_selection<B: CalendarBridge>(
    bridge: &mut B,
    store: &EventStore,
    catalog: &InstitutionCatalog,
    state: &AppState,
) -> Result<ExportReport, ExportError> {
    if !state.calendar_connected {
        return Err(ExportError::NotConnected);
    }

    let mut report = ExportReport::default();

    for id in state.selection.iter() {
        if store.get(id).is_none() {
            warn!("Selected event {} is not in the store", id);
            report.failed.push(id);
        }
    }

    for event in state.selection.selected_events(store) {
        let Some(entry) = CalendarEntry::from_event(event, catalog) else {
            warn!("Event {} has no date and can't be exported", event.id);
            report.failed.push(event.id);
            continue;
        };

        match bridge.insert_event(&entry).await {
            Ok(()) => report.exported.push(event.id),
            Err(e) => {
                warn!("Failed exporting event {}: {}", event.id, e);
                report.failed.push(event.id);
            }
        }
    }

    if !report.exported.is_empty() {
        bridge.finish().await?;
    }

    info!(
        "Export finished: {} exported, {} failed",
        report.exported.len(),
        report.failed.len()
    );

    Ok(report)
}
