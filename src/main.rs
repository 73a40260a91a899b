use culturalcalendar::calendar::{export_selection, CalendarBridge, IcsFileBridge};
use culturalcalendar::catalog::InstitutionCatalog;
use culturalcalendar::config::env_loader::load_config;
use culturalcalendar::events::api::EventsAPI;
use culturalcalendar::session::{Action, AppState};
use culturalcalendar::tracing::setup_loki;
use itertools::Itertools;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let loki = setup_loki().await;

    let config = load_config();
    let catalog = InstitutionCatalog::default();
    let store = EventsAPI::new(config.fetch_max_retries)
        .load(&config.events_source)
        .await;

    let mut state = config
        .initial_actions()
        .into_iter()
        .fold(AppState::default(), AppState::apply);

    let visible = state.visible_events(&store);

    if visible.is_empty() {
        info!("No events found in {}", state.filter.city);
    } else {
        info!(
            "{} event{} found in {}",
            visible.len(),
            if visible.len() == 1 { "" } else { "s" },
            state.filter.city
        );
    }

    let limit = config
        .debug_config
        .event_limit
        .and_then(|limit| usize::try_from(limit).ok())
        .unwrap_or(visible.len());

    visible.iter().take(limit).for_each(|event| {
        let marker = if state.selection.contains(event.id) { "[x]" } else { "[ ]" };
        let kind = event.kind.map(|kind| kind.label()).unwrap_or("Other");

        info!(
            "{} #{} {} | {} | {} {} | {}",
            marker,
            event.id,
            event.title,
            catalog.display_name(&event.institution),
            event.date.map(|date| date.to_string()).unwrap_or_default(),
            event.time,
            kind
        )
    });

    visible
        .iter()
        .map(|event| event.institution.as_str())
        .counts()
        .into_iter()
        .sorted_by_key(|&(institution, _)| catalog.display_name(institution))
        .for_each(|(institution, count)| {
            info!("{}: {} events", catalog.describe(institution), count)
        });

    if let Some(path) = config.export_path.as_ref() {
        let mut bridge = IcsFileBridge::new(path);

        match bridge.connect().await {
            Ok(()) => state = state.apply(Action::CalendarConnected),
            Err(e) => error!("Couldn't open the calendar: {}", e),
        }

        match export_selection(&mut bridge, &store, &catalog, &state).await {
            Ok(report) => {
                if report.is_total_failure() {
                    warn!("No event could be exported");
                }
                state = state.apply(Action::ExportCompleted(report));
                info!("{} events still selected", state.selection.len());
            }
            Err(e) => error!("Export failed: {}", e),
        }
    }

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        if let Err(e) = handle.await {
            error!("Loki task failed: {}", e);
        }
    }
}
