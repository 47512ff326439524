//! Order command implementation.

use kumpir::{Event, ItemId, MenuSession, NotificationPort, OrderSummary};
use kumpir_config::MenuConfig;
use serde::Serialize;

use crate::cli::OrderArgs;
use crate::error::{CliError, Result};
use crate::ui::{self, ToastPort};

/// Machine-readable result of `kumpir order --json`.
#[derive(Debug, Serialize)]
pub struct OrderReport {
    pub currency: String,
    pub selection: Vec<ItemId>,
    pub summary: OrderSummary,
    pub events: Vec<Event>,
}

/// Start a session, apply the requested changes and print the summary.
///
/// # Errors
///
/// Fails on the first unknown item id; nothing is printed for it.
pub fn execute(args: OrderArgs, config: &MenuConfig) -> Result<()> {
    let port = if args.json {
        ToastPort::silent()
    } else {
        ToastPort::new(&config.notifications)
    };
    let mut session = config.start_session(port)?;
    apply(&mut session, &args.items, &args.without)?;

    if args.json {
        let report = report(session, config);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ui::print_summary(&session.summary(), &config.pricing.currency);
    }
    Ok(())
}

/// Select `add` then deselect `remove`. Already-satisfied requests are no-ops.
///
/// An id named in both lists is rejected before anything changes.
pub fn apply<P: NotificationPort>(
    session: &mut MenuSession<P>,
    add: &[String],
    remove: &[String],
) -> Result<()> {
    if let Some(id) = add.iter().find(|id| remove.contains(id)) {
        return Err(CliError::InvalidArgument(format!(
            "'{}' is both added and removed",
            id
        )));
    }

    for id in add {
        if !session.select(id)? {
            tracing::debug!(item = %id, "already selected");
        }
    }
    for id in remove {
        if !session.deselect(id)? {
            tracing::debug!(item = %id, "already absent");
        }
    }
    Ok(())
}

fn report(session: MenuSession<ToastPort>, config: &MenuConfig) -> OrderReport {
    let summary = session.summary();
    let selection = session
        .current_selection()
        .sorted()
        .into_iter()
        .cloned()
        .collect();
    OrderReport {
        currency: config.pricing.currency.clone(),
        selection,
        summary,
        events: session.into_port().into_log().into_events(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kumpir::{ChangeKind, EventLog};

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_apply_reaches_289() {
        let mut session = MenuConfig::default().start_session(EventLog::new()).unwrap();
        apply(&mut session, &ids(&["cheese", "paneer", "butter"]), &[]).unwrap();

        assert_eq!(session.summary().total_price, 289);
        // butter was already included, so only two toasts
        assert_eq!(session.port().len(), 2);
    }

    #[test]
    fn test_apply_without_removes_included() {
        let mut session = MenuConfig::default().start_session(EventLog::new()).unwrap();
        apply(&mut session, &[], &ids(&["butter"])).unwrap();

        assert!(session.current_selection().is_empty());
        let kinds: Vec<_> = session.port().selection_events().map(|e| e.kind).collect();
        assert_eq!(kinds, [ChangeKind::Removed]);
    }

    #[test]
    fn test_apply_stops_at_unknown_item() {
        let mut session = MenuConfig::default().start_session(EventLog::new()).unwrap();
        let err = apply(&mut session, &ids(&["cheese", "truffle", "corn"]), &[]).unwrap_err();

        assert!(matches!(
            err,
            CliError::Menu(kumpir::Error::UnknownItem { .. })
        ));
        assert!(session.is_selected("cheese"));
        assert!(!session.is_selected("corn"));
    }

    #[test]
    fn test_apply_rejects_contradicting_lists() {
        let mut session = MenuConfig::default().start_session(EventLog::new()).unwrap();
        let err = apply(&mut session, &ids(&["corn", "cheese"]), &ids(&["cheese"])).unwrap_err();

        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert!(err.to_string().contains("'cheese' is both added and removed"));
        assert!(!session.is_selected("corn"));
        assert!(session.port().is_empty());
    }

    #[test]
    fn test_report_serializes_events() {
        let config = MenuConfig::default();
        let mut session = config.start_session(ToastPort::silent()).unwrap();
        apply(&mut session, &ids(&["cheese"]), &[]).unwrap();

        let value = serde_json::to_value(report(session, &config)).unwrap();
        assert_eq!(value["summary"]["total_price"], 229);
        assert_eq!(value["selection"], serde_json::json!(["butter", "cheese"]));
        assert_eq!(value["events"][0]["type"], "selection");
        assert_eq!(value["events"][0]["kind"], "added");
    }
}
