//! # Bill Commands
//!
//! Read-only views: `status` (the running tally) and `bill` (the final
//! settlement).
//!
//! ## Final Bill Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ITEMS                    Qty (ind + shared)        Total               │
//! │  Puri                     2   (2 + 0)               ₹16.00              │
//! │  Tea                      1   (0 + 1)                ₹9.00              │
//! │                                                                         │
//! │  PEOPLE                   Individual   Shared       Final               │
//! │  Akhil                    ₹16.00       ₹4.5         ₹20.5               │
//! │  Riyas                    ₹8.00        ₹4.5         ₹12.5               │
//! │                                                                         │
//! │  Grand total ₹33.00                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! People who ordered nothing individually are left out of the final bill.

use canteen_core::{FinalBill, Money, PersonSummary};
use canteen_store::{BillSession, SnapshotStore};
use serde::Serialize;
use tracing::debug;

use super::Render;
use crate::state::ConfigState;

/// One shared item in the running tally.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedLine {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub line_total: Money,
    /// Line total over the whole roster. A preview only; the final bill
    /// divides by participants.
    pub roster_preview_share: f64,
}

/// Result of `status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub people: Vec<PersonSummary>,
    pub shared: Vec<SharedLine>,
    pub shared_total: Money,
    pub grand_total: Money,
}

impl Render for StatusResponse {
    fn render_text(&self, config: &ConfigState) -> String {
        let mut lines = vec!["PEOPLE".to_string()];
        lines.extend(self.people.iter().map(|person| {
            format!(
                "  {:<16} {:>10}{}",
                person.name,
                config.format_money(person.individual_total),
                if person.participating { "" } else { "  (not ordering)" }
            )
        }));

        if !self.shared.is_empty() {
            lines.push(String::new());
            lines.push("SHARED".to_string());
            lines.extend(self.shared.iter().map(|line| {
                format!(
                    "  {:<16} x{:<3} {:>10}   ~{} per head",
                    line.name,
                    line.quantity,
                    config.format_money(line.line_total),
                    config.format_amount(line.roster_preview_share)
                )
            }));
        }

        lines.push(String::new());
        lines.push(format!("Shared total {}", config.format_money(self.shared_total)));
        lines.push(format!("Grand total  {}", config.format_money(self.grand_total)));
        lines.join("\n")
    }
}

impl Render for FinalBill {
    fn render_text(&self, config: &ConfigState) -> String {
        let mut lines = vec!["ITEMS".to_string()];
        if self.items.is_empty() {
            lines.push("  (nothing ordered)".to_string());
        }
        lines.extend(self.items.iter().map(|line| {
            let b = &line.breakdown;
            format!(
                "  {:<16} {:>3} ({} + {})   {:>10}",
                line.name,
                b.total_quantity,
                b.individual_quantity,
                b.shared_quantity,
                config.format_money(b.line_total)
            )
        }));

        lines.push(String::new());
        lines.push("PEOPLE".to_string());
        if self.people.is_empty() {
            lines.push("  (nobody has ordered)".to_string());
        }
        lines.extend(self.people.iter().map(|person| {
            format!(
                "  {:<16} {:>10} + {:>8} = {:>10}",
                person.name,
                config.format_money(person.individual_total),
                config.format_amount(person.shared_share),
                config.format_amount(person.final_total)
            )
        }));

        if self.has_unassigned_shared_cost() {
            lines.push(String::new());
            lines.push(format!(
                "Shared items worth {} are not assigned to anyone.",
                config.format_money(self.shared_total)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Grand total {}", config.format_money(self.grand_total)));
        lines.join("\n")
    }
}

/// Builds the running tally.
pub fn status<S: SnapshotStore>(session: &BillSession<S>) -> StatusResponse {
    debug!("status command");
    let engine = session.engine();

    let shared = session
        .snapshot()
        .menu_items
        .iter()
        .filter_map(|item| {
            let quantity = engine.shared_quantity(&item.id);
            (quantity > 0).then(|| SharedLine {
                item_id: item.id.clone(),
                name: item.name.clone(),
                quantity,
                line_total: item.line_total(quantity),
                roster_preview_share: engine.roster_preview_share(&item.id),
            })
        })
        .collect();

    StatusResponse {
        people: engine.roster_summary(),
        shared,
        shared_total: engine.shared_total(),
        grand_total: engine.grand_total(),
    }
}

/// Builds the final bill.
pub fn bill<S: SnapshotStore>(session: &BillSession<S>) -> FinalBill {
    debug!("bill command");
    session.engine().final_bill()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ordering::{order, share};
    use canteen_core::Snapshot;
    use canteen_store::MemoryStore;
    use pretty_assertions::assert_eq;

    async fn lunch() -> BillSession<MemoryStore> {
        let mut session = BillSession::open(MemoryStore::new(), Snapshot::canteen_defaults)
            .await
            .unwrap();
        order(&mut session, "Akhil", "Puri", 2).await.unwrap();
        order(&mut session, "Riyas", "Dosa", 1).await.unwrap();
        share(&mut session, "Tea", 1).await.unwrap();
        session
    }

    fn config() -> ConfigState {
        ConfigState::from_lookup(|_| None)
    }

    #[tokio::test]
    async fn test_status_lists_everyone_and_shared_items() {
        let session = lunch().await;
        let response = status(&session);

        assert_eq!(response.people.len(), 5);
        assert!(response.people[0].participating);
        assert!(!response.people[1].participating);
        assert_eq!(response.shared.len(), 1);
        assert_eq!(response.shared[0].name, "Tea");
        // 9 over the roster of 5, not over the 2 participants.
        assert_eq!(response.shared[0].roster_preview_share, 1.8);
        assert_eq!(response.grand_total, Money::from_major(33));

        let text = response.render_text(&config());
        assert!(text.contains("(not ordering)"));
        assert!(text.contains("Grand total  ₹33.00"));
    }

    #[tokio::test]
    async fn test_bill_splits_among_participants() {
        let session = lunch().await;
        let bill = bill(&session);

        let finals: Vec<_> = bill
            .people
            .iter()
            .map(|p| (p.name.as_str(), p.final_total))
            .collect();
        assert_eq!(finals, vec![("Akhil", 20.5), ("Riyas", 12.5)]);
        assert_eq!(bill.grand_total, Money::from_major(33));

        let text = bill.render_text(&config());
        assert!(text.contains("₹20.5"));
        assert!(text.contains("Grand total ₹33.00"));
        assert!(!text.contains("not assigned"));
    }

    #[tokio::test]
    async fn test_bill_text_layout() {
        let session = lunch().await;
        let text = bill(&session).render_text(&config());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ITEMS");
        assert_eq!(lines.len(), 10);
        assert_eq!(&lines[4..6], &["", "PEOPLE"]);
        assert!(lines[6].starts_with("  Akhil"));
        assert!(lines[7].starts_with("  Riyas"));
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "Grand total ₹33.00");
        assert!(!text.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_bill_reports_unassigned_shared_cost() {
        let mut session = BillSession::open(MemoryStore::new(), Snapshot::canteen_defaults)
            .await
            .unwrap();
        share(&mut session, "Coffee", 2).await.unwrap();

        let bill = bill(&session);
        assert!(bill.people.is_empty());
        assert!(bill.has_unassigned_shared_cost());

        let text = bill.render_text(&config());
        assert!(text.contains("(nobody has ordered)"));
        assert!(text.contains("Shared items worth ₹20.00 are not assigned"));
        assert!(text.contains("Grand total ₹20.00"));
    }
}
