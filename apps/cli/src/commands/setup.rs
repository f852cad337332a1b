//! # Setup Commands
//!
//! Menu and roster management: `seed`, `menu add`, `menu list`,
//! `people add`, `people list`.

use canteen_core::validation::parse_price;
use canteen_core::{MenuItem, Person, Snapshot};
use canteen_store::{BillSession, SnapshotStore};
use serde::Serialize;
use tracing::debug;

use super::Render;
use crate::error::CliResult;
use crate::state::ConfigState;

/// Result of `seed`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub menu_items: usize,
    pub people: usize,
}

impl Render for SeedResponse {
    fn render_text(&self, _config: &ConfigState) -> String {
        format!(
            "Seeded {} menu items and {} people. All quantities are zero.",
            self.menu_items, self.people
        )
    }
}

/// The menu, in insertion order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub items: Vec<MenuItem>,
}

impl Render for MenuResponse {
    fn render_text(&self, config: &ConfigState) -> String {
        if self.items.is_empty() {
            return "The menu is empty. Add items with `canteen menu add <name> <price>`."
                .to_string();
        }
        let mut lines = vec!["MENU".to_string()];
        lines.extend(self.items.iter().map(|item| {
            format!(
                "  {:<4} {:<20} {:>10}",
                item.id,
                item.name,
                config.format_money(item.unit_price)
            )
        }));
        lines.join("\n")
    }
}

impl Render for MenuItem {
    fn render_text(&self, config: &ConfigState) -> String {
        format!(
            "Added {} at {} (id {})",
            self.name,
            config.format_money(self.unit_price),
            self.id
        )
    }
}

/// The roster, in insertion order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub people: Vec<Person>,
}

impl Render for RosterResponse {
    fn render_text(&self, _config: &ConfigState) -> String {
        if self.people.is_empty() {
            return "Nobody is on the roster. Add people with `canteen people add <name>`."
                .to_string();
        }
        let mut lines = vec!["PEOPLE".to_string()];
        lines.extend(
            self.people
                .iter()
                .map(|person| format!("  {:<4} {}", person.id, person.name)),
        );
        lines.join("\n")
    }
}

impl Render for Person {
    fn render_text(&self, _config: &ConfigState) -> String {
        format!("Added {} (id {})", self.name, self.id)
    }
}

/// Replaces the snapshot with the fixed canteen menu and roster.
pub async fn seed<S: SnapshotStore>(session: &mut BillSession<S>) -> CliResult<SeedResponse> {
    debug!("seed command");
    session.replace(Snapshot::canteen_defaults()).await?;
    let snapshot = session.snapshot();
    Ok(SeedResponse {
        menu_items: snapshot.menu_items.len(),
        people: snapshot.people.len(),
    })
}

/// Adds a menu item from a typed price such as `12.50` or `₹8`.
pub async fn add_menu_item<S: SnapshotStore>(
    session: &mut BillSession<S>,
    name: &str,
    price: &str,
) -> CliResult<MenuItem> {
    debug!(name = %name, price = %price, "menu add command");
    let unit_price = parse_price(price)?;
    Ok(session.add_menu_item(name, unit_price).await?)
}

/// Lists the menu.
pub fn list_menu<S: SnapshotStore>(session: &BillSession<S>) -> MenuResponse {
    debug!("menu list command");
    MenuResponse {
        items: session.snapshot().menu_items.clone(),
    }
}

/// Adds a person to the roster.
pub async fn add_person<S: SnapshotStore>(
    session: &mut BillSession<S>,
    name: &str,
) -> CliResult<Person> {
    debug!(name = %name, "people add command");
    Ok(session.add_person(name).await?)
}

/// Lists the roster.
pub fn list_people<S: SnapshotStore>(session: &BillSession<S>) -> RosterResponse {
    debug!("people list command");
    RosterResponse {
        people: session.snapshot().people.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use canteen_core::Money;
    use canteen_store::MemoryStore;

    async fn empty_session() -> BillSession<MemoryStore> {
        BillSession::open(MemoryStore::new(), Snapshot::default)
            .await
            .unwrap()
    }

    fn config() -> ConfigState {
        ConfigState::from_lookup(|_| None)
    }

    #[tokio::test]
    async fn test_seed_loads_canteen_defaults() {
        let mut session = empty_session().await;
        let response = seed(&mut session).await.unwrap();

        assert_eq!(response.menu_items, 10);
        assert_eq!(response.people, 5);
        assert_eq!(
            session.store().load().await.unwrap(),
            Some(Snapshot::canteen_defaults())
        );
    }

    #[tokio::test]
    async fn test_menu_add_parses_price() {
        let mut session = empty_session().await;
        let item = add_menu_item(&mut session, "Vada", "6.50").await.unwrap();

        assert_eq!(item.unit_price, Money::from_minor(650));
        assert_eq!(item.render_text(&config()), format!("Added Vada at ₹6.50 (id {})", item.id));
        assert_eq!(list_menu(&session).items, vec![item]);
    }

    #[tokio::test]
    async fn test_menu_add_rejects_bad_input() {
        let mut session = empty_session().await;

        let err = add_menu_item(&mut session, "Vada", "free").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_menu_item(&mut session, "   ", "5").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(list_menu(&session).items.is_empty());
    }

    #[tokio::test]
    async fn test_people_add_and_list() {
        let mut session = empty_session().await;
        add_person(&mut session, "Dinto").await.unwrap();
        add_person(&mut session, "Riyas").await.unwrap();

        let names: Vec<_> = list_people(&session)
            .people
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Dinto", "Riyas"]);
    }

    #[tokio::test]
    async fn test_roster_text_is_one_line_per_person() {
        let mut session = empty_session().await;
        seed(&mut session).await.unwrap();

        assert_eq!(
            list_people(&session).render_text(&config()),
            "PEOPLE\n  1    Akhil\n  2    Vishnu\n  3    Riyas\n  4    Dinto\n  5    Swapna"
        );
    }

    #[tokio::test]
    async fn test_list_renders_in_insertion_order() {
        let mut session = empty_session().await;
        seed(&mut session).await.unwrap();

        let text = list_menu(&session).render_text(&config());
        let puri = text.find("Puri").unwrap();
        let tea = text.find("Tea").unwrap();
        assert!(puri < tea);
        assert!(text.contains("₹8.00"));

        assert!(RosterResponse { people: vec![] }
            .render_text(&config())
            .contains("canteen people add"));
    }
}
