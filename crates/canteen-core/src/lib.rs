//! # canteen-core: Pure Bill Allocation for Canteen Split
//!
//! This crate is the **heart** of Canteen Split. It decides what each person
//! at the table owes, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Canteen Split Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  UI / command layer (apps/cli)                  │   │
//! │  │    Setup ──► Select Person ──► Order ──► Shared ──► Final Bill  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain Snapshot data                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ canteen-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐ ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ allocation │ │ validation│  │   │
//! │  │   │  MenuItem │  │   Money   │  │  Engine    │ │   rules   │  │   │
//! │  │   │  Person   │  │  split    │  │  FinalBill │ │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘ └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 canteen-store (persistence)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Menu items, people and the caller-owned [`Snapshot`]
//! - [`selection`] - Individual and shared quantity maps
//! - [`money`] - Money type with integer arithmetic
//! - [`allocation`] - The allocation engine (totals, shares, participants)
//! - [`bill`] - Final bill view built from the engine
//! - [`error`] - Domain error types
//! - [`validation`] - Setup input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same snapshot in, same totals out
//! 2. **No I/O**: persistence belongs to `canteen-store`
//! 3. **Integer Money**: prices and totals are whole paise; only the shared
//!    share per participant is fractional
//! 4. **Total Engine**: allocation never fails; bad deltas clamp and empty
//!    denominators yield zero
//!
//! ## Example Usage
//!
//! ```rust
//! use canteen_core::{AllocationEngine, Money, Snapshot};
//!
//! let mut snapshot = Snapshot::default();
//! let puri = snapshot.add_menu_item("Puri", Money::from_major(8)).unwrap();
//! let tea = snapshot.add_menu_item("Tea", Money::from_major(9)).unwrap();
//! let akhil = snapshot.add_person("Akhil").unwrap();
//! snapshot.add_person("Vishnu").unwrap();
//!
//! snapshot.individual_selections.adjust(&akhil.id, &puri.id, 2);
//! snapshot.shared_selections.adjust(&tea.id, 1);
//!
//! let engine = AllocationEngine::new(&snapshot);
//! assert_eq!(engine.grand_total(), Money::from_major(25));
//! assert_eq!(engine.person_final_total(&akhil.id), Some(25.0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocation;
pub mod bill;
pub mod error;
pub mod money;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use allocation::AllocationEngine;
pub use bill::{FinalBill, ItemBreakdown, ItemLine, PersonLine, PersonSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use selection::{IndividualSelections, SharedSelections};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minor currency units (paise) in one major unit (rupee).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Longest accepted menu item or person name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;
