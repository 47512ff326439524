//! Kumpir builder core.
//!
//! The logic behind the "build your own kumpir" screen: a validated
//! [`Catalog`] of toppings, a [`SelectionStore`] that tracks what the guest
//! picked, the [`summary`] engine that turns a selection into a price and a
//! calorie count, and a [`BrowseController`] for the category accordion.
//! [`MenuSession`] wires them together for a single screen.
//!
//! Nothing here renders, persists or talks to the network. Changes are
//! reported synchronously through a [`NotificationPort`].

pub mod browse;
pub mod catalog;
pub mod error;
pub mod notify;
pub mod selection;
pub mod session;
pub mod summary;

pub use browse::{BrowseController, BrowseState};
pub use catalog::{Catalog, Category, Item, ItemId, builtin};
pub use error::{CatalogError, Error, Result};
pub use notify::{
    ChangeKind, Event, EventLog, NoopPort, NotificationPort, SelectionChanged, TracingPort,
};
pub use selection::{SelectionSet, SelectionStore};
pub use session::MenuSession;
pub use summary::{
    BASE_CALORIES, BASE_PRICE, CategoryProgress, OrderSummary, Pricing, category_progress,
    summarize,
};
