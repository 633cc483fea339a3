//! # site
//!
//! Page-level behaviour around the assistant, as plain state: theme preference, nav menu,
//! scroll effects, stats counters, the contact-form deep link, and notifications.
//!
//! Nothing here touches a DOM or a terminal: a host shell feeds in events (scroll offsets,
//! clicks, elapsed time) and renders what these types report. The CLI drives the theme,
//! contact and notification parts; menu, scroll and stats are for a page shell.

pub mod contact;
pub mod error;
pub mod menu;
pub mod notification;
pub mod scroll;
pub mod stats;
pub mod theme;

pub use contact::ContactForm;
pub use error::{Result, SiteError};
pub use menu::NavMenu;
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use stats::{CounterAnimation, StatsCounter};
pub use theme::{Theme, ThemeStore};
