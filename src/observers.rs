use tracing::info;

use crate::{notice::Notice, user::User};

/// Trait for notice observation
pub trait CatalogObserver {
    /// Called once for every notice the catalog emits
    fn on_notice(&self, notice: &Notice);
}

/// Logs every notice through `tracing`
#[derive(Debug, Default)]
pub struct TransitionLogger;

impl CatalogObserver for TransitionLogger {
    fn on_notice(&self, notice: &Notice) {
        match notice {
            Notice::CatalogOpened => info!("{notice}"),
            Notice::Transition(transition) => info!(
                book = %transition.book,
                title = %transition.title,
                action = transition.event.verb(),
                member = transition.event.user().map_or("-", User::name),
                from = %transition.from,
                to = %transition.to,
                refused = !transition.is_applied(),
                "{transition}"
            ),
        }
    }
}
