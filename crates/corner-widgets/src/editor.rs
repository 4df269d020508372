//! The inline quantity editor.
//!
//! Activating an add control does not write to the cart. It opens an
//! ephemeral per-trigger session holding a quantity stepper; only commit
//! forwards the choice to the store. Each trigger has at most one active
//! session, and sessions on different triggers are independent.
//!
//! When a product cannot be mapped to any control the add degrades to a
//! direct one-unit write plus confirmation toast. That path is logged
//! for developers but is not an error the shopper sees.

use std::collections::HashMap;

use corner_commerce::cart::clamp_quantity;
use corner_commerce::catalog::Product;
use corner_store::CartStore;

use crate::effect::{Effects, UiEffect};
use crate::page::CatalogPage;
use crate::toast;
use crate::trigger::{TriggerId, TriggerRegistry};

/// One in-progress quantity edit. Session state is local until commit.
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub product: Product,
    pub quantity: i64,
}

/// Per-trigger editor state machine over a shared cart store.
pub struct InlineEditorController {
    registry: TriggerRegistry,
    sessions: HashMap<TriggerId, EditorSession>,
}

impl InlineEditorController {
    pub fn new(registry: TriggerRegistry) -> Self {
        Self {
            registry,
            sessions: HashMap::new(),
        }
    }

    /// The add entry point.
    ///
    /// Uses the supplied trigger when the host has one, otherwise resolves
    /// through the registry and its heuristics. With a trigger in hand this
    /// opens an editor session; without one it degrades to a direct
    /// one-unit add plus confirmation.
    pub fn add_to_cart(
        &mut self,
        store: &mut CartStore,
        page: &CatalogPage,
        product: &Product,
        trigger: Option<TriggerId>,
    ) -> Effects {
        let trigger = trigger.or_else(|| self.registry.resolve(page, &product.name));
        let Some(trigger) = trigger else {
            tracing::warn!(product = %product.name, "add control not found; adding directly");
            store.add(product.name.clone(), product.image.clone(), product.price, 1);
            return toast::confirmation(toast::added_message(1, &product.name));
        };
        self.request(trigger, product.clone(), 1)
    }

    /// Open an editor session at `trigger`.
    ///
    /// A second request while the trigger's session is active is a no-op,
    /// so overlapping activations cannot stack editors.
    pub fn request(
        &mut self,
        trigger: TriggerId,
        product: Product,
        initial_quantity: i64,
    ) -> Effects {
        if self.sessions.contains_key(&trigger) {
            return Effects::none();
        }

        self.sessions.insert(
            trigger,
            EditorSession {
                product,
                quantity: clamp_quantity(initial_quantity),
            },
        );

        let mut effects = Effects::now(UiEffect::HideTrigger(trigger));
        effects.push(UiEffect::MountEditor(trigger));
        effects
    }

    /// Step the session quantity up, staying in range. Returns the new
    /// quantity, or `None` when no session is active at `trigger`.
    pub fn increment(&mut self, trigger: TriggerId) -> Option<i64> {
        self.step(trigger, 1)
    }

    /// Step the session quantity down, staying in range.
    pub fn decrement(&mut self, trigger: TriggerId) -> Option<i64> {
        self.step(trigger, -1)
    }

    fn step(&mut self, trigger: TriggerId, delta: i64) -> Option<i64> {
        let session = self.sessions.get_mut(&trigger)?;
        session.quantity = clamp_quantity(session.quantity.saturating_add(delta));
        Some(session.quantity)
    }

    /// Forward the session's choice to the store and tear down.
    pub fn commit(&mut self, trigger: TriggerId, store: &mut CartStore) -> Effects {
        let Some(session) = self.sessions.remove(&trigger) else {
            return Effects::none();
        };

        store.add(
            session.product.name.clone(),
            session.product.image.clone(),
            session.product.price,
            session.quantity,
        );

        let mut effects =
            toast::confirmation(toast::added_message(session.quantity, &session.product.name));
        effects.push(UiEffect::UnmountEditor(trigger));
        effects.push(UiEffect::ShowTrigger(trigger));
        effects
    }

    /// Tear down without touching the store.
    pub fn cancel(&mut self, trigger: TriggerId) -> Effects {
        if self.sessions.remove(&trigger).is_none() {
            return Effects::none();
        }

        let mut effects = Effects::now(UiEffect::UnmountEditor(trigger));
        effects.push(UiEffect::ShowTrigger(trigger));
        effects
    }

    /// True while `trigger` has an open session.
    pub fn is_active(&self, trigger: TriggerId) -> bool {
        self.sessions.contains_key(&trigger)
    }

    /// The session quantity at `trigger`, if one is open.
    pub fn quantity(&self, trigger: TriggerId) -> Option<i64> {
        self.sessions.get(&trigger).map(|session| session.quantity)
    }

    pub fn session(&self, trigger: TriggerId) -> Option<&EditorSession> {
        self.sessions.get(&trigger)
    }
}
