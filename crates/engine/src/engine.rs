//! The ordering engine: classify, route, handle.

use std::sync::Arc;

use garcon_core::{
    Cart, CartStore, Catalog, DEFAULT_GREETING, Intent, IntentClassifier, ItemMatcher, Responder,
    Result, SessionId,
};
use garcon_nlu::{KeywordClassifier, SubstringMatcher};
use tracing::{debug, warn};

use crate::render;

/// The outcome of one conversation turn: the reply text and the session's
/// cart after the turn.
#[derive(Debug, Clone)]
pub struct Turn {
    pub reply: String,
    pub cart: Cart,
}

/// The handler a message is dispatched to. Exactly one per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    ShowMenu,
    AddToCart,
    ViewCart,
    ConfirmOrder,
    GeneralChat,
}

/// Maps an intent to its handler. Total: every intent has exactly one.
pub fn route(intent: Intent) -> Handler {
    match intent {
        Intent::Menu => Handler::ShowMenu,
        Intent::AddItem => Handler::AddToCart,
        Intent::ViewCart => Handler::ViewCart,
        Intent::ConfirmOrder => Handler::ConfirmOrder,
        Intent::General => Handler::GeneralChat,
    }
}

/// Orchestrates one turn of the ordering conversation.
///
/// Holds the catalog plus the injected capabilities: classifier, matcher,
/// cart store, and the general-chat responder. The classifier and matcher
/// default to the keyword/substring implementations from `garcon-nlu`.
pub struct OrderingEngine {
    catalog: Catalog,
    classifier: Box<dyn IntentClassifier>,
    matcher: Box<dyn ItemMatcher>,
    store: Arc<dyn CartStore>,
    responder: Arc<dyn Responder>,
}

impl OrderingEngine {
    pub fn new(catalog: Catalog, store: Arc<dyn CartStore>, responder: Arc<dyn Responder>) -> Self {
        Self {
            catalog,
            classifier: Box::new(KeywordClassifier::new()),
            matcher: Box::new(SubstringMatcher::new()),
            store,
            responder,
        }
    }

    /// Swap in a custom classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Swap in a custom matcher.
    pub fn with_matcher(mut self, matcher: Box<dyn ItemMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Process one customer message for a session.
    pub async fn submit(&self, message: &str, session: &SessionId) -> Result<Turn> {
        let intent = self.classifier.classify(message);
        let handler = route(intent);
        debug!(
            session = %session,
            intent = intent.as_str(),
            handler = ?handler,
            "dispatching message"
        );

        match handler {
            Handler::ShowMenu => {
                let cart = self.store.read(session).await?;
                Ok(Turn {
                    reply: render::menu_text(&self.catalog),
                    cart,
                })
            }
            Handler::AddToCart => {
                let matched = self.matcher.match_items(message, &self.catalog);
                if matched.is_empty() {
                    let cart = self.store.read(session).await?;
                    return Ok(Turn {
                        reply: render::NO_MATCH_REPLY.to_string(),
                        cart,
                    });
                }
                let cart = self.store.add_items(session, &matched).await?;
                Ok(Turn {
                    reply: render::added_text(&matched, &cart),
                    cart,
                })
            }
            Handler::ViewCart => {
                let cart = self.store.read(session).await?;
                let reply = if cart.is_empty() {
                    render::EMPTY_CART_REPLY.to_string()
                } else {
                    render::cart_text(&cart)
                };
                Ok(Turn { reply, cart })
            }
            Handler::ConfirmOrder => match self.store.take_order(session).await? {
                Some(order) => Ok(Turn {
                    reply: render::receipt_text(&order),
                    cart: Cart::new(),
                }),
                None => Ok(Turn {
                    reply: render::EMPTY_CART_CONFIRM_REPLY.to_string(),
                    cart: Cart::new(),
                }),
            },
            Handler::GeneralChat => {
                // Responder runs outside any store lock; a slow LLM can't
                // stall other sessions.
                let reply = match self.responder.generate(message).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        warn!(error = %e, "responder failed, using canned greeting");
                        DEFAULT_GREETING.to_string()
                    }
                };
                let cart = self.store.read(session).await?;
                Ok(Turn { reply, cart })
            }
        }
    }

    /// The session's current cart.
    pub async fn read_cart(&self, session: &SessionId) -> Result<Cart> {
        Ok(self.store.read(session).await?)
    }

    /// Drop the session's cart.
    pub async fn clear_cart(&self, session: &SessionId) -> Result<()> {
        Ok(self.store.clear(session).await?)
    }

    /// Live sessions in the store.
    pub async fn session_count(&self) -> Result<usize> {
        Ok(self.store.session_count().await?)
    }
}
