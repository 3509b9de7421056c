//! Session Store
//!
//! One explicit shared store for everything session-shaped: mock
//! login, display language, and the cart. Uses Leptos reactive_stores
//! for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Order, OrderLine, Product};

/// Display language toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Es => "ES",
        }
    }
}

/// One product in the cart
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartLine {
    pub product_id: u32,
    pub quantity: u32,
}

/// Session-scoped state shared across pages
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    pub logged_in: bool,
    pub member_name: String,
    pub language: Language,
    pub cart: Vec<CartLine>,
}

pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn session_login(store: &SessionStore, name: String) {
    store.member_name().set(name);
    store.logged_in().set(true);
}

pub fn session_logout(store: &SessionStore) {
    store.logged_in().set(false);
    store.member_name().set(String::new());
}

pub fn session_is_logged_in(store: &SessionStore) -> bool {
    store.logged_in().get()
}

pub fn session_member_name(store: &SessionStore) -> String {
    store.member_name().get()
}

pub fn session_language(store: &SessionStore) -> Language {
    store.language().get()
}

pub fn session_toggle_language(store: &SessionStore) {
    store.language().update(|lang| {
        *lang = match lang {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    });
}

/// Add one unit of a product, merging with an existing line
pub fn cart_add(store: &SessionStore, product_id: u32) {
    store.cart().update(|cart| {
        if let Some(line) = cart.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity += 1;
        } else {
            cart.push(CartLine {
                product_id,
                quantity: 1,
            });
        }
    });
}

pub fn cart_clear(store: &SessionStore) {
    store.cart().update(|cart| cart.clear());
}

pub fn cart_count(store: &SessionStore) -> u32 {
    store.cart().get().iter().map(|l| l.quantity).sum()
}

/// Build the order payload the checkout call would POST
pub fn cart_order(store: &SessionStore, products: &[Product]) -> Order {
    let lines: Vec<OrderLine> = store
        .cart()
        .get()
        .iter()
        .filter_map(|line| {
            products.iter().find(|p| p.id == line.product_id).map(|p| OrderLine {
                product_id: p.id,
                name: p.name.clone(),
                quantity: line.quantity,
                price_cents: p.price_cents,
            })
        })
        .collect();
    let total_cents = lines.iter().map(|l| l.price_cents * l.quantity).sum();
    Order { lines, total_cents }
}
