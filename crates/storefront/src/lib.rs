//! Handloom Storefront - Buyer-facing page features.
//!
//! Each feature is mounted once per page load against the shared
//! [`KeyValueStorage`](handloom_core::KeyValueStorage) and a view supplied by
//! the presentation layer. After that it only reacts to user events.
//!
//! - [`cart`] - Add/buy-now/remove with a persisted, merged line list
//! - [`checkout`] - Read-only cash-on-delivery summary and confirmation
//! - [`login`] - Role-based redirect from the login form

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod login;

pub use cart::{
    CART_STORAGE_KEY, Cart, CartItemView, CartLineItem, CartManager, CartPanel, CartView,
    ProductCard,
};
pub use checkout::{CheckoutReader, CheckoutState, CheckoutView};
pub use login::{Destination, Navigator, redirect_target, submit_login};
