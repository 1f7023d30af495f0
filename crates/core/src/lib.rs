//! Handloom Core - Shared types and record storage.
//!
//! This crate provides the pieces every Handloom page feature builds on:
//! - `storefront` - Buyer cart, cash-on-delivery checkout, login redirect
//! - `admin` - Artisan catalog editor and marketing banner selector
//! - `cli` - Terminal front end standing in for the browser page
//!
//! # Architecture
//!
//! The core crate contains only types, traits and the in-memory storage -
//! no filesystem or network I/O. Page features own their state and reach
//! durable storage only through [`storage::RecordStore`].
//!
//! # Modules
//!
//! - [`types`] - Product IDs, prices, stock counts and roles
//! - [`storage`] - Local-storage style key-value slots and typed records
//! - [`view`] - Prerequisite checks for features mounted on a page

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod storage;
pub mod types;
pub mod view;

pub use storage::{InMemoryStorage, KeyValueStorage, RecordStore, StorageError, StoreError};
pub use types::*;
pub use view::Mountable;
