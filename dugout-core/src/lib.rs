//! Core library for the dugout team toolkit.
//!
//! This crate provides everything the CLI builds on:
//! - calendar event types and ICS feed parsing
//! - the next-event resolver
//! - roster/account types and the backend service client
//! - configuration and persisted session state

pub mod backend;
pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod resolver;
pub mod session;
pub mod team;

pub use backend::BackendClient;
pub use config::GlobalConfig;
pub use error::{DugoutError, DugoutResult};
pub use event::{CalendarEvent, EventTime, NextEvent};
pub use resolver::{Resolution, resolve_next_event, select_next_event};
pub use session::Session;
