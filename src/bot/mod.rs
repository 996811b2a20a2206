//! Telegram moderation console.
//!
//! This module provides the operator-facing side channel of the platform: a
//! long-lived background task that receives Telegram updates, authenticates
//! operators, walks a per-chat pending-action state machine, and executes
//! moderation actions (ban story, warn user, list reports) against the
//! persistence and notification gateways.
//!
//! # Architecture
//!
//! - **Session** (`session`) - Typed per-chat dialogue state and the in-memory
//!   store that owns it. Nothing here is persisted: a restart forgets all
//!   authentication and pending actions.
//! - **Menu** (`menu`) - Button labels, callback-data tags, and the
//!   transport-neutral `Outbound` reply type.
//! - **Console** (`console`) - The state machine itself. Pure with respect to
//!   Telegram: it consumes `(chat id, text)` pairs and returns `Outbound`
//!   replies, so the whole dialogue is testable without a network.
//! - **Start** (`start`) - teloxide dispatcher glue: feeds updates to the
//!   console and translates `Outbound` replies into Telegram messages.
//! - **Notify** (`notify`) - Pushes new-report notifications to the
//!   configured admin chats.
//!
//! # Concurrency
//!
//! Updates for different chats are handled concurrently; updates for the same
//! chat serialize on a per-chat lock held for the whole handling of one
//! update, so the state machine never interleaves within a chat. Gateway
//! calls complete before the reply is sent; only notification email is
//! fire-and-forget relative to a moderation transaction.

pub mod console;
pub mod menu;
pub mod notify;
pub mod session;
pub mod start;

#[cfg(test)]
mod test;
