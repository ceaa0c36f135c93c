//! Grouper Web Service Provider
//!
//! Implements `GroupMembershipProvider` against the Grouper REST API.
//! Deletes are sent with `POST`, adds with `PUT`, both to the group's
//! members URL with basic auth and a `text/x-json` body.

/// REST client
pub mod client;
/// Request and response bodies
pub mod protocol;

pub use client::GrouperMembershipProvider;
