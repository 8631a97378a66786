//! Bookstore Backend - GraphQL catalog service over MongoDB
//!
//! All operations are exposed via GraphQL at /graphql. The aggregate root is
//! a Book document embedding its authors and reviews; there are no separate
//! collections or joins.

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod graphql;
pub mod ids;
