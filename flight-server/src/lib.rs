//! Flight route planner server.
//!
//! A web service that answers: "given a start airport and a destination,
//! what are the direct connections and the K cheapest multi-hop
//! connections?"

pub mod data;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod web;
