//! Employee Service - CRUD over employee records stored in MongoDB.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
