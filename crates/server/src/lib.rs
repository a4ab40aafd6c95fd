#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod db;

pub mod api;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod auth;

#[cfg(feature = "server")]
pub mod ai;

#[cfg(feature = "server")]
pub mod repo;

#[cfg(feature = "server")]
pub mod tasks;

#[cfg(feature = "server")]
pub mod typst;
