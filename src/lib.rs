//! Client-side catalog browser for the TMDB movie metadata API.
//!
//! [`tmdb::TmdbClient`] wraps the four read-only endpoints the catalog
//! consumes; [`catalog::Catalog`] owns the published result sets, the
//! busy/error flags, and the locally persisted watch-later list.

pub mod catalog;
pub mod error;
pub mod models;
pub mod tmdb;
pub mod watchlist;
