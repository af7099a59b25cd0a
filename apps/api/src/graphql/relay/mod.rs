//! Relay-style cursor pagination over an offset-based upstream
//!
//! The catalog service only understands `offset`/`size` windows, so
//! every paginated relationship goes through the same adapter:
//! cursors encode absolute indexes, connection arguments resolve to an
//! offset window, and the connection is rebuilt from the returned
//! slice plus whichever total the upstream reported (body field or
//! response header).

pub mod connection;
pub mod cursor;
pub mod params;

pub use connection::{build_connection, Connection, Edge, PageInfo, TotalCountSource};
pub use params::{ConnectionArgs, PageParams, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
