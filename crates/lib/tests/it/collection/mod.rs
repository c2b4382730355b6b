//! Collection integration tests
//!
//! Tests are organized by concern: CRUD and views, combinators, the cursor,
//! and key-shape classification.

mod classify;
mod cursor;
