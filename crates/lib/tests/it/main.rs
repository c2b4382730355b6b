/*! Integration tests for keyed-collection.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - collection: CRUD, combinators, cursor and key-shape classification
 * - transform: the deep-transform engine and export mirroring
 * - json: decoding, encoding and reconstruction from JSON
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("keyed_collection=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod collection;
mod helpers;
