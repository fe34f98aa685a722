//! Benchmark suite for catalog operations
//!
//! Uses the divan benchmarking framework.
//!
//! ```bash
//! cargo bench
//! ```
//!
//! `advance_day` walks every patron's held items, so it is measured against
//! catalogs of increasing size where every patron holds an overdue item.

use library_circulation::{LibraryCatalog, LibraryItem, Patron};

fn main() {
    divan::main();
}

/// Catalog with `patrons` patrons, each holding one overdue movie
fn overdue_catalog(patrons: u32) -> LibraryCatalog {
    let mut catalog = LibraryCatalog::new();
    for id in 0..patrons {
        catalog.register_patron(Patron::new(id, format!("patron-{id}")));
        catalog.register_item(LibraryItem::movie(id, format!("movie-{id}"), "director"));
        catalog
            .check_out(id, id)
            .expect("Failed to check out benchmark item");
    }
    catalog.advance_days(8);
    catalog
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn advance_day(bencher: divan::Bencher, patrons: u32) {
    bencher
        .with_inputs(|| overdue_catalog(patrons))
        .bench_local_refs(|catalog| catalog.advance_day());
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn check_out_and_return(bencher: divan::Bencher, items: u32) {
    bencher
        .with_inputs(|| {
            let mut catalog = LibraryCatalog::new();
            catalog.register_patron(Patron::new(1, "Al"));
            for id in 0..items {
                catalog.register_item(LibraryItem::book(id, format!("book-{id}"), "author"));
            }
            catalog
        })
        .bench_local_refs(|catalog| {
            for id in 0..items {
                catalog.check_out(1, id).expect("Failed to check out");
            }
            for id in 0..items {
                catalog.return_item(id).expect("Failed to return");
            }
        });
}
