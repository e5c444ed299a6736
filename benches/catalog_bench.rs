use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lending_library::{Book, BookEvent, BookState, Catalog, CatalogConfig, User};

fn bench_transition_table(c: &mut Criterion) {
    let events = [
        BookEvent::Borrow(User::regular("Naldo")),
        BookEvent::Borrow(User::premium("Sam")),
        BookEvent::Return,
        BookEvent::Reserve(User::regular("Naldo")),
    ];

    c.bench_function("state_next_full_table", |b| {
        b.iter(|| {
            BookState::ALL
                .iter()
                .flat_map(|state| events.iter().map(move |event| state.next(event, black_box(true))))
                .filter(Result::is_ok)
                .count()
        });
    });
}

fn bench_catalog_cycle(c: &mut Criterion) {
    c.bench_function("catalog_borrow_return_reserve", |b| {
        let mut catalog = Catalog::with_config(&CatalogConfig { max_history_size: 64 });
        let ids: Vec<_> = (0..32)
            .map(|i| catalog.add_book(Book::new(format!("Volume {i}"), i % 2 == 0)))
            .collect();
        let member = User::premium("Sam");

        b.iter(|| {
            for &id in &ids {
                drop(black_box(catalog.borrow_book(id, &member)));
                drop(black_box(catalog.return_book(id)));
                drop(black_box(catalog.reserve_book(id, &member)));
                drop(black_box(catalog.return_book(id)));
            }
        });
    });
}

criterion_group!(benches, bench_transition_table, bench_catalog_cycle);
criterion_main!(benches);
